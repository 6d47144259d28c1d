use clap::Subcommand;
use colored::*;
use inquire::Confirm;
use listkeep_core::{ListCreateInput, ListUpdateInput, DEFAULT_LIST_ID};

use super::utils::{client_for, format_date, new_table, truncate};

#[derive(Subcommand)]
pub enum ListsCommands {
    /// Show all lists
    #[command(alias = "ls")]
    List,
    /// Create a new list
    Add {
        /// Name of the new list
        name: String,
    },
    /// Rename a list
    Rename {
        /// List ID to rename
        id: i64,
        /// New name
        name: String,
    },
    /// Delete a list; its items move to the default list
    #[command(alias = "rm")]
    Delete {
        /// List ID to delete
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle_lists_command(command: ListsCommands, url: Option<String>) -> anyhow::Result<()> {
    let client = client_for(url);

    match command {
        ListsCommands::List => {
            let lists = client.get_all_lists().await?;

            let mut table = new_table(vec!["ID", "Name", "Created", "Updated"]);
            for list in &lists {
                let name = if list.id == DEFAULT_LIST_ID {
                    format!("{} (default)", truncate(&list.name, 30))
                } else {
                    truncate(&list.name, 40)
                };
                table.add_row(vec![
                    list.id.to_string(),
                    name,
                    format_date(&list.created_at),
                    format_date(&list.updated_at),
                ]);
            }

            println!("{}", table);
            println!("Total: {} lists", lists.len().to_string().cyan());
        }
        ListsCommands::Add { name } => {
            let list = client.create_list(&ListCreateInput { name }).await?;
            println!(
                "{} Created list {} ({})",
                "✓".green(),
                list.name.bold(),
                list.id
            );
        }
        ListsCommands::Rename { id, name } => {
            let list = client.update_list(id, &ListUpdateInput { name }).await?;
            println!("{} Renamed list {} to {}", "✓".green(), id, list.name.bold());
        }
        ListsCommands::Delete { id, yes } => {
            let list = client.get_list(id).await?;

            if !yes {
                let confirmed = Confirm::new(&format!(
                    "Delete list '{}'? Its items move to the default list.",
                    list.name
                ))
                .with_default(false)
                .prompt()?;

                if !confirmed {
                    println!("{}", "Cancelled".yellow());
                    return Ok(());
                }
            }

            let confirmation = client.delete_list(id).await?;
            println!("{} {}", "✓".green(), confirmation.message);
            if let Some(moved) = confirmation.reassigned_items.filter(|n| *n > 0) {
                println!(
                    "{}",
                    format!("{} item(s) moved to the default list", moved).dimmed()
                );
            }
        }
    }

    Ok(())
}
