use clap::Subcommand;
use colored::*;
use inquire::Confirm;
use listkeep_core::{ItemCreateInput, ItemUpdateInput};

use super::utils::{client_for, format_date, new_table, truncate};

#[derive(Subcommand)]
pub enum ItemsCommands {
    /// Show items, newest first
    #[command(alias = "ls")]
    List {
        /// Only items of this list
        #[arg(short, long)]
        list: Option<i64>,
        /// Include hidden items
        #[arg(long)]
        hidden: bool,
    },
    /// Add an item
    Add {
        /// Item text
        text: String,
        /// Target list (server default when omitted)
        #[arg(short, long)]
        list: Option<i64>,
        /// Create the item hidden
        #[arg(long)]
        hidden: bool,
    },
    /// Edit an item; omitted fields keep their current value
    Edit {
        /// Item ID to edit
        id: i64,
        /// New text
        #[arg(short, long)]
        text: Option<String>,
        /// Move to this list
        #[arg(short, long)]
        list: Option<i64>,
        /// Hide the item
        #[arg(long, conflicts_with = "show")]
        hide: bool,
        /// Unhide the item
        #[arg(long)]
        show: bool,
    },
    /// Delete an item
    #[command(alias = "rm")]
    Delete {
        /// Item ID to delete
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle_items_command(command: ItemsCommands, url: Option<String>) -> anyhow::Result<()> {
    let client = client_for(url);

    match command {
        ItemsCommands::List { list, hidden } => {
            let items = match list {
                Some(list_id) => client.get_items_by_list_id(list_id).await?,
                None => client.get_all_items().await?,
            };
            let visible: Vec<_> = items
                .into_iter()
                .filter(|item| hidden || !item.is_hidden)
                .collect();

            if visible.is_empty() {
                println!("{}", "No items found".yellow());
                return Ok(());
            }

            let mut table = new_table(vec!["ID", "Text", "List", "Hidden", "Created"]);
            for item in &visible {
                table.add_row(vec![
                    item.id.to_string(),
                    truncate(&item.text, 50),
                    item.list_id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                    if item.is_hidden { "yes" } else { "" }.to_string(),
                    format_date(&item.created_at),
                ]);
            }

            println!("{}", table);
            println!("Total: {} items", visible.len().to_string().cyan());
        }
        ItemsCommands::Add { text, list, hidden } => {
            let item = client
                .create_item(&ItemCreateInput {
                    text,
                    list_id: list,
                    is_hidden: hidden.then_some(true),
                })
                .await?;
            println!(
                "{} Added item {} to list {}",
                "✓".green(),
                item.id,
                item.list_id.unwrap_or_default()
            );
        }
        ItemsCommands::Edit {
            id,
            text,
            list,
            hide,
            show,
        } => {
            // Updates always carry text, so keep the current one when none is given
            let text = match text {
                Some(text) => text,
                None => client.get_item(id).await?.text,
            };
            let is_hidden = match (hide, show) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };

            let item = client
                .update_item(
                    id,
                    &ItemUpdateInput {
                        text,
                        list_id: list,
                        is_hidden,
                    },
                )
                .await?;
            println!("{} Updated item {}", "✓".green(), item.id);
        }
        ItemsCommands::Delete { id, yes } => {
            if !yes {
                let item = client.get_item(id).await?;
                let confirmed = Confirm::new(&format!("Delete '{}'?", truncate(&item.text, 40)))
                    .with_default(false)
                    .prompt()?;

                if !confirmed {
                    println!("{}", "Cancelled".yellow());
                    return Ok(());
                }
            }

            let confirmation = client.delete_item(id).await?;
            println!("{} {}", "✓".green(), confirmation.message);
        }
    }

    Ok(())
}
