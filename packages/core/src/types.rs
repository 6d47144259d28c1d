// ABOUTME: List and item type definitions
// ABOUTME: Records as stored, request inputs, defaults, and delete confirmations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LIST_ID;

/// A named container of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A text entry belonging to a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub text: String,
    /// `None` only if the schema's `ON DELETE SET NULL` ever fires
    pub list_id: Option<i64>,
    pub is_hidden: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListCreateInput {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListUpdateInput {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCreateInput {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hidden_flag::deserialize"
    )]
    pub is_hidden: Option<bool>,
}

/// Partial item update. `text` is always required; the optional fields are
/// only written when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdateInput {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "hidden_flag::deserialize"
    )]
    pub is_hidden: Option<bool>,
}

/// Values filled into an item when the caller leaves them out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDefaults {
    pub list_id: i64,
    pub is_hidden: bool,
}

impl Default for ItemDefaults {
    fn default() -> Self {
        Self {
            list_id: DEFAULT_LIST_ID,
            is_hidden: false,
        }
    }
}

/// Body returned by delete endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteConfirmation {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reassigned_items: Option<u64>,
}

impl DeleteConfirmation {
    pub fn list_deleted(reassigned_items: u64) -> Self {
        Self {
            message: "List deleted successfully".to_string(),
            reassigned_items: Some(reassigned_items),
        }
    }

    pub fn item_deleted() -> Self {
        Self {
            message: "Item deleted successfully".to_string(),
            reassigned_items: None,
        }
    }
}

/// `isHidden` arrives either as a JSON boolean or as the stored 0/1 integer.
mod hidden_flag {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Flag>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Flag::Bool(flag)) => Ok(Some(flag)),
            Some(Flag::Int(0)) => Ok(Some(false)),
            Some(Flag::Int(1)) => Ok(Some(true)),
            Some(Flag::Int(other)) => Err(D::Error::custom(format!(
                "isHidden must be a boolean, 0 or 1 (got {})",
                other
            ))),
        }
    }
}
