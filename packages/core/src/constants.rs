/// Id of the list every item falls back to; it always exists and cannot be deleted
pub const DEFAULT_LIST_ID: i64 = 1;

/// Name given to the default list when the store seeds it
pub const DEFAULT_LIST_NAME: &str = "Default";
