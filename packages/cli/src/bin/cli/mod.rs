pub mod items;
pub mod lists;
pub mod utils;
