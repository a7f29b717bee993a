pub mod list;
pub mod merge;

pub use list::{build_list, clear_checked, display_quantity, toggle_item};
pub use merge::merge_items;
