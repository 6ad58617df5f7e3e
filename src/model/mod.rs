pub mod category;
pub mod entry;
