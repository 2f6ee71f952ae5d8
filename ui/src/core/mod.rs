pub mod format;
pub mod records;
