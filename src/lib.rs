pub mod error;
pub mod lists;
pub mod num;
pub mod records;
pub mod symbols;
pub mod value;
