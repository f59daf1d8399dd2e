pub mod error;
pub mod num;
pub mod parser;
pub mod pass1;
pub mod pass2;
pub mod table;
