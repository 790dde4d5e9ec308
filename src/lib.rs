pub mod error;
pub mod frontend;
pub mod printer;
