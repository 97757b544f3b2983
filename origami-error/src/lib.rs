pub mod error;
pub mod type_error;
