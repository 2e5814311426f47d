pub mod field;
pub mod hac;

pub use field::FieldError;
pub use hac::{ErrorKind, HacError};
