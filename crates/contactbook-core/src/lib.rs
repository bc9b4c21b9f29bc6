pub mod constants;
pub mod contact;
#[cfg(test)]
mod tests;
pub mod validation;

pub use contact::{Contact, ContactFields, ContactRecord, RowSource};
pub use validation::{RowError, RowErrorReason};
