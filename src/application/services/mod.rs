//! Application services

pub mod validation;

pub use validation::{Report, ValidationService};
