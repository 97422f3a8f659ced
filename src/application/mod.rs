//! Application layer: services and use cases
//!
//! This layer reads edge lists, runs the domain validator and reports results.

pub mod edges;
pub mod error;
pub mod error_ext;
pub mod services;

pub use edges::{EdgeList, EdgeParseError};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
