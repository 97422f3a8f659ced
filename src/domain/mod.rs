//! Domain layer: edge graph construction and tree validation
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod edge;
pub mod error;
pub mod validator;
pub mod verdict;

pub use arena::{GraphNode, NodeArena};
pub use builder::{EdgeGraph, GraphBuilder, BINARY_ARITY};
pub use edge::Edge;
pub use error::Violation;
pub use validator::{
    is_proper_binary_tree, validate, CycleStrategy, ValidationOptions, Validator,
};
pub use verdict::Verdict;
