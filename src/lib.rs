//! Structural validation of parent/child edge lists.
//!
//! An edge list is a proper binary tree when no node has more than two
//! children, exactly one node never appears as a child, and following child
//! links never loops back onto the current path.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{
    is_proper_binary_tree, validate, CycleStrategy, Edge, ValidationOptions, Validator, Verdict,
    Violation,
};
