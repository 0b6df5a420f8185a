//! Core tree types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Person`] and [`Marriage`]: the two node kinds, viewed together as [`Node`]
//! - [`Edge`]: spouse→marriage links
//! - [`FamilyTree`]: the store, with mutation, merge and ordering operations

mod types;
mod family_tree;
mod merge;
mod mutation;
mod ordering;
pub mod algorithms;

pub use types::{Edge, Gender, Marriage, Node, NodeId, NodeKind, ParseGenderError, Person};
pub use family_tree::FamilyTree;
pub use merge::MergeReport;
pub use mutation::PersonUpdate;
