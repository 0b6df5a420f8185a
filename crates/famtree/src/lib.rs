//! # famtree
//!
//! A genealogical graph of people, marriages and children, with
//! deduplicating edits, conflict-free merging and a deterministic display
//! order.
//!
//! ## Core Principles
//!
//! - **Identity by UUID**: every person and marriage gets a random ID that
//!   is never reused, so independently edited trees merge without remapping
//! - **References, not pointers**: edges and child lists hold IDs; deletion
//!   prunes them explicitly
//! - **Snapshots only**: the tree lives in memory; a JSON snapshot is its
//!   only durable form
//! - **Zero Magic**: callers decide when to sort, merge and save
//!
//! ## Architecture
//!
//! ```text
//! Callers (CLI, editors, renderers)
//!     ↓
//! Snapshot import/export · DOT export · queries
//!     ↓
//! Mutation · Merge · Ordering
//!     ↓
//! FamilyTree store (people, marriages, edges)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use famtree::{FamilyTree, Gender};
//!
//! let mut tree = FamilyTree::new();
//! let a = tree.create_person("Arthur", Gender::Male, 1950, None);
//! let b = tree.create_person("Beatrice", Gender::Female, 1952, None);
//! let c = tree.create_person("Clara", Gender::Female, 1980, None);
//!
//! tree.create_marriage(a, b, None);
//! tree.update_marriage(a, b, Some(vec![c]));
//! tree.sort();
//!
//! assert!(tree.is_connected());
//! let json = tree.export_snapshot().unwrap();
//! let restored = FamilyTree::from_snapshot_json(&json).unwrap();
//! assert_eq!(restored, tree);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;
pub mod query;
pub mod relations;
pub mod snapshot;

// Re-export main types
pub use error::{FamilyTreeError, Result};
pub use graph::{
    Edge, FamilyTree, Gender, Marriage, MergeReport, Node, NodeId, NodeKind, ParseGenderError,
    Person, PersonUpdate,
};
pub use query::PersonQuery;
pub use snapshot::{import_snapshots, load_snapshot_file, Snapshot};
