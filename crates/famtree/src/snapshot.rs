//! JSON snapshots: the only durable form of a tree.
//!
//! A snapshot holds three fields:
//!
//! ```json
//! {
//!   "people":    { "<uuid>": { "name": "...", "gender": "male", "birth_year": 1950, "death_year": null } },
//!   "marriages": { "<uuid>": { "children": ["<uuid>"] } },
//!   "edges":     [ { "source": "<uuid>", "target": "<uuid>" } ]
//! }
//! ```
//!
//! People are written in display order and edges sorted by
//! `(source, target)`, so exporting an unchanged tree is byte-stable.
//! Importing parses every snapshot before touching the receiver, merges them
//! in order and sorts the result.

use crate::error::{FamilyTreeError, Result};
use crate::graph::{Edge, FamilyTree, Marriage, MergeReport, NodeId, Person};
use indexmap::IndexMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialized form of a [`FamilyTree`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Snapshot {
    /// Person records by ID
    pub people: IndexMap<NodeId, Person>,
    /// Marriage records by ID
    pub marriages: IndexMap<NodeId, Marriage>,
    /// Spouse→marriage edges
    pub edges: Vec<Edge>,
}

impl From<&FamilyTree> for Snapshot {
    fn from(tree: &FamilyTree) -> Self {
        let mut edges: Vec<Edge> = tree.edges().iter().copied().collect();
        edges.sort();
        Self {
            people: tree.people().clone(),
            marriages: tree.marriages().clone(),
            edges,
        }
    }
}

impl From<Snapshot> for FamilyTree {
    fn from(snapshot: Snapshot) -> Self {
        FamilyTree::from_parts(
            snapshot.people,
            snapshot.marriages,
            snapshot.edges.into_iter().collect(),
        )
    }
}

impl Snapshot {
    /// Parse a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyTreeError::Serialization`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| FamilyTreeError::serialization("Failed to parse snapshot", Some(e)))
    }

    /// Render this snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyTreeError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FamilyTreeError::serialization("Failed to serialize snapshot", Some(e)))
    }
}

impl FamilyTree {
    /// Decode a tree from snapshot JSON, keeping the stored person order.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyTreeError::Serialization`] on malformed input.
    pub fn from_snapshot_json(json: &str) -> Result<Self> {
        Snapshot::from_json(json).map(FamilyTree::from)
    }

    /// Export the current state as snapshot JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyTreeError::Serialization`] if encoding fails.
    pub fn export_snapshot(&self) -> Result<String> {
        let json = Snapshot::from(self).to_json()?;
        info!(
            "Exported snapshot: {} people, {} marriages, {} edges",
            self.person_count(),
            self.marriage_count(),
            self.edge_count()
        );
        Ok(json)
    }

    /// Merge snapshots into this tree, then sort.
    ///
    /// Every snapshot is parsed before any is merged, so a malformed one
    /// leaves the tree untouched.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyTreeError::Serialization`] naming the index of the
    /// first snapshot that failed to parse.
    pub fn import<I, S>(&mut self, snapshots: I) -> Result<MergeReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = snapshots
            .into_iter()
            .enumerate()
            .map(|(index, json)| {
                serde_json::from_str::<Snapshot>(json.as_ref()).map_err(|e| {
                    FamilyTreeError::serialization(
                        format!("Failed to parse snapshot #{index}"),
                        Some(e),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut total = MergeReport::default();
        for snapshot in parsed {
            let report = self.merge(&FamilyTree::from(snapshot));
            total.people_added += report.people_added;
            total.people_replaced += report.people_replaced;
            total.marriages_added += report.marriages_added;
            total.marriages_replaced += report.marriages_replaced;
            total.edges_added += report.edges_added;
        }
        self.sort();

        info!(
            "Imported snapshots: {} people, {} marriages, {} edges",
            self.person_count(),
            self.marriage_count(),
            self.edge_count()
        );
        Ok(total)
    }

    /// Write snapshot JSON to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyTreeError::Io`] if the file cannot be written.
    pub fn save_snapshot_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!("Saving snapshot to {path:?}");
        let json = self.export_snapshot()?;
        std::fs::write(path, json).map_err(|e| FamilyTreeError::io(path, e))
    }
}

/// Build a tree from any number of snapshots: merged in order, then sorted.
///
/// # Errors
///
/// Returns [`FamilyTreeError::Serialization`] if any snapshot is malformed.
pub fn import_snapshots<I, S>(snapshots: I) -> Result<FamilyTree>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tree = FamilyTree::new();
    tree.import(snapshots)?;
    Ok(tree)
}

/// Read a snapshot file into a tree, keeping the stored person order.
///
/// # Errors
///
/// Returns [`FamilyTreeError::Io`] if the file cannot be read or
/// [`FamilyTreeError::Serialization`] if it is malformed.
pub fn load_snapshot_file(path: impl AsRef<Path>) -> Result<FamilyTree> {
    let path = path.as_ref();
    debug!("Loading snapshot from {path:?}");
    let json = std::fs::read_to_string(path).map_err(|e| FamilyTreeError::io(path, e))?;
    FamilyTree::from_snapshot_json(&json)
}
