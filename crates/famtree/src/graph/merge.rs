//! Merging independently edited trees.

use super::family_tree::FamilyTree;
use log::debug;

/// What a [`FamilyTree::merge`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// People whose ID was new to the receiver
    pub people_added: usize,
    /// People whose ID already existed with different content
    pub people_replaced: usize,
    /// Marriages whose ID was new to the receiver
    pub marriages_added: usize,
    /// Marriages whose ID already existed with different content
    pub marriages_replaced: usize,
    /// Edges not already present
    pub edges_added: usize,
}

impl MergeReport {
    /// Whether the merge left the receiver's content unchanged.
    pub fn is_noop(&self) -> bool {
        self.people_added == 0
            && self.people_replaced == 0
            && self.marriages_added == 0
            && self.marriages_replaced == 0
            && self.edges_added == 0
    }
}

impl FamilyTree {
    /// Union `other` into this tree.
    ///
    /// On colliding IDs `other`'s person or marriage wins (last write wins);
    /// a collision only counts as replaced when the content differs.
    /// An overwritten person keeps its place in the display order; new IDs
    /// are appended in `other`'s order. Edges are unioned as a set. IDs are
    /// never remapped.
    pub fn merge(&mut self, other: &FamilyTree) -> MergeReport {
        let mut report = MergeReport::default();

        for (id, person) in &other.people {
            match self.people.insert(*id, person.clone()) {
                Some(previous) if previous != *person => report.people_replaced += 1,
                Some(_) => {}
                None => report.people_added += 1,
            }
        }

        for (id, marriage) in &other.marriages {
            match self.marriages.insert(*id, marriage.clone()) {
                Some(previous) if previous != *marriage => report.marriages_replaced += 1,
                Some(_) => {}
                None => report.marriages_added += 1,
            }
        }

        for edge in &other.edges {
            if self.edges.insert(*edge) {
                report.edges_added += 1;
            }
        }

        debug!("Merged tree: {report:?}");
        report
    }
}
