//! Deterministic display order for people.

use super::family_tree::FamilyTree;
use log::trace;

impl FamilyTree {
    /// Reorder people for display.
    ///
    /// Key, ascending: gender rank (male, female, other), birth year, name.
    /// The sort is stable, so re-sorting is a no-op. IDs, marriages and
    /// edges are untouched.
    pub fn sort(&mut self) {
        self.people
            .sort_by(|_, a, _, b| a.sort_key().cmp(&b.sort_key()));
        trace!("Sorted {} people", self.people.len());
    }

    /// Whether people are already in display order.
    pub fn is_sorted(&self) -> bool {
        self.people
            .values()
            .zip(self.people.values().skip(1))
            .all(|(a, b)| a.sort_key() <= b.sort_key())
    }
}
