//! Family relationship queries derived from edges and child lists.
//!
//! These are read-only conveniences for renderers and editing front ends.
//! Results keep the order in which marriages were created and children were
//! listed, without duplicates.

use crate::error::Result;
use crate::graph::{FamilyTree, NodeId};

fn push_unique(out: &mut Vec<NodeId>, id: NodeId) {
    if !out.contains(&id) {
        out.push(id);
    }
}

impl FamilyTree {
    /// Marriages this person is a spouse in.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyTreeError::NodeNotFound`](crate::FamilyTreeError::NodeNotFound)
    /// if `person` is not a person.
    pub fn marriages_of(&self, person: NodeId) -> Result<Vec<NodeId>> {
        self.person(person)?;
        let joined = self.marriages_with_spouse(person);
        Ok(self
            .marriages
            .keys()
            .copied()
            .filter(|id| joined.contains(id))
            .collect())
    }

    /// Everyone this person has married.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyTreeError::NodeNotFound`](crate::FamilyTreeError::NodeNotFound)
    /// if `person` is not a person.
    pub fn spouses_of(&self, person: NodeId) -> Result<Vec<NodeId>> {
        let mut spouses = Vec::new();
        for marriage in self.marriages_of(person)? {
            for spouse in self.spouses_in(marriage) {
                if spouse != person {
                    push_unique(&mut spouses, spouse);
                }
            }
        }
        Ok(spouses)
    }

    /// Children across all of this person's marriages.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyTreeError::NodeNotFound`](crate::FamilyTreeError::NodeNotFound)
    /// if `person` is not a person.
    pub fn children_of(&self, person: NodeId) -> Result<Vec<NodeId>> {
        let mut children = Vec::new();
        for marriage_id in self.marriages_of(person)? {
            if let Some(marriage) = self.marriages.get(&marriage_id) {
                for child in &marriage.children {
                    push_unique(&mut children, *child);
                }
            }
        }
        Ok(children)
    }

    /// Spouses of every marriage listing this person as a child.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyTreeError::NodeNotFound`](crate::FamilyTreeError::NodeNotFound)
    /// if `person` is not a person.
    pub fn parents_of(&self, person: NodeId) -> Result<Vec<NodeId>> {
        self.person(person)?;
        let mut parents = Vec::new();
        for marriage_id in self.parent_marriages(person) {
            for spouse in self.spouses_in(marriage_id) {
                push_unique(&mut parents, spouse);
            }
        }
        Ok(parents)
    }

    /// Other children of the marriages this person was born into.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyTreeError::NodeNotFound`](crate::FamilyTreeError::NodeNotFound)
    /// if `person` is not a person.
    pub fn siblings_of(&self, person: NodeId) -> Result<Vec<NodeId>> {
        self.person(person)?;
        let mut siblings = Vec::new();
        for marriage_id in self.parent_marriages(person) {
            if let Some(marriage) = self.marriages.get(&marriage_id) {
                for child in &marriage.children {
                    if *child != person {
                        push_unique(&mut siblings, *child);
                    }
                }
            }
        }
        Ok(siblings)
    }

    /// Sources of edges into `marriage`, people order first for stability.
    fn spouses_in(&self, marriage: NodeId) -> Vec<NodeId> {
        let mut spouses: Vec<NodeId> = self
            .edges
            .iter()
            .filter(|edge| edge.target == marriage)
            .map(|edge| edge.source)
            .collect();
        spouses.sort_by_key(|id| self.people.get_index_of(id).unwrap_or(usize::MAX));
        spouses
    }

    fn parent_marriages(&self, person: NodeId) -> Vec<NodeId> {
        self.marriages
            .iter()
            .filter(|(_, marriage)| marriage.has_child(person))
            .map(|(id, _)| *id)
            .collect()
    }
}
