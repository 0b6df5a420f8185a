//! Create, update and delete operations on people and marriages.

use super::family_tree::FamilyTree;
use super::types::{new_node_id, Edge, Gender, Marriage, NodeId, Person};
use crate::error::{FamilyTreeError, Result};
use log::{debug, trace};
use std::collections::HashSet;

/// Field changes for [`FamilyTree::update_person`].
///
/// Unset fields keep their current value. A year of `0` also counts as
/// unset, so a birth or death year can never be set to `0` this way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersonUpdate {
    /// New gender
    pub gender: Option<Gender>,
    /// New birth year (`0` is ignored)
    pub birth_year: Option<i32>,
    /// New death year (`0` is ignored)
    pub death_year: Option<i32>,
}

impl PersonUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set the gender.
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Builder pattern: set the birth year.
    pub fn birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }

    /// Builder pattern: set the death year.
    pub fn death_year(mut self, year: i32) -> Self {
        self.death_year = Some(year);
        self
    }

    fn apply(&self, person: &mut Person) {
        if let Some(gender) = self.gender {
            person.gender = gender;
        }
        if let Some(year) = self.birth_year.filter(|y| *y != 0) {
            person.birth_year = year;
        }
        if let Some(year) = self.death_year.filter(|y| *y != 0) {
            person.death_year = Some(year);
        }
    }
}

impl FamilyTree {
    /// Add a person, or return the existing one with identical attributes.
    ///
    /// Calling this twice with the same arguments yields the same ID and
    /// only one entry.
    pub fn create_person(
        &mut self,
        name: &str,
        gender: Gender,
        birth_year: i32,
        death_year: Option<i32>,
    ) -> NodeId {
        if let Some((id, _)) = self
            .people
            .iter()
            .find(|(_, p)| p.matches(name, gender, birth_year, death_year))
        {
            trace!("Person '{name}' already exists as {id}");
            return *id;
        }

        let id = new_node_id();
        debug!("Adding person: id={id}, name={name}, gender={gender}, born={birth_year}");
        self.people
            .insert(id, Person::new(name, gender, birth_year, death_year));
        id
    }

    /// Update a person's gender, birth year or death year.
    ///
    /// With `person_id` the person is addressed directly; without it, `name`
    /// must match exactly one person. The name itself is never changed.
    ///
    /// # Errors
    ///
    /// - [`FamilyTreeError::NodeNotFound`] if `person_id` is not a person
    /// - [`FamilyTreeError::PersonNotFound`] if nobody has `name`
    /// - [`FamilyTreeError::AmbiguousMatch`] if several people share `name`
    pub fn update_person(
        &mut self,
        name: &str,
        update: PersonUpdate,
        person_id: Option<NodeId>,
    ) -> Result<NodeId> {
        let id = match person_id {
            Some(id) => id,
            None => self.resolve_person_by_name(name)?,
        };

        debug!("Updating person: id={id}");
        let person = self.person_mut(id)?;
        update.apply(person);
        Ok(id)
    }

    /// Find the single person with exactly this name.
    ///
    /// # Errors
    ///
    /// [`FamilyTreeError::PersonNotFound`] on no match,
    /// [`FamilyTreeError::AmbiguousMatch`] on several.
    pub fn resolve_person_by_name(&self, name: &str) -> Result<NodeId> {
        let matches: Vec<NodeId> = self
            .people
            .iter()
            .filter(|(_, p)| p.name == name)
            .map(|(id, _)| *id)
            .collect();

        match matches.as_slice() {
            [] => Err(FamilyTreeError::PersonNotFound {
                name: name.to_string(),
            }),
            [id] => Ok(*id),
            _ => Err(FamilyTreeError::AmbiguousMatch {
                name: name.to_string(),
                count: matches.len(),
            }),
        }
    }

    /// Add a marriage between two spouses.
    ///
    /// Creates the marriage node plus one spouse→marriage edge per spouse.
    /// Spouse IDs are not checked, and repeated marriages between the same
    /// pair are allowed.
    pub fn create_marriage(
        &mut self,
        spouse1: NodeId,
        spouse2: NodeId,
        children: Option<Vec<NodeId>>,
    ) -> NodeId {
        let id = new_node_id();
        debug!("Adding marriage: id={id}, spouses=({spouse1}, {spouse2})");
        self.marriages
            .insert(id, Marriage::new(children.unwrap_or_default()));
        self.edges.insert(Edge::new(spouse1, id));
        self.edges.insert(Edge::new(spouse2, id));
        id
    }

    /// Replace the children of the first marriage shared by both spouses.
    ///
    /// Marriages are scanned in insertion order. Returns `None`, leaving the
    /// tree unchanged, if the spouses share no marriage.
    pub fn update_marriage(
        &mut self,
        spouse1: NodeId,
        spouse2: NodeId,
        children: Option<Vec<NodeId>>,
    ) -> Option<NodeId> {
        let first = self.marriages_with_spouse(spouse1);
        let second = self.marriages_with_spouse(spouse2);

        let id = *self
            .marriages
            .keys()
            .find(|id| first.contains(id) && second.contains(id))?;

        debug!("Updating marriage: id={id}");
        if let Some(marriage) = self.marriages.get_mut(&id) {
            marriage.children = children.unwrap_or_default();
        }
        Some(id)
    }

    /// Remove a person or marriage and every reference to it.
    ///
    /// Drops all edges touching the node and removes it from every
    /// marriage's child list. Remaining people keep their order.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyTreeError::NodeNotFound`] if the ID is neither.
    pub fn delete_node(&mut self, id: NodeId) -> Result<()> {
        debug!("Deleting node: id={id}");
        if self.people.shift_remove(&id).is_none() && self.marriages.shift_remove(&id).is_none() {
            return Err(FamilyTreeError::node_not_found(id));
        }

        let before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(id));
        trace!("Deleted {} connected edges for node {id}", before - self.edges.len());

        for marriage in self.marriages.values_mut() {
            marriage.children.retain(|child| *child != id);
        }

        Ok(())
    }

    /// IDs of marriages `spouse` has an edge into.
    pub(crate) fn marriages_with_spouse(&self, spouse: NodeId) -> HashSet<NodeId> {
        self.edges
            .iter()
            .filter(|edge| edge.source == spouse && self.marriages.contains_key(&edge.target))
            .map(|edge| edge.target)
            .collect()
    }
}
