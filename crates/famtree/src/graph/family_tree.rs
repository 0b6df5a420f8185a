//! Main `FamilyTree` store: owning collections and node lookup.

use super::types::{Edge, Marriage, Node, NodeId, Person};
use crate::error::{FamilyTreeError, Result};
use indexmap::IndexMap;
use std::collections::HashSet;

/// The family tree graph.
///
/// People and marriages live in flat maps keyed by [`NodeId`]; edges and
/// marriage child lists refer to them by ID only. The people map keeps
/// insertion order until [`sort`](FamilyTree::sort) rearranges it.
///
/// Equality compares content, not ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyTree {
    pub(crate) people: IndexMap<NodeId, Person>,
    pub(crate) marriages: IndexMap<NodeId, Marriage>,
    pub(crate) edges: HashSet<Edge>,
}

impl FamilyTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a tree from existing parts, keeping their identifiers.
    pub(crate) fn from_parts(
        people: IndexMap<NodeId, Person>,
        marriages: IndexMap<NodeId, Marriage>,
        edges: HashSet<Edge>,
    ) -> Self {
        Self {
            people,
            marriages,
            edges,
        }
    }

    /// Look up any node by ID.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyTreeError::NodeNotFound`] if neither a person nor a
    /// marriage has this ID.
    pub fn node(&self, id: NodeId) -> Result<Node<'_>> {
        if let Some(person) = self.people.get(&id) {
            return Ok(Node::Person(person));
        }
        self.marriages
            .get(&id)
            .map(Node::Marriage)
            .ok_or_else(|| FamilyTreeError::node_not_found(id))
    }

    /// Get a person by ID.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyTreeError::NodeNotFound`] if no person has this ID.
    pub fn person(&self, id: NodeId) -> Result<&Person> {
        self.people
            .get(&id)
            .ok_or_else(|| FamilyTreeError::node_not_found(id))
    }

    pub(crate) fn person_mut(&mut self, id: NodeId) -> Result<&mut Person> {
        self.people
            .get_mut(&id)
            .ok_or_else(|| FamilyTreeError::node_not_found(id))
    }

    /// Get a marriage by ID.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyTreeError::NodeNotFound`] if no marriage has this ID.
    pub fn marriage(&self, id: NodeId) -> Result<&Marriage> {
        self.marriages
            .get(&id)
            .ok_or_else(|| FamilyTreeError::node_not_found(id))
    }

    /// Union view of people and marriages, people first.
    ///
    /// This is a projection built on each call, not stored state.
    pub fn all_nodes(&self) -> IndexMap<NodeId, Node<'_>> {
        self.people
            .iter()
            .map(|(id, person)| (*id, Node::Person(person)))
            .chain(
                self.marriages
                    .iter()
                    .map(|(id, marriage)| (*id, Node::Marriage(marriage))),
            )
            .collect()
    }

    /// People in display order.
    pub fn people(&self) -> &IndexMap<NodeId, Person> {
        &self.people
    }

    /// Marriages in insertion order.
    pub fn marriages(&self) -> &IndexMap<NodeId, Marriage> {
        &self.marriages
    }

    /// All spouse→marriage edges.
    pub fn edges(&self) -> &HashSet<Edge> {
        &self.edges
    }

    /// Whether a person or marriage has this ID.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.people.contains_key(&id) || self.marriages.contains_key(&id)
    }

    /// Number of people.
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Number of marriages.
    pub fn marriage_count(&self) -> usize {
        self.marriages.len()
    }

    /// Number of people plus marriages.
    pub fn node_count(&self) -> usize {
        self.people.len() + self.marriages.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.marriages.is_empty()
    }

    // ===== Algorithm Methods =====

    /// Whether people and marriages form one connected component.
    ///
    /// Spouse edges and marriage→child links are treated as undirected.
    /// A dangling reference makes the tree disconnected. An empty tree
    /// counts as connected.
    pub fn is_connected(&self) -> bool {
        super::algorithms::is_connected(self)
    }

    /// Referenced IDs that are neither a person nor a marriage.
    ///
    /// Any such reference makes [`is_connected`](Self::is_connected) false.
    pub fn dangling_references(&self) -> Vec<NodeId> {
        super::algorithms::dangling_references(self)
    }

    /// All connected components, each listed in [`all_nodes`](Self::all_nodes) order.
    pub fn connected_components(&self) -> Vec<Vec<NodeId>> {
        super::algorithms::connected_components(self)
    }

    /// Neighbors of a node in the undirected view.
    ///
    /// # Errors
    ///
    /// Returns [`FamilyTreeError::NodeNotFound`] if the node doesn't exist.
    pub fn neighbors(&self, id: NodeId) -> Result<Vec<NodeId>> {
        self.node(id)?;
        Ok(super::algorithms::neighbors(self, id))
    }

    // ===== Export Methods =====

    /// Export the tree to Graphviz DOT format.
    pub fn export_dot(&self) -> String {
        crate::export::export_dot(self)
    }

    /// Export the tree to Graphviz DOT format with custom styling options.
    pub fn export_dot_styled(&self, options: &crate::export::DotOptions) -> String {
        crate::export::export_dot_styled(self, options)
    }
}
