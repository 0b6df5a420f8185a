//! Connectivity algorithms over the undirected family view.
//!
//! The undirected view joins every spouse→marriage edge and every
//! marriage→child link in both directions. Only links whose endpoints are
//! both people or marriages take part; an ID referenced by an edge or child
//! list but absent from the tree is a dangling reference and never joins two
//! families. Traversal is iterative so deep family lines cannot overflow the
//! stack.

use crate::graph::{FamilyTree, NodeId};
use std::collections::{HashMap, HashSet};

/// Undirected adjacency built from edges and child links.
type Adjacency = HashMap<NodeId, Vec<NodeId>>;

fn build_adjacency(tree: &FamilyTree) -> Adjacency {
    let mut adjacency: Adjacency = HashMap::new();
    let mut link = |a: NodeId, b: NodeId| {
        if !(tree.contains_node(a) && tree.contains_node(b)) {
            return;
        }
        adjacency.entry(a).or_default().push(b);
        adjacency.entry(b).or_default().push(a);
    };

    for edge in &tree.edges {
        link(edge.source, edge.target);
    }
    for (marriage_id, marriage) in &tree.marriages {
        for child in &marriage.children {
            link(*marriage_id, *child);
        }
    }

    adjacency
}

/// Every ID referenced by an edge endpoint or a child list.
fn referenced_ids(tree: &FamilyTree) -> impl Iterator<Item = NodeId> + '_ {
    tree.edges
        .iter()
        .flat_map(|edge| [edge.source, edge.target])
        .chain(
            tree.marriages
                .values()
                .flat_map(|marriage| marriage.children.iter().copied()),
        )
}

/// Depth-first reachability from `start` (iterative, explicit stack).
fn reachable(adjacency: &Adjacency, start: NodeId) -> HashSet<NodeId> {
    let mut visited = HashSet::new();
    let mut stack = vec![start];

    visited.insert(start);
    while let Some(current) = stack.pop() {
        let Some(neighbors) = adjacency.get(&current) else {
            continue;
        };
        for &neighbor in neighbors {
            if visited.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    visited
}

/// Referenced IDs that are neither a person nor a marriage, sorted and
/// without duplicates.
pub fn dangling_references(tree: &FamilyTree) -> Vec<NodeId> {
    let mut dangling: Vec<NodeId> = referenced_ids(tree)
        .filter(|id| !tree.contains_node(*id))
        .collect();
    dangling.sort();
    dangling.dedup();
    dangling
}

/// Whether all people and marriages form a single component.
///
/// The reachable set must be exactly the node set, so any dangling
/// reference makes the tree disconnected. Vacuously true for an empty tree.
pub fn is_connected(tree: &FamilyTree) -> bool {
    let Some(start) = tree
        .people
        .keys()
        .chain(tree.marriages.keys())
        .next()
        .copied()
    else {
        return true;
    };

    if referenced_ids(tree).any(|id| !tree.contains_node(id)) {
        return false;
    }

    let adjacency = build_adjacency(tree);
    let visited = reachable(&adjacency, start);

    tree.people
        .keys()
        .chain(tree.marriages.keys())
        .all(|id| visited.contains(id))
}

/// Split the tree into connected components.
///
/// Dangling references are not nodes, so they belong to no component and
/// never merge two components.
///
/// Components appear in the order of their first node in the all-nodes view
/// (people, then marriages); members keep that order too.
pub fn connected_components(tree: &FamilyTree) -> Vec<Vec<NodeId>> {
    let adjacency = build_adjacency(tree);
    let mut assigned: HashSet<NodeId> = HashSet::new();
    let mut components = Vec::new();

    let all_ids: Vec<NodeId> = tree
        .people
        .keys()
        .chain(tree.marriages.keys())
        .copied()
        .collect();

    for &id in &all_ids {
        if assigned.contains(&id) {
            continue;
        }
        let visited = reachable(&adjacency, id);
        let component: Vec<NodeId> = all_ids
            .iter()
            .copied()
            .filter(|member| visited.contains(member))
            .collect();
        assigned.extend(component.iter().copied());
        components.push(component);
    }

    components
}

/// Distinct neighbors of `id` in the undirected view.
pub fn neighbors(tree: &FamilyTree, id: NodeId) -> Vec<NodeId> {
    let adjacency = build_adjacency(tree);
    let mut seen = HashSet::new();
    adjacency
        .get(&id)
        .map(|ns| ns.iter().copied().filter(|n| seen.insert(*n)).collect())
        .unwrap_or_default()
}
