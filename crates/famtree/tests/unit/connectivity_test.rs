//! Unit tests for connectivity and components.

use famtree::{FamilyTree, Gender};

#[test]
fn test_empty_tree_is_connected() {
    assert!(FamilyTree::new().is_connected());
    assert!(FamilyTree::new().connected_components().is_empty());
}

#[test]
fn test_marriage_joins_two_people() {
    let mut tree = FamilyTree::new();
    let a = tree.create_person("A", Gender::Male, 1950, None);
    assert!(tree.is_connected());

    let b = tree.create_person("B", Gender::Female, 1952, None);
    assert!(!tree.is_connected());

    tree.create_marriage(a, b, None);
    assert!(tree.is_connected());
}

#[test]
fn test_three_generations_connected() {
    let mut tree = FamilyTree::new();
    let gf = tree.create_person("Grandfather", Gender::Male, 1920, None);
    let gm = tree.create_person("Grandmother", Gender::Female, 1922, None);
    let father = tree.create_person("Father", Gender::Male, 1950, None);
    let mother = tree.create_person("Mother", Gender::Female, 1952, None);
    let child = tree.create_person("Child", Gender::Other, 1980, None);

    tree.create_marriage(gf, gm, Some(vec![father]));
    tree.create_marriage(father, mother, Some(vec![child]));

    assert!(tree.is_connected());
    assert_eq!(tree.connected_components().len(), 1);
}

#[test]
fn test_deleting_link_disconnects() {
    let mut tree = FamilyTree::new();
    let a = tree.create_person("A", Gender::Male, 1950, None);
    let b = tree.create_person("B", Gender::Female, 1952, None);
    let c = tree.create_person("C", Gender::Female, 1980, None);
    let m = tree.create_marriage(a, b, Some(vec![c]));
    assert!(tree.is_connected());

    tree.delete_node(m).unwrap();
    assert!(!tree.is_connected());
    assert_eq!(tree.connected_components().len(), 3);
}

#[test]
fn test_result_independent_of_insertion_order() {
    let mut forward = FamilyTree::new();
    let a = forward.create_person("A", Gender::Male, 1950, None);
    let b = forward.create_person("B", Gender::Female, 1952, None);
    let c = forward.create_person("C", Gender::Male, 1970, None);
    forward.create_marriage(a, b, Some(vec![c]));

    let mut sorted = forward.clone();
    sorted.sort();

    assert_eq!(forward.is_connected(), sorted.is_connected());
}

#[test]
fn test_long_line_does_not_overflow() {
    let mut tree = FamilyTree::new();
    let mut parent = tree.create_person("Root", Gender::Male, 1000, None);
    for generation in 1..2_000 {
        let spouse = tree.create_person(&format!("Spouse {generation}"), Gender::Female, 1000, None);
        let child = tree.create_person(&format!("Child {generation}"), Gender::Male, 1000, None);
        tree.create_marriage(parent, spouse, Some(vec![child]));
        parent = child;
    }

    assert!(tree.is_connected());
}

#[test]
fn test_neighbors_of_missing_node() {
    let tree = FamilyTree::new();
    assert!(tree.neighbors(uuid::Uuid::new_v4()).is_err());
}

#[test]
fn test_dangling_spouse_is_not_connected() {
    let mut tree = FamilyTree::new();
    let a = tree.create_person("A", Gender::Male, 1950, None);
    let ghost = uuid::Uuid::new_v4();
    let m = tree.create_marriage(a, ghost, None);

    assert!(!tree.is_connected());
    assert_eq!(tree.dangling_references(), vec![ghost]);
    assert_eq!(tree.connected_components(), vec![vec![a, m]]);
}

#[test]
fn test_shared_dangling_child_does_not_join_families() {
    let mut tree = FamilyTree::new();
    let a = tree.create_person("A", Gender::Male, 1950, None);
    let b = tree.create_person("B", Gender::Female, 1952, None);
    let c = tree.create_person("C", Gender::Male, 1960, None);
    let d = tree.create_person("D", Gender::Female, 1962, None);
    let ghost = uuid::Uuid::new_v4();
    tree.create_marriage(a, b, Some(vec![ghost]));
    tree.create_marriage(c, d, Some(vec![ghost]));

    assert!(!tree.is_connected());
    assert_eq!(tree.connected_components().len(), 2);
    assert_eq!(tree.dangling_references(), vec![ghost]);
}

#[test]
fn test_deleting_child_leaves_no_dangling_reference() {
    let mut tree = FamilyTree::new();
    let a = tree.create_person("A", Gender::Male, 1950, None);
    let b = tree.create_person("B", Gender::Female, 1952, None);
    let c = tree.create_person("C", Gender::Female, 1980, None);
    tree.create_marriage(a, b, Some(vec![c]));

    tree.delete_node(c).unwrap();
    assert!(tree.dangling_references().is_empty());
    assert!(tree.is_connected());
}
