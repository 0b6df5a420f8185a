//! Unit tests for person and marriage mutations.

use famtree::{FamilyTree, FamilyTreeError, Gender, PersonUpdate};
use uuid::Uuid;

#[test]
fn test_create_person_is_idempotent() {
    let mut tree = FamilyTree::new();

    let first = tree.create_person("Alice", Gender::Female, 1970, None);
    let second = tree.create_person("Alice", Gender::Female, 1970, None);

    assert_eq!(first, second);
    assert_eq!(tree.person_count(), 1);
}

#[test]
fn test_create_person_same_name_different_year() {
    let mut tree = FamilyTree::new();

    let senior = tree.create_person("John", Gender::Male, 1940, None);
    let junior = tree.create_person("John", Gender::Male, 1970, None);

    assert_ne!(senior, junior);
    assert_eq!(tree.person_count(), 2);
}

#[test]
fn test_update_person_by_name() {
    let mut tree = FamilyTree::new();
    let id = tree.create_person("Alice", Gender::Female, 1970, None);

    let updated = tree
        .update_person("Alice", PersonUpdate::new().death_year(2020), None)
        .unwrap();

    assert_eq!(updated, id);
    let person = tree.person(id).unwrap();
    assert_eq!(person.death_year, Some(2020));
    assert_eq!(person.birth_year, 1970);
    assert_eq!(person.gender, Gender::Female);
}

#[test]
fn test_update_person_by_id_keeps_name() {
    let mut tree = FamilyTree::new();
    let id = tree.create_person("Alice", Gender::Female, 1970, None);

    tree.update_person(
        "Someone Else",
        PersonUpdate::new().gender(Gender::Other).birth_year(1971),
        Some(id),
    )
    .unwrap();

    let person = tree.person(id).unwrap();
    assert_eq!(person.name, "Alice");
    assert_eq!(person.gender, Gender::Other);
    assert_eq!(person.birth_year, 1971);
}

#[test]
fn test_update_person_unset_fields_unchanged() {
    let mut tree = FamilyTree::new();
    let id = tree.create_person("Bob", Gender::Male, 1960, Some(2000));

    tree.update_person("Bob", PersonUpdate::new(), None).unwrap();

    let person = tree.person(id).unwrap();
    assert_eq!(person.gender, Gender::Male);
    assert_eq!(person.birth_year, 1960);
    assert_eq!(person.death_year, Some(2000));
}

#[test]
fn test_update_person_not_found() {
    let mut tree = FamilyTree::new();
    tree.create_person("Alice", Gender::Female, 1970, None);

    let err = tree
        .update_person("Nobody", PersonUpdate::new(), None)
        .unwrap_err();

    assert!(matches!(err, FamilyTreeError::PersonNotFound { ref name } if name == "Nobody"));
}

#[test]
fn test_update_person_ambiguous() {
    let mut tree = FamilyTree::new();
    let senior = tree.create_person("John", Gender::Male, 1940, None);
    tree.create_person("John", Gender::Male, 1970, None);

    let err = tree
        .update_person("John", PersonUpdate::new().death_year(2001), None)
        .unwrap_err();
    assert!(matches!(err, FamilyTreeError::AmbiguousMatch { count: 2, .. }));

    // Disambiguated by ID it works
    tree.update_person("John", PersonUpdate::new().death_year(2001), Some(senior))
        .unwrap();
    assert_eq!(tree.person(senior).unwrap().death_year, Some(2001));
}

#[test]
fn test_update_marriage_scenario() {
    let mut tree = FamilyTree::new();
    let a = tree.create_person("A", Gender::Male, 1950, None);
    let b = tree.create_person("B", Gender::Female, 1952, None);
    let c = tree.create_person("C", Gender::Female, 1980, None);
    let d = tree.create_person("D", Gender::Male, 1951, None);
    let e = tree.create_person("E", Gender::Female, 1953, None);

    let m = tree.create_marriage(a, b, Some(vec![]));
    assert_eq!(tree.update_marriage(a, b, Some(vec![c])), Some(m));
    assert_eq!(tree.marriage(m).unwrap().children, vec![c]);

    // Spouses with no shared marriage: silent no-op
    let before = tree.clone();
    assert_eq!(tree.update_marriage(d, e, Some(vec![])), None);
    assert_eq!(tree, before);
    assert_eq!(tree.marriage(m).unwrap().children, vec![c]);
}

#[test]
fn test_update_marriage_without_children_clears() {
    let mut tree = FamilyTree::new();
    let a = tree.create_person("A", Gender::Male, 1950, None);
    let b = tree.create_person("B", Gender::Female, 1952, None);
    let c = tree.create_person("C", Gender::Female, 1980, None);
    let m = tree.create_marriage(a, b, Some(vec![c]));

    tree.update_marriage(a, b, None);
    assert!(tree.marriage(m).unwrap().children.is_empty());
}

#[test]
fn test_update_marriage_one_spouse_only_is_noop() {
    let mut tree = FamilyTree::new();
    let a = tree.create_person("A", Gender::Male, 1950, None);
    let b = tree.create_person("B", Gender::Female, 1952, None);
    let c = tree.create_person("C", Gender::Female, 1955, None);
    tree.create_marriage(a, b, None);

    assert_eq!(tree.update_marriage(a, c, Some(vec![])), None);
}

#[test]
fn test_create_marriage_does_not_validate_spouses() {
    let mut tree = FamilyTree::new();
    let ghost = Uuid::new_v4();
    let a = tree.create_person("A", Gender::Male, 1950, None);

    let m = tree.create_marriage(a, ghost, None);
    assert_eq!(tree.marriage_count(), 1);
    assert_eq!(tree.edge_count(), 2);
    assert!(tree.marriage(m).is_ok());
}

#[test]
fn test_delete_person_cascades() {
    let mut tree = FamilyTree::new();
    let a = tree.create_person("A", Gender::Male, 1950, None);
    let b = tree.create_person("B", Gender::Female, 1952, None);
    let c = tree.create_person("C", Gender::Female, 1980, None);
    let m = tree.create_marriage(a, b, Some(vec![c]));

    tree.delete_node(a).unwrap();
    assert!(tree.edges().iter().all(|e| e.source != a && e.target != a));
    assert_eq!(tree.edge_count(), 1);

    tree.delete_node(c).unwrap();
    assert!(tree.marriage(m).unwrap().children.is_empty());

    let err = tree.delete_node(c).unwrap_err();
    assert!(matches!(err, FamilyTreeError::NodeNotFound { .. }));
}

#[test]
fn test_delete_keeps_order_of_remaining_people() {
    let mut tree = FamilyTree::new();
    let a = tree.create_person("A", Gender::Male, 1950, None);
    let b = tree.create_person("B", Gender::Female, 1952, None);
    let c = tree.create_person("C", Gender::Other, 1954, None);
    let d = tree.create_person("D", Gender::Male, 1956, None);

    tree.delete_node(b).unwrap();

    let order: Vec<_> = tree.people().keys().copied().collect();
    assert_eq!(order, vec![a, c, d]);
}

#[test]
fn test_delete_unknown_id() {
    let mut tree = FamilyTree::new();
    assert!(tree.delete_node(Uuid::new_v4()).unwrap_err().is_not_found());
}
