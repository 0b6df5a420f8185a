//! Unit tests for the display order of people.

use famtree::{FamilyTree, Gender};

fn names(tree: &FamilyTree) -> Vec<String> {
    tree.people().values().map(|p| p.name.clone()).collect()
}

#[test]
fn test_gender_then_birth_year_then_name() {
    let mut tree = FamilyTree::new();
    tree.create_person("Pat", Gender::Other, 1900, None);
    tree.create_person("Mia", Gender::Female, 1980, None);
    tree.create_person("Eve", Gender::Female, 1950, None);
    tree.create_person("Tom", Gender::Male, 1990, None);
    tree.create_person("Sam", Gender::Male, 1990, None);
    tree.create_person("Old", Gender::Male, 1920, None);

    tree.sort();

    assert_eq!(names(&tree), vec!["Old", "Sam", "Tom", "Eve", "Mia", "Pat"]);
}

#[test]
fn test_sort_leaves_other_state_alone() {
    let mut tree = FamilyTree::new();
    let b = tree.create_person("B", Gender::Female, 1952, None);
    let a = tree.create_person("A", Gender::Male, 1950, None);
    let m = tree.create_marriage(a, b, None);
    let before = tree.clone();

    tree.sort();

    assert_eq!(tree, before);
    assert!(tree.marriage(m).is_ok());
    assert_eq!(tree.people().keys().next(), Some(&a));
}

#[test]
fn test_adjacent_pairs_never_decrease() {
    let mut tree = FamilyTree::new();
    for (i, gender) in [Gender::Other, Gender::Female, Gender::Male]
        .iter()
        .cycle()
        .take(12)
        .enumerate()
    {
        tree.create_person(&format!("P{}", 11 - i), *gender, 2000 - (i as i32 % 4), None);
    }

    tree.sort();

    let people: Vec<_> = tree.people().values().collect();
    for pair in people.windows(2) {
        assert!(pair[0].sort_key() <= pair[1].sort_key());
    }
    assert!(tree.is_sorted());
}

#[test]
fn test_unsorted_detected() {
    let mut tree = FamilyTree::new();
    tree.create_person("Z", Gender::Female, 1950, None);
    tree.create_person("A", Gender::Male, 1950, None);
    assert!(!tree.is_sorted());
    tree.sort();
    assert!(tree.is_sorted());
}
