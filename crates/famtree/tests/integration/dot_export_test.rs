//! Integration tests for Graphviz DOT rendering.

use famtree::export::DotOptions;
use famtree::{FamilyTree, Gender};

#[test]
fn test_dot_contains_every_node_and_edge() {
    let mut tree = FamilyTree::new();
    let a = tree.create_person("Arthur", Gender::Male, 1950, Some(2015));
    let b = tree.create_person("Beatrice", Gender::Female, 1952, None);
    let c = tree.create_person("Casey", Gender::Other, 1980, None);
    let m = tree.create_marriage(a, b, Some(vec![c]));

    let dot = tree.export_dot();

    assert!(dot.starts_with("digraph family_tree {"));
    assert!(dot.trim_end().ends_with('}'));
    assert!(dot.contains(&format!("\"{a}\" [label=\"Arthur\\n1950 - 2015\", fillcolor=\"lightblue\"]")));
    assert!(dot.contains(&format!("\"{b}\" [label=\"Beatrice\\n1952\", fillcolor=\"pink\"]")));
    assert!(dot.contains("fillcolor=\"lightgreen\""));
    assert!(dot.contains(&format!("\"{m}\" [label=\"\", shape=point")));
    assert!(dot.contains(&format!("\"{m}\" -> \"{c}\";")));
    assert!(dot.contains(&format!("\"{a}\" -> \"{m}\" [dir=none];")));
    assert!(dot.contains(&format!("\"{b}\" -> \"{m}\" [dir=none];")));
    assert_eq!(dot.matches("[dir=none]").count(), 2);
}

#[test]
fn test_dot_styled_options() {
    let mut tree = FamilyTree::new();
    let a = tree.create_person("Quote \"Q\"", Gender::Male, 1950, None);

    let options = DotOptions::default()
        .with_rankdir("LR")
        .with_font("Helvetica", 10)
        .with_ids(true);
    let dot = tree.export_dot_styled(&options);

    assert!(dot.contains("rankdir=LR;"));
    assert!(dot.contains("fontname=\"Helvetica\", fontsize=10"));
    assert!(dot.contains("Quote \\\"Q\\\""));
    assert!(dot.contains(&format!("\\n{a}\"")));
}

#[test]
fn test_empty_tree_renders() {
    let dot = FamilyTree::new().export_dot();
    assert!(dot.contains("digraph family_tree"));
    assert!(!dot.contains("->"));
}
