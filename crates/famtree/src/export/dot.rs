//! DOT format export for Graphviz visualization.
//!
//! Layout is left to Graphviz. People become filled boxes colored by gender,
//! marriages become unlabeled points, marriage→child links are directed
//! edges and spouse→marriage links are drawn without arrowheads.

use crate::graph::{FamilyTree, Gender, NodeId};
use log::warn;
use serde::{Deserialize, Serialize};

/// Layout directions Graphviz understands.
const RANKDIRS: [&str; 4] = ["TB", "LR", "BT", "RL"];

/// Options for styling DOT export.
///
/// Serializable so a style can be kept in a JSON file; missing fields fall
/// back to [`DotOptions::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotOptions {
    /// Graph layout direction: TB, LR, BT, RL (anything else renders as TB)
    pub rankdir: String,
    /// Font for person labels
    pub font_name: String,
    /// Font size for person labels
    pub font_size: u32,
    /// Fill color for male people
    pub male_color: String,
    /// Fill color for female people
    pub female_color: String,
    /// Fill color for other people
    pub other_color: String,
    /// Append the node ID to person labels
    pub show_ids: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            rankdir: "TB".to_string(),
            font_name: "Noto Serif CJK SC".to_string(),
            font_size: 12,
            male_color: "lightblue".to_string(),
            female_color: "pink".to_string(),
            other_color: "lightgreen".to_string(),
            show_ids: false,
        }
    }
}

impl DotOptions {
    /// Set the layout direction.
    pub fn with_rankdir(mut self, rankdir: impl Into<String>) -> Self {
        self.rankdir = rankdir.into();
        self
    }

    /// Set the label font.
    pub fn with_font(mut self, name: impl Into<String>, size: u32) -> Self {
        self.font_name = name.into();
        self.font_size = size;
        self
    }

    /// Show node IDs in person labels.
    pub fn with_ids(mut self, show_ids: bool) -> Self {
        self.show_ids = show_ids;
        self
    }

    /// Fill color for a gender.
    pub fn color_for(&self, gender: Gender) -> &str {
        match gender {
            Gender::Male => &self.male_color,
            Gender::Female => &self.female_color,
            Gender::Other => &self.other_color,
        }
    }
}

/// Export tree to Graphviz DOT format
pub fn export_dot(tree: &FamilyTree) -> String {
    export_dot_styled(tree, &DotOptions::default())
}

/// Export tree to Graphviz DOT format with custom styling
pub fn export_dot_styled(tree: &FamilyTree, options: &DotOptions) -> String {
    let mut output = String::new();

    output.push_str("digraph family_tree {\n");
    output.push_str(&format!(
        "    rankdir={}; splines=line;\n",
        layout_direction(options)
    ));
    output.push_str(&format!(
        "    node [shape=box, style=filled, fontname=\"{}\", fontsize={}, width=1.2];\n\n",
        escape_dot_label(&options.font_name),
        options.font_size
    ));

    for (id, person) in tree.people() {
        let mut label = format!("{}\\n{}", escape_dot_label(&person.name), person.lifespan());
        if options.show_ids {
            label.push_str(&format!("\\n{id}"));
        }
        output.push_str(&format!(
            "    {} [label=\"{label}\", fillcolor=\"{}\"];\n",
            node_name(*id),
            escape_dot_label(options.color_for(person.gender))
        ));
    }

    output.push('\n');

    for (id, marriage) in tree.marriages() {
        output.push_str(&format!(
            "    {} [label=\"\", shape=point, width=0.1, height=0.1];\n",
            node_name(*id)
        ));
        for child in &marriage.children {
            output.push_str(&format!("    {} -> {};\n", node_name(*id), node_name(*child)));
        }
    }

    output.push('\n');

    let mut edges: Vec<_> = tree.edges().iter().collect();
    edges.sort();
    for edge in edges {
        output.push_str(&format!(
            "    {} -> {} [dir=none];\n",
            node_name(edge.source),
            node_name(edge.target)
        ));
    }

    output.push_str("}\n");

    output
}

/// The configured rankdir if valid, otherwise the default.
fn layout_direction(options: &DotOptions) -> &'static str {
    let rankdir = options.rankdir.trim();
    match RANKDIRS.iter().copied().find(|dir| dir.eq_ignore_ascii_case(rankdir)) {
        Some(dir) => dir,
        None => {
            warn!("Unknown rankdir {:?}, using TB", options.rankdir);
            "TB"
        }
    }
}

/// Quoted DOT identifier for a node.
fn node_name(id: NodeId) -> String {
    format!("\"{id}\"")
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
