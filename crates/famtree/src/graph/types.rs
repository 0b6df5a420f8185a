//! Core tree types: people, marriages, edges, IDs, and the node union.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a person or marriage (random UUID v4).
pub type NodeId = Uuid;

/// Allocate a fresh identifier.
pub(crate) fn new_node_id() -> NodeId {
    Uuid::new_v4()
}

/// Gender of a person.
///
/// Variant order is the display rank used by [`FamilyTree::sort`](crate::FamilyTree::sort).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Any other gender
    Other,
}

impl Gender {
    /// Sort rank: male < female < other.
    pub fn rank(self) -> u8 {
        match self {
            Gender::Male => 0,
            Gender::Female => 1,
            Gender::Other => 2,
        }
    }

    /// Lowercase name, as written in snapshots.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown gender string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGenderError(String);

impl fmt::Display for ParseGenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gender '{}', expected male, female or other", self.0)
    }
}

impl std::error::Error for ParseGenderError {}

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" | "o" => Ok(Gender::Other),
            _ => Err(ParseGenderError(s.to_string())),
        }
    }
}

/// A person in the family tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Person {
    /// Display name (not unique)
    pub name: String,
    /// Gender
    pub gender: Gender,
    /// Year of birth
    pub birth_year: i32,
    /// Year of death, `None` if alive or unknown
    #[serde(default)]
    pub death_year: Option<i32>,
}

impl Person {
    /// Create a person record (ID is assigned by the tree).
    pub fn new(
        name: impl Into<String>,
        gender: Gender,
        birth_year: i32,
        death_year: Option<i32>,
    ) -> Self {
        Self {
            name: name.into(),
            gender,
            birth_year,
            death_year,
        }
    }

    /// Whether all four attributes equal the given values.
    pub fn matches(
        &self,
        name: &str,
        gender: Gender,
        birth_year: i32,
        death_year: Option<i32>,
    ) -> bool {
        self.name == name
            && self.gender == gender
            && self.birth_year == birth_year
            && self.death_year == death_year
    }

    /// Whether no death year is recorded.
    pub fn is_living(&self) -> bool {
        self.death_year.is_none()
    }

    /// `"1950"` or `"1950 - 2020"`. A death year of `0` is not shown.
    pub fn lifespan(&self) -> String {
        match self.death_year {
            Some(death) if death != 0 => format!("{} - {}", self.birth_year, death),
            _ => self.birth_year.to_string(),
        }
    }

    /// Composite display key: gender rank, birth year, name.
    pub fn sort_key(&self) -> (u8, i32, &str) {
        (self.gender.rank(), self.birth_year, self.name.as_str())
    }
}

/// A marriage node joining two spouses, with their children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Marriage {
    /// Children of this union (person IDs)
    #[serde(default)]
    pub children: Vec<NodeId>,
}

impl Marriage {
    /// Create a marriage with the given children.
    pub fn new(children: Vec<NodeId>) -> Self {
        Self { children }
    }

    /// Whether `person` is listed as a child.
    pub fn has_child(&self, person: NodeId) -> bool {
        self.children.contains(&person)
    }
}

/// A stored spouse→marriage link.
///
/// Equality and hashing use the ordered `(source, target)` pair, so the
/// reversed pair is a different edge. Spouse links are always written
/// spouse→marriage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Edge {
    /// Spouse ID
    pub source: NodeId,
    /// Marriage ID
    pub target: NodeId,
}

impl Edge {
    /// Create an edge from `source` to `target`.
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    /// Whether either endpoint is `id`.
    pub fn touches(&self, id: NodeId) -> bool {
        self.source == id || self.target == id
    }
}

/// Kind of a node, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A [`Person`]
    Person,
    /// A [`Marriage`]
    Marriage,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Person => write!(f, "Person"),
            NodeKind::Marriage => write!(f, "Marriage"),
        }
    }
}

/// Borrowed view of any addressable node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    /// A person node
    Person(&'a Person),
    /// A marriage node
    Marriage(&'a Marriage),
}

impl<'a> Node<'a> {
    /// Which kind of node this is.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Person(_) => NodeKind::Person,
            Node::Marriage(_) => NodeKind::Marriage,
        }
    }

    /// The person, if this is one.
    pub fn as_person(&self) -> Option<&'a Person> {
        match self {
            Node::Person(person) => Some(person),
            Node::Marriage(_) => None,
        }
    }

    /// The marriage, if this is one.
    pub fn as_marriage(&self) -> Option<&'a Marriage> {
        match self {
            Node::Person(_) => None,
            Node::Marriage(marriage) => Some(marriage),
        }
    }
}
