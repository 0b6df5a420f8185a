//! Query builder for fluent person lookups.
//!
//! Filters are combined with AND and results follow the current display
//! order of the tree.

use crate::graph::{FamilyTree, Gender, NodeId, Person};

/// A filter predicate that can be applied to people.
type FilterFn = Box<dyn Fn(&Person) -> bool>;

/// Fluent query builder over the people of a tree.
///
/// # Examples
///
/// ```
/// use famtree::{FamilyTree, Gender};
///
/// let mut tree = FamilyTree::new();
/// tree.create_person("Ada", Gender::Female, 1815, Some(1852));
/// tree.create_person("Charles", Gender::Male, 1791, Some(1871));
///
/// let women = tree.query()
///     .gender(Gender::Female)
///     .born_between(1800, 1900)
///     .execute();
/// assert_eq!(women.len(), 1);
/// ```
pub struct PersonQuery<'a> {
    tree: &'a FamilyTree,
    filters: Vec<FilterFn>,
    limit_value: Option<usize>,
}

impl<'a> PersonQuery<'a> {
    /// Create a new query for the given tree.
    pub fn new(tree: &'a FamilyTree) -> Self {
        Self {
            tree,
            filters: Vec::new(),
            limit_value: None,
        }
    }

    /// Filter people by gender.
    pub fn gender(mut self, gender: Gender) -> Self {
        self.filters.push(Box::new(move |p| p.gender == gender));
        self
    }

    /// Filter people by exact name.
    pub fn name(mut self, name: &str) -> Self {
        let name = name.to_string();
        self.filters.push(Box::new(move |p| p.name == name));
        self
    }

    /// Filter people whose name contains `fragment` (case-insensitive).
    pub fn name_contains(mut self, fragment: &str) -> Self {
        let fragment = fragment.to_lowercase();
        self.filters
            .push(Box::new(move |p| p.name.to_lowercase().contains(&fragment)));
        self
    }

    /// Filter people born in `from..=to`.
    pub fn born_between(mut self, from: i32, to: i32) -> Self {
        self.filters
            .push(Box::new(move |p| (from..=to).contains(&p.birth_year)));
        self
    }

    /// Only people with no recorded death year.
    pub fn living(mut self) -> Self {
        self.filters.push(Box::new(Person::is_living));
        self
    }

    /// Only people with a recorded death year.
    pub fn deceased(mut self) -> Self {
        self.filters.push(Box::new(|p| !p.is_living()));
        self
    }

    /// Limit the number of results.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit_value = Some(n);
        self
    }

    fn matches(&self, person: &Person) -> bool {
        self.filters.iter().all(|filter| filter(person))
    }

    /// Run the query and return matching IDs in display order.
    pub fn execute(&self) -> Vec<NodeId> {
        let matching = self
            .tree
            .people()
            .iter()
            .filter(|(_, person)| self.matches(person))
            .map(|(id, _)| *id);

        match self.limit_value {
            Some(n) => matching.take(n).collect(),
            None => matching.collect(),
        }
    }

    /// Count matching people, ignoring the limit.
    pub fn count(&self) -> usize {
        self.tree
            .people()
            .values()
            .filter(|person| self.matches(person))
            .count()
    }

    /// Whether any person matches.
    pub fn exists(&self) -> bool {
        self.tree.people().values().any(|person| self.matches(person))
    }
}

impl FamilyTree {
    /// Start a fluent query over people.
    pub fn query(&self) -> PersonQuery<'_> {
        PersonQuery::new(self)
    }
}
