//! Ontology lookup collaborator
//!
//! The short-label generator only needs one ontology question answered:
//! which terms are descendants of the mutation root (`MI:0118`) within a
//! bounded depth. The answer is computed once at startup and carried as
//! configuration; the lookup itself stays behind this trait.

use crate::error::CurateError;
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::Path;

/// Controlled-vocabulary term identifier for "mutation" in the PSI-MI
/// ontology.
pub const MUTATION_MI_REF: &str = "MI:0118";

/// Trait for resolving ontology descendants
pub trait OntologyLookup {
    /// Identifiers of every descendant of `term` reachable within `depth`
    /// child steps. The term itself is not included.
    fn descendant_ids(&self, term: &str, depth: u32) -> Result<HashSet<String>, CurateError>;
}

/// Blanket implementation for boxed trait objects
impl OntologyLookup for Box<dyn OntologyLookup> {
    fn descendant_ids(&self, term: &str, depth: u32) -> Result<HashSet<String>, CurateError> {
        (**self).descendant_ids(term, depth)
    }
}

/// Mock ontology backed by an in-memory parent-to-children map
#[derive(Debug, Clone, Default)]
pub struct MockOntology {
    children: HashMap<String, Vec<String>>,
}

impl MockOntology {
    /// Create an empty mock ontology
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock with a small mutation subtree for tests
    pub fn with_test_data() -> Self {
        let mut ontology = Self::new();
        // mutation -> the common curated sub-types
        ontology.add_child(MUTATION_MI_REF, "MI:0119"); // mutation decreasing interaction
        ontology.add_child(MUTATION_MI_REF, "MI:0382"); // mutation increasing interaction
        ontology.add_child(MUTATION_MI_REF, "MI:0573"); // mutation disrupting interaction
        ontology.add_child(MUTATION_MI_REF, "MI:2227"); // mutation with no effect
        ontology.add_child("MI:0119", "MI:1130"); // mutation decreasing rate
        ontology.add_child("MI:0382", "MI:1131"); // mutation increasing rate
        ontology
    }

    /// Load a parent-to-children map from a JSON file
    pub fn from_json(path: &Path) -> Result<Self, CurateError> {
        let content = std::fs::read_to_string(path)?;
        let children: HashMap<String, Vec<String>> = serde_json::from_str(&content)?;
        Ok(Self { children })
    }

    /// Register a parent-child relation
    pub fn add_child(&mut self, parent: impl Into<String>, child: impl Into<String>) {
        self.children
            .entry(parent.into())
            .or_default()
            .push(child.into());
    }
}

impl OntologyLookup for MockOntology {
    fn descendant_ids(&self, term: &str, depth: u32) -> Result<HashSet<String>, CurateError> {
        let mut found = HashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back((term.to_string(), 0u32));

        while let Some((current, level)) = queue.pop_front() {
            if level >= depth {
                continue;
            }
            if let Some(children) = self.children.get(&current) {
                for child in children {
                    if found.insert(child.clone()) {
                        queue.push_back((child.clone(), level + 1));
                    }
                }
            }
        }

        Ok(found)
    }
}
