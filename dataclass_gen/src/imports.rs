//! Python import statements required by rendered models.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A single `from <module> import <name>` requirement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Import {
    pub module: String,
    pub name: String,
}

impl Import {
    #[must_use]
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn dataclass() -> Self {
        Self::new("dataclasses", "dataclass")
    }

    #[must_use]
    pub fn field() -> Self {
        Self::new("dataclasses", "field")
    }

    #[must_use]
    pub fn optional() -> Self {
        Self::new("typing", "Optional")
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from {} import {}", self.module, self.name)
    }
}

/// Imports grouped by source module, both levels sorted for deterministic output.
#[derive(Debug, Default)]
pub struct Imports {
    by_module: BTreeMap<String, BTreeSet<String>>,
}

impl Imports {
    pub fn append(&mut self, import: Import) {
        self.by_module
            .entry(import.module)
            .or_default()
            .insert(import.name);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_module.is_empty()
    }

    /// One `from x import a, b` line per module.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.by_module
            .iter()
            .map(|(from, names)| {
                let joined: String = names
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("from {from} import {joined}")
            })
            .collect()
    }
}

impl Extend<Import> for Imports {
    fn extend<T: IntoIterator<Item = Import>>(&mut self, iter: T) {
        for import in iter {
            self.append(import);
        }
    }
}
