//! Core data structures for the technology catalog
//!
//! A `Catalog` is the root record persisted to disk. It owns an ordered list
//! of `Technology` entries which can be looked up by case-insensitive name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named technology with a free-text description
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Technology {
    pub name: String,
    pub description: String,
}

/// Root record: a version, a description and the technologies it covers
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    pub version: String,
    pub description: String,
    pub technologies: Vec<Technology>,
}

impl Technology {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Case-insensitive name comparison.
    ///
    /// Characters are compared pairwise: equal as-is, equal once upper-cased,
    /// or equal once those upper-case forms are lower-cased. Only one-to-one
    /// case mappings are applied, so `ß` never matches `ss`.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.chars().count() == name.chars().count()
            && self
                .name
                .chars()
                .zip(name.chars())
                .all(|(a, b)| chars_eq_ignore_case(a, b))
    }
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (simple_upper(a), simple_upper(b));
    upper_a == upper_b || simple_lower(upper_a) == simple_lower(upper_b)
}

fn single_char(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    let first = mapped.next()?;
    mapped.next().is_none().then_some(first)
}

fn simple_upper(c: char) -> char {
    single_char(c.to_uppercase()).unwrap_or(c)
}

fn simple_lower(c: char) -> char {
    // U+0130 is the one letter whose full lowercase mapping is two chars
    if c == '\u{130}' {
        return 'i';
    }
    single_char(c.to_lowercase()).unwrap_or(c)
}

impl Catalog {
    /// Create a catalog with every field set
    pub fn new(
        version: impl Into<String>,
        description: impl Into<String>,
        technologies: Vec<Technology>,
    ) -> Self {
        Self {
            version: version.into(),
            description: description.into(),
            technologies,
        }
    }

    /// Find the first technology whose name matches, ignoring case
    pub fn find_technology(&self, name: &str) -> Option<&Technology> {
        self.technologies.iter().find(|t| t.matches_name(name))
    }

    /// Rewrite the description of the first technology named like `candidate`.
    ///
    /// `None` and unknown names leave the catalog untouched. The matched entry
    /// keeps its own name and position. Returns whether an entry was rewritten.
    pub fn update_technology(&mut self, candidate: Option<&Technology>) -> bool {
        let Some(candidate) = candidate else {
            return false;
        };

        match self
            .technologies
            .iter_mut()
            .find(|t| t.matches_name(&candidate.name))
        {
            Some(existing) => {
                existing.description.clone_from(&candidate.description);
                log::debug!("Updated description of technology '{}'", existing.name);
                true
            }
            None => {
                log::warn!("No technology named '{}' in catalog", candidate.name);
                false
            }
        }
    }

    pub fn technology_names(&self) -> Vec<&str> {
        self.technologies.iter().map(|t| t.name.as_str()).collect()
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} technologies): {}",
            self.version,
            self.technologies.len(),
            self.description
        )
    }
}
