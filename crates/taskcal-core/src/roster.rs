//! People available for assignment.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A roster member, identified only by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Person(String);

impl Person {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Person {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered set of people. Names are unique; insertion order is kept.
///
/// Serializes as a plain JSON array of names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a person. The name is trimmed first.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`] for a blank name and
    /// [`ValidationError::DuplicateName`] when the name is already present.
    pub fn add(&mut self, name: &str) -> Result<&Person, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.contains(name) {
            return Err(ValidationError::DuplicateName(name.to_string()));
        }
        self.people.push(Person(name.to_string()));
        Ok(&self.people[self.people.len() - 1])
    }

    /// Remove a person by name. Returns `false` if nobody had that name.
    pub fn remove(&mut self, name: &str) -> bool {
        let name = name.trim();
        let before = self.people.len();
        self.people.retain(|p| p.name() != name);
        self.people.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.people.iter().any(|p| p.name() == name)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn clear(&mut self) {
        self.people.clear();
    }

    /// Drop blank and repeated names, e.g. after loading a hand-edited snapshot.
    pub(crate) fn dedup(self) -> Self {
        let mut out = Roster::new();
        for person in self.people {
            let _ = out.add(person.name());
        }
        out
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.people.iter()
    }
}
