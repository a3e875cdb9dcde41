//! Program book: the controller's full program list, in display order.

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::Program;
use crate::id::ProgramId;

/// Every program the controller knows, sorted by id.
///
/// `program.json` is an object keyed by program id; a bare array is also
/// accepted. A program without an `id` field takes its key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgramBook {
    programs: Vec<Program>,
}

impl<'de> Deserialize<'de> for ProgramBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let programs = if value.is_array() {
            Vec::<Program>::deserialize(value).map_err(D::Error::custom)?
        } else {
            BTreeMap::<String, Program>::deserialize(value)
                .map_err(D::Error::custom)?
                .into_iter()
                .map(|(key, mut program)| {
                    if program.id.is_empty() {
                        program.id = ProgramId::new(key);
                    }
                    program
                })
                .collect()
        };
        Ok(Self::new(programs))
    }
}

impl ProgramBook {
    /// Build a book from programs in any order.
    #[must_use]
    pub fn new(mut programs: Vec<Program>) -> Self {
        programs.sort_by(|a, b| a.id.sort_key().cmp(&b.id.sort_key()));
        Self { programs }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Program> {
        self.programs.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &ProgramId) -> Option<&Program> {
        self.programs.iter().find(|program| &program.id == id)
    }

    /// First other program whose schedule collides with `program`.
    #[must_use]
    pub fn conflict_for(&self, program: &Program) -> Option<&Program> {
        self.programs
            .iter()
            .find(|other| other.id != program.id && program.conflicts_with(other))
    }
}

impl<'a> IntoIterator for &'a ProgramBook {
    type Item = &'a Program;
    type IntoIter = std::slice::Iter<'a, Program>;

    fn into_iter(self) -> Self::IntoIter {
        self.programs.iter()
    }
}
