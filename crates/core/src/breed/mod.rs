//! Dog breed manager.
//!
//! A session-lifetime collection of breeds owned by a [`BreedStore`], a pure
//! search/size [`filter_breeds`] view over it, and the [`BreedForm`] that
//! validates user input before it reaches the store. No persistence: the
//! collection lives exactly as long as the store value.

mod filter;
mod form;
mod seed;
mod store;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

pub use filter::{filter_breeds, SizeFilter};
pub use form::BreedForm;
pub use seed::seed_breeds;
pub use store::{parse_id, BreedStore};

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// Size category of a breed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BreedSize {
    Small,
    Medium,
    Large,
}

impl BreedSize {
    pub const ALL: [BreedSize; 3] = [BreedSize::Small, BreedSize::Medium, BreedSize::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            BreedSize::Small => "Small",
            BreedSize::Medium => "Medium",
            BreedSize::Large => "Large",
        }
    }
}

impl fmt::Display for BreedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BreedSize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BreedSize::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown breed size '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Everything about a breed except its identity.
///
/// Produced by [`BreedForm::validate_fields`] and consumed by
/// [`BreedStore::create`] / [`BreedStore::update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedFields {
    pub name: String,
    pub origin: String,
    pub size: BreedSize,
    /// Comma-separated trait list, e.g. `"Friendly, Intelligent"`.
    pub temperament: String,
    pub life_span: String,
    pub description: String,
}

/// A breed held in a [`BreedStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breed {
    pub id: DbId,
    pub name: String,
    pub origin: String,
    pub size: BreedSize,
    pub temperament: String,
    pub life_span: String,
    pub description: String,
}

impl Breed {
    pub fn new(id: DbId, fields: BreedFields) -> Self {
        Self {
            id,
            name: fields.name,
            origin: fields.origin,
            size: fields.size,
            temperament: fields.temperament,
            life_span: fields.life_span,
            description: fields.description,
        }
    }

    /// Overwrite every field except `id`.
    pub(crate) fn apply(&mut self, fields: BreedFields) {
        *self = Breed::new(self.id, fields);
    }

    /// Individual temperament traits, trimmed, empty entries dropped.
    pub fn temperament_traits(&self) -> Vec<&str> {
        self.temperament
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Case-insensitive substring match on name or origin.
    ///
    /// `needle` must already be lowercase.
    fn matches_term(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.origin.to_lowercase().contains(needle)
    }
}
