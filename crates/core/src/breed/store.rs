use crate::error::CoreError;
use crate::types::DbId;

use super::filter::{filter_breeds, SizeFilter};
use super::seed::seed_breeds;
use super::{Breed, BreedFields};

/// Owns the breed collection for one session.
///
/// Records keep insertion order. Ids are unique within the store and are
/// derived from the current contents, so a deleted id can be handed out
/// again once it is the highest one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreedStore {
    breeds: Vec<Breed>,
}

impl BreedStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the built-in starter breeds.
    pub fn seeded() -> Self {
        Self {
            breeds: seed_breeds(),
        }
    }

    pub fn from_breeds(breeds: Vec<Breed>) -> Self {
        Self { breeds }
    }

    pub fn list(&self) -> &[Breed] {
        &self.breeds
    }

    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }

    /// `max(existing ids, 0) + 1`, or [`CoreError::Internal`] once the
    /// highest id is `DbId::MAX`.
    pub fn next_id(&self) -> Result<DbId, CoreError> {
        self.breeds
            .iter()
            .map(|b| b.id)
            .max()
            .unwrap_or(0)
            .max(0)
            .checked_add(1)
            .ok_or_else(|| CoreError::Internal("breed id space exhausted".into()))
    }

    /// Append a new breed under a freshly derived id.
    ///
    /// The store is left untouched when no id can be derived.
    pub fn create(&mut self, fields: BreedFields) -> Result<Breed, CoreError> {
        let breed = Breed::new(self.next_id()?, fields);
        self.breeds.push(breed.clone());
        Ok(breed)
    }

    /// Replace the fields of the breed with `id`, keeping its id and position.
    ///
    /// Returns `None` and leaves the store untouched when no breed matches.
    pub fn update(&mut self, id: DbId, fields: BreedFields) -> Option<&Breed> {
        let breed = self.breeds.iter_mut().find(|b| b.id == id)?;
        breed.apply(fields);
        Some(breed)
    }

    /// Remove the breed with `id`, returning it.
    ///
    /// Returns `None` and leaves the store untouched when no breed matches.
    pub fn delete(&mut self, id: DbId) -> Option<Breed> {
        let index = self.breeds.iter().position(|b| b.id == id)?;
        Some(self.breeds.remove(index))
    }

    pub fn get(&self, id: DbId) -> Option<&Breed> {
        self.breeds.iter().find(|b| b.id == id)
    }

    /// Look up a breed by an untyped identifier such as a route segment.
    ///
    /// See [`parse_id`] for how the identifier is read.
    pub fn get_by_id(&self, raw_id: &str) -> Option<&Breed> {
        parse_id(raw_id).and_then(|id| self.get(id))
    }

    /// Like [`get`](Self::get) but reports a missing breed as an error.
    pub fn require(&self, id: DbId) -> Result<&Breed, CoreError> {
        self.get(id)
            .ok_or(CoreError::NotFound { entity: "Breed", id })
    }

    /// The filtered display view over this store.
    pub fn search(&self, term: &str, size: SizeFilter) -> Vec<&Breed> {
        filter_breeds(&self.breeds, term, size)
    }
}

/// Read the leading integer of `raw`.
///
/// Leading whitespace is skipped, an optional `+`/`-` sign is honoured and
/// digits are consumed up to the first non-digit (`"12abc"` reads as 12).
/// Returns `None` when no digit follows or the value overflows.
pub fn parse_id(raw: &str) -> Option<DbId> {
    let s = raw.trim_start();
    let sign_len = usize::from(matches!(s.as_bytes().first(), Some(b'-' | b'+')));
    let rest = &s[sign_len..];
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    // Parse sign and digits together so `DbId::MIN` stays representable.
    s[..sign_len + digits_end].parse().ok()
}
