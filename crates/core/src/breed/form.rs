use validator::Validate;

use crate::validation::{camel_case_keys, field_messages, not_blank, FieldErrors};

use super::{Breed, BreedFields, BreedSize};

/// Raw create/edit form input for a breed.
///
/// Every text field is required after trimming and a size must be picked.
/// [`validate_fields`](Self::validate_fields) reports all failing fields at
/// once so the form can mark each of them. Error keys use the same camelCase
/// names as a serialized [`Breed`] (`lifeSpan`, not `life_span`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct BreedForm {
    #[validate(custom(function = "not_blank", message = "Breed name is required"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Origin country is required"))]
    pub origin: String,
    #[validate(required(message = "Please select a size category"))]
    pub size: Option<BreedSize>,
    #[validate(custom(function = "not_blank", message = "Temperament is required"))]
    pub temperament: String,
    #[validate(custom(function = "not_blank", message = "Life span is required"))]
    pub life_span: String,
    #[validate(custom(function = "not_blank", message = "Description is required"))]
    pub description: String,
}

impl BreedForm {
    /// Check the form and produce trimmed fields ready for the store.
    pub fn validate_fields(&self) -> Result<BreedFields, FieldErrors> {
        self.validate()
            .map_err(|e| camel_case_keys(field_messages(&e)))?;

        let size = self.size.ok_or_else(|| {
            FieldErrors::from([("size".to_string(), "Please select a size category".to_string())])
        })?;

        Ok(BreedFields {
            name: self.name.trim().to_string(),
            origin: self.origin.trim().to_string(),
            size,
            temperament: self.temperament.trim().to_string(),
            life_span: self.life_span.trim().to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

/// Prefill an edit form from a stored breed.
impl From<&Breed> for BreedForm {
    fn from(breed: &Breed) -> Self {
        Self {
            name: breed.name.clone(),
            origin: breed.origin.clone(),
            size: Some(breed.size),
            temperament: breed.temperament.clone(),
            life_span: breed.life_span.clone(),
            description: breed.description.clone(),
        }
    }
}
