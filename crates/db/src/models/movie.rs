//! Movie entity model and DTOs.
//!
//! Descriptive columns are opaque strings; `release_year` and `rating` are
//! never parsed.

use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `movies` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub director: String,
    pub genre: String,
    pub release_year: String,
    pub rating: String,
}

/// Body of `POST /movies`. Every field is required and must be non-empty.
///
/// Whitespace counts as content; values are stored exactly as submitted.
///
/// Fields are optional at the type level so a missing key surfaces as a
/// validation failure rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title is required")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "director is required"),
        length(min = 1, message = "director is required")
    )]
    pub director: Option<String>,
    #[validate(
        required(message = "genre is required"),
        length(min = 1, message = "genre is required")
    )]
    pub genre: Option<String>,
    #[validate(
        required(message = "release_year is required"),
        length(min = 1, message = "release_year is required")
    )]
    pub release_year: Option<String>,
    #[validate(
        required(message = "rating is required"),
        length(min = 1, message = "rating is required")
    )]
    pub rating: Option<String>,
}

/// Body of `PUT /movies/{id}`. Present fields overwrite their column; absent
/// fields keep the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct UpdateMovie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

/// Response of `PUT /movies/{id}`: the path id plus exactly the submitted
/// fields, regardless of whether a row matched.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatedMovie {
    pub id: DbId,
    #[serde(flatten)]
    pub fields: UpdateMovie,
}
