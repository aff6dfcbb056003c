//! Domain layer shared by the catalog crates.
//!
//! Holds the in-memory breed manager (store, search filter, form validation)
//! and the error and validation vocabulary the movie service builds on.
//! Nothing in here performs I/O.

pub mod breed;
pub mod error;
pub mod types;
pub mod validation;
