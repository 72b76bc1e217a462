//! Dietitian-office core: client records, a food/recipe catalog and a
//! rule-based weekly diet-plan generator.
//!
//! The generation engine itself lives in [`engine`] and is purely
//! functional: it takes the catalog, a client profile and plan settings as
//! explicit parameters and returns new values. The [`services`] layer wraps
//! it with catalog ownership and logging for the HTTP/storage layers that
//! sit outside this crate.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;

pub use catalog::{Catalog, CatalogSource};
pub use error::CatalogError;
pub use services::{CatalogService, PlanGenerationService};
