// Thin facades over the engine for the HTTP/storage layers outside this
// crate: catalog ownership, lookups and logging, no decision logic.

pub mod catalog_service;
pub mod plan_generation_service;

pub use catalog_service::CatalogService;
pub use plan_generation_service::PlanGenerationService;
