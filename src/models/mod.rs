// Data models for the catalog, client records and generated plans

pub mod client;
pub mod context;
pub mod food;
pub mod plan;
pub mod recipe;

pub use client::*;
pub use context::*;
pub use food::*;
pub use plan::*;
pub use recipe::*;
