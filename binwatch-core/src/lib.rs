//! Core types and schedule pipeline for the binwatch bin-collection viewer.

/// Day-granular classification of collection dates against a reference day.
pub mod classify;
/// Turning collection blocks into canonical per-category schedule records.
pub mod extract;
/// Human-readable labels for collection dates and the daily heading.
pub mod format;
/// Domain models shared by the pipeline and its callers.
pub mod model;
/// Trait describing the collection-page source and its error taxonomy.
pub mod ports;
/// Category registry with free-text label resolution.
pub mod registry;
/// High-level service facade used by clients.
pub mod service;

pub use classify::*;
pub use extract::*;
pub use format::*;
pub use model::*;
pub use ports::*;
pub use registry::*;
pub use service::*;
