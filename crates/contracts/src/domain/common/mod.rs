//! Common types and traits for all backend resources

pub mod dates;
pub mod normalize;
pub mod resource;

// Re-exports
pub use dates::{add_months, format_iso, parse_iso_date};
pub use normalize::{null_as_default, reconcile_alias, unwrap_collection};
pub use resource::{EntityId, Resource};
