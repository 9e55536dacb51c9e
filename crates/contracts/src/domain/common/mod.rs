//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod entity_metadata;
pub mod validation;

// Re-exports
pub use aggregate_id::AggregateId;
pub use entity_metadata::EntityMetadata;
pub use validation::{ApiErrorBody, FieldError};
