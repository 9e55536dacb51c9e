//! Types shared between backend and frontend.
//!
//! - `domain` — aggregates, their DTOs and validation
//! - `shared` — static application configuration (sidebar navigation, site URLs)

pub mod domain;
pub mod shared;
