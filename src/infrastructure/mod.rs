//! Infrastructure layer: concrete adapters for external services.

pub mod persistence;
