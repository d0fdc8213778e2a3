//! Application layer: business logic services orchestrating the domain
//! repositories.

pub mod services;
