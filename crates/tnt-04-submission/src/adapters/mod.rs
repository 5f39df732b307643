//! Adapters Layer - gateway implementations.

pub mod memory;
pub mod rest;

pub use memory::{InMemoryGateway, ScriptedStatus};
pub use rest::RestGateway;
