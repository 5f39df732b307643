//! Adapters Layer - account API implementations.

pub mod account;
pub mod memory;

pub use account::AccountApi;
pub use memory::InMemoryAccounts;
