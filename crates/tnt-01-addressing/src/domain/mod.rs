//! Domain Layer - pure address derivation.
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod address;
pub mod families;
