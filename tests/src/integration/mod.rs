//! # Integration Tests
//!
//! Flows that cross crate boundaries:
//!
//! - `pipeline`: a named operation down to the batch list bytes, with the
//!   in-memory gateway
//! - `rest_gateway`: `RestGateway` and `AccountApi` against [`FakeLedger`]
//! - `seeding`: `tnt-seed` bootstrapping the sample organizations over HTTP
//!
//! [`FakeLedger`]: crate::fake_ledger::FakeLedger

pub mod pipeline;
pub mod rest_gateway;
pub mod seeding;
