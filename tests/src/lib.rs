//! # Track-and-Trace Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/
//! │   └── pipeline_benchmarks.rs   # Addressing, signing, batching
//! │
//! └── src/
//!     ├── fake_ledger.rs           # axum stand-in for gateway + app server
//!     └── integration/             # Cross-crate flows
//!         ├── pipeline.rs          # service → payload → transaction → batch
//!         ├── rest_gateway.rs      # RestGateway against the fake ledger
//!         └── seeding.rs           # tnt-seed end to end over HTTP
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p tnt-tests
//!
//! # By category
//! cargo test -p tnt-tests integration::rest_gateway::
//!
//! # Benchmarks
//! cargo bench -p tnt-tests
//! ```

pub mod fake_ledger;
pub mod integration;
