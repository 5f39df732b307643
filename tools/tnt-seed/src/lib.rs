//! TNT-Seed: bootstrap a Track-and-Trace ledger with demo data.
//!
//! Two flows:
//!
//! ```text
//! organizations:  for each org in DATA
//!     new key ──► POST {api}/users ──► createOrganization ──► updateAgent(admin roles)
//!             ──► createRecordType × N (one batch)
//!
//! schemas:        new key ──► createRecordType × N (one batch)
//! ```
//!
//! Both wait for `{api}/info` to answer first, retrying every `RETRY_WAIT` ms.

pub mod data;
pub mod seed;

pub use data::{load_organizations, load_record_types, DataError, SeedOrganization};
pub use seed::{SeedReport, Seeder, ADMIN_ROLES};
