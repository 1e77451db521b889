//! Billing engine for outpatient charge collection
//!
//! Provides the billing side of a clerk's charge-entry session:
//! - Ledger of snapshotted line items with append / remove-by-position
//! - Coverage-discounted bill summary, recomputed from inputs on demand
//! - Orchestration facade tying catalog lookup to ledger mutation

pub mod error;
pub mod ledger;
pub mod models;
pub mod service;
pub mod summary;

pub use error::*;
pub use ledger::*;
pub use models::*;
pub use service::*;
pub use summary::*;
