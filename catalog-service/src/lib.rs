//! Item catalog for medical billing
//!
//! Provides the fixed reference table of billable items:
//! - Exact-id price lookup for charge entry
//! - Display-ordered listing for selection UIs
//! - Load-time id uniqueness validation

pub mod catalog;
pub mod error;
pub mod models;

pub use catalog::*;
pub use error::*;
pub use models::*;
