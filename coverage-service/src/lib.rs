//! Patient coverage categories for medical billing
//!
//! Provides the coverage side of bill settlement:
//! - The fixed coverage category enumeration and display labels
//! - The category → discount policy, applied to a bill subtotal
//! - Selectable option listing for intake UIs

pub mod models;
pub mod policy;

pub use models::*;
pub use policy::*;
