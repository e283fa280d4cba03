//! Gear module
//!
//! Static gear catalog and the request-driven ranking over it.

pub mod catalog;
pub mod scorer;

pub use catalog::GearCatalog;
pub use scorer::{GearScorer, MAX_RECOMMENDATIONS};
