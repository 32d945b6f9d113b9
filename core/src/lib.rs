//! donorsim-core: synthetic donor/donation dataset generation for a
//! conservation nonprofit, with descriptive aggregate reports and
//! CSV export.
//!
//! Everything is driven by one explicitly threaded, seeded random
//! stream: same seed, same donor count, same as-of date = identical
//! output tables.

pub mod config;
pub mod donations;
pub mod donors;
pub mod error;
pub mod export;
pub mod identity;
pub mod pipeline;
pub mod report;
pub mod rng;
pub mod sampler;
pub mod selectors;
pub mod types;
