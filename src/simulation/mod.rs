//! Monte-Carlo estimation and distribution compression.
//!
//! - [`sampler`]: Simulate N cruises and collect their power-loss costs
//! - [`histogram`]: Aggregate costs into percentage-annotated buckets
//! - [`resample`]: Compress a histogram into a 9-entry lookup die
//! - [`seeding`]: Per-cell seed derivation

pub mod histogram;
pub mod resample;
pub mod sampler;
pub mod seeding;

// Re-export commonly used items
pub use histogram::{build_histogram, CostSummary, Histogram, Sample};
pub use resample::{resample_into_d9, QuantileTable};
pub use sampler::{cruise_test, simulate};
pub use seeding::{cell_rng, cell_seed};
