//! # Travel Tables: precomputed power-loss dice for intra-system travel
//!
//! Rather than rolling a cruise test for every area travelled, a ship looks up
//! the total power loss (PL) for the whole trip on a small nine-sided table.
//! Each table is produced offline by **Monte-Carlo simulation** of the cruise
//! process and compressed into 9 quantile bands.
//!
//! ## Pipeline overview
//!
//! | Stage | Rust module | Description |
//! |-------|-------------|-------------|
//! | 1 | [`simulation::sampler`] | Simulate N cruises: D100 per attempt, success on `roll <= target` or a natural 1 |
//! | 2 | [`simulation::histogram`] | Count costs per outcome, annotate absolute and running percentages |
//! | 3 | [`simulation::resample`] | Collapse the running percentages into 9 bands of 11 points each |
//! | 4 | [`table`] | Drive 1 to 3 over the (skill, distance) grid in parallel |
//! | 5 | [`format`] | Render the grid as fixed-width 3×3 blocks |
//!
//! ## Determinism
//!
//! Every grid cell owns its generator, seeded from `(seed, skill, distance)`
//! via [`simulation::seeding::cell_seed`]. A cell's table is therefore the same
//! regardless of grid shape, thread count, or evaluation order.

pub mod config;
pub mod constants;
pub mod env_config;
pub mod error;
pub mod format;
pub mod simulation;
pub mod table;

pub use config::{DistanceRange, SkillRange, TableConfig};
pub use error::TravelError;
pub use simulation::{build_histogram, resample_into_d9, simulate, Histogram, QuantileTable, Sample};
pub use table::{assemble, assemble_with_cancel, LookupTable};
