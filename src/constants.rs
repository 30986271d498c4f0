//! Dice constants and default run parameters.
//!
//! - A cruise attempt rolls a D100 ([`DIE_SIDES`]); a natural [`CRITICAL_ROLL`]
//!   always advances, whatever the skill.
//! - A lookup die has [`D9_SIDES`] faces, each covering [`BAND_WIDTH`]
//!   percentage points of cumulative probability.

/// Faces on the cruise-test die.
pub const DIE_SIDES: i32 = 100;

/// A roll of exactly this value always succeeds (the 1% critical floor).
pub const CRITICAL_ROLL: i32 = 1;

/// Faces on the lookup die, i.e. entries per quantile table.
pub const D9_SIDES: usize = 9;

/// Percentage points of cumulative probability per lookup face.
/// `running_percentage / BAND_WIDTH` selects the face; 99 and above fall off the top.
pub const BAND_WIDTH: u32 = 11;

/// Table values are printed in two columns.
pub const MAX_TABLE_VALUE: u32 = 99;

/// Monte-Carlo trials per grid cell. Higher values are statistically better
/// but slower; 15000 is usable for drafts.
pub const DEFAULT_SAMPLES: usize = 50_000;

/// Default master seed.
pub const DEFAULT_SEED: u64 = 42;

/// Default skill rows: 20, 30, .., 100 (inclusive).
pub const DEFAULT_SKILL_MIN: i32 = 20;
pub const DEFAULT_SKILL_MAX: i32 = 100;
pub const DEFAULT_SKILL_STEP: i32 = 10;

/// Default distance columns: 2 .. 9 (max exclusive).
pub const DEFAULT_DISTANCE_MIN: u32 = 2;
pub const DEFAULT_DISTANCE_MAX: u32 = 10;

/// Histogram buckets below this share of trials are left out of `--inspect` output.
pub const HISTOGRAM_DISPLAY_MIN_SHARE: f64 = 0.02;
