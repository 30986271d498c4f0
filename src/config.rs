//! Run parameters for one table build.
//!
//! Defaults reproduce the reference tables (skills 20..=100 step 10, distances
//! 2..10, 50000 trials per cell). A JSON file may override any subset of
//! fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::*;
use crate::error::TravelError;

/// Skill rows: `min, min + step, ..` up to and including `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRange {
    pub min: i32,
    pub max: i32,
    pub step: i32,
}

impl Default for SkillRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_SKILL_MIN,
            max: DEFAULT_SKILL_MAX,
            step: DEFAULT_SKILL_STEP,
        }
    }
}

impl SkillRange {
    /// All skill values in the range. Empty if the range is invalid.
    pub fn values(&self) -> Vec<i32> {
        if self.step <= 0 || self.max < self.min {
            return Vec::new();
        }
        (self.min..=self.max).step_by(self.step as usize).collect()
    }
}

/// Distance columns: `min..max`, max exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceRange {
    pub min: u32,
    pub max: u32,
}

impl Default for DistanceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_DISTANCE_MIN,
            max: DEFAULT_DISTANCE_MAX,
        }
    }
}

impl DistanceRange {
    pub fn values(&self) -> Vec<u32> {
        (self.min..self.max).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Monte-Carlo trials per grid cell.
    pub sample_count: usize,
    /// Master seed; each cell derives its own stream from it.
    pub seed: u64,
    pub skill_range: SkillRange,
    pub distance_range: DistanceRange,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLES,
            seed: DEFAULT_SEED,
            skill_range: SkillRange::default(),
            distance_range: DistanceRange::default(),
        }
    }
}

impl TableConfig {
    /// Load from a JSON file. Fields absent from the file keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TravelError> {
        let text = std::fs::read_to_string(path)?;
        let config: TableConfig = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Reject configurations that cannot produce a table.
    pub fn validate(&self) -> Result<(), TravelError> {
        if self.sample_count == 0 {
            return Err(TravelError::InvalidConfig(
                "sample_count must be positive".to_string(),
            ));
        }
        let s = &self.skill_range;
        if s.max <= s.min {
            return Err(TravelError::InvalidConfig(format!(
                "skill_range max ({}) must exceed min ({})",
                s.max, s.min
            )));
        }
        if s.step <= 0 {
            return Err(TravelError::InvalidConfig(format!(
                "skill_range step must be positive, got {}",
                s.step
            )));
        }
        let d = &self.distance_range;
        if d.max <= d.min {
            return Err(TravelError::InvalidConfig(format!(
                "distance_range max ({}) must exceed min ({})",
                d.max, d.min
            )));
        }
        Ok(())
    }

    /// Number of (skill, distance) cells in the grid.
    pub fn num_cells(&self) -> usize {
        self.skill_range.values().len() * self.distance_range.values().len()
    }
}
