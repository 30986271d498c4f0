//! Table assembly: one D9 per (skill, distance) cell, computed in parallel.
//!
//! Cells are independent: each runs its own seeded sampler, histogram and
//! resampler, and the results are collected into an ordered map keyed by
//! `(skill, distance)`. The table is read-only once assembled.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{debug, info};

use crate::config::TableConfig;
use crate::error::TravelError;
use crate::simulation::{
    build_histogram, cell_rng, resample_into_d9, simulate, CostSummary, Histogram, QuantileTable,
};

/// Everything computed for one grid cell.
#[derive(Debug, Clone, Serialize)]
pub struct CellResult {
    pub skill: i32,
    pub distance: u32,
    pub histogram: Histogram,
    pub summary: CostSummary,
    pub d9: QuantileTable,
}

/// Run the full pipeline for one cell. The target roll is the skill itself and
/// the resampler floor is the distance.
pub fn simulate_cell(
    config: &TableConfig,
    skill: i32,
    distance: u32,
) -> Result<CellResult, TravelError> {
    let mut rng = cell_rng(config.seed, skill, distance);
    let costs = simulate(&mut rng, skill, distance, config.sample_count);
    let summary = CostSummary::from_sorted(&costs).ok_or(TravelError::InsufficientData)?;
    let histogram = build_histogram(&costs);
    let d9 = resample_into_d9(&histogram, distance)?;
    Ok(CellResult {
        skill,
        distance,
        histogram,
        summary,
        d9,
    })
}

/// D9 tables for every (skill, distance) cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    skills: Vec<i32>,
    distances: Vec<u32>,
    cells: BTreeMap<(i32, u32), QuantileTable>,
}

impl LookupTable {
    /// Skill rows, ascending.
    pub fn skills(&self) -> &[i32] {
        &self.skills
    }

    /// Distance columns, ascending.
    pub fn distances(&self) -> &[u32] {
        &self.distances
    }

    pub fn get(&self, skill: i32, distance: u32) -> Option<&QuantileTable> {
        self.cells.get(&(skill, distance))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in (skill, distance) order.
    pub fn iter(&self) -> impl Iterator<Item = ((i32, u32), &QuantileTable)> + '_ {
        self.cells.iter().map(|(&k, v)| (k, v))
    }
}

/// Assemble the full lookup table.
pub fn assemble(config: &TableConfig) -> Result<LookupTable, TravelError> {
    let never = AtomicBool::new(false);
    assemble_with_cancel(config, &never)
}

/// Like [`assemble`], but checks `cancel` before starting each cell and
/// returns [`TravelError::Cancelled`] once it is set.
pub fn assemble_with_cancel(
    config: &TableConfig,
    cancel: &AtomicBool,
) -> Result<LookupTable, TravelError> {
    config.validate()?;

    let skills = config.skill_range.values();
    let distances = config.distance_range.values();
    let grid: Vec<(i32, u32)> = skills
        .iter()
        .flat_map(|&s| distances.iter().map(move |&d| (s, d)))
        .collect();

    info!(
        cells = grid.len(),
        samples = config.sample_count,
        seed = config.seed,
        "assembling travel table"
    );
    let start = Instant::now();

    let results: Vec<CellResult> = grid
        .par_iter()
        .map(|&(skill, distance)| {
            if cancel.load(Ordering::Relaxed) {
                return Err(TravelError::Cancelled);
            }
            let cell = simulate_cell(config, skill, distance)?;
            debug!(
                skill,
                distance,
                mean = cell.summary.mean,
                d9 = ?cell.d9.values(),
                "cell done"
            );
            Ok(cell)
        })
        .collect::<Result<_, _>>()?;

    let cells: BTreeMap<(i32, u32), QuantileTable> = results
        .into_iter()
        .map(|c| ((c.skill, c.distance), c.d9))
        .collect();

    info!(
        cells = cells.len(),
        elapsed_s = start.elapsed().as_secs_f64(),
        "travel table assembled"
    );

    Ok(LookupTable {
        skills,
        distances,
        cells,
    })
}
