//! D9 resampling: compress a cost histogram into a nine-sided lookup die.
//!
//! Face `i` (0-based) stands for the cumulative-probability band
//! `[11·i, 11·(i+1))`. The histogram is inverted to `running% -> cost`, each
//! entry is written into band `running / 11`, and later (more expensive)
//! entries overwrite earlier ones, so a band reports the cost at its top.
//! Running percentages of 99 and above fall off the die.
//!
//! Bands no entry landed in are filled from the left neighbour, then from the
//! right. A band still empty after both passes (every entry landed at 99+, as
//! when all trials cost the same) reports `floor_value`. Values are clamped to
//! two digits.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::constants::{BAND_WIDTH, D9_SIDES, MAX_TABLE_VALUE};
use crate::error::TravelError;

use super::histogram::Histogram;

/// Nine PL values, one per face of the lookup die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QuantileTable(pub [u32; D9_SIDES]);

impl QuantileTable {
    pub fn values(&self) -> &[u32; D9_SIDES] {
        &self.0
    }

    /// PL for a rolled face, `1..=9`. `None` for any other face.
    pub fn roll(&self, face: usize) -> Option<u32> {
        if face == 0 {
            return None;
        }
        self.0.get(face - 1).copied()
    }

    /// Row `r` (0..3) of the 3×3 printed block.
    pub fn row(&self, r: usize) -> Option<[u32; 3]> {
        let start = r.checked_mul(3)?;
        let slice = self.0.get(start..start + 3)?;
        Some([slice[0], slice[1], slice[2]])
    }
}

/// Band a running percentage falls into, or `None` past the last face.
#[inline]
fn band_index(running_percentage: u32) -> Option<usize> {
    let band = (running_percentage / BAND_WIDTH) as usize;
    (band < D9_SIDES).then_some(band)
}

/// Fill empty bands from the left neighbour, then from the right.
fn fill_gaps(bands: &mut [Option<u32>; D9_SIDES]) {
    for i in 1..D9_SIDES {
        if bands[i].is_none() {
            bands[i] = bands[i - 1];
        }
    }
    for i in (0..D9_SIDES).rev() {
        if bands[i].is_none() {
            bands[i] = bands.get(i + 1).copied().flatten();
        }
    }
}

/// Resample a histogram into a D9 table.
///
/// `floor_value` is the cheapest physically possible cost (usually the
/// distance); it is reported for any band left empty.
pub fn resample_into_d9(
    histo: &Histogram,
    floor_value: u32,
) -> Result<QuantileTable, TravelError> {
    if histo.is_empty() {
        return Err(TravelError::InsufficientData);
    }

    // Invert: keyed by running percentage. On collisions the costlier outcome wins.
    let mut cost_by_running: BTreeMap<u32, u32> = BTreeMap::new();
    for (cost, sample) in histo.iter() {
        cost_by_running.insert(sample.running_percentage, cost);
    }

    let mut bands: [Option<u32>; D9_SIDES] = [None; D9_SIDES];
    for (&running, &cost) in &cost_by_running {
        if let Some(band) = band_index(running) {
            bands[band] = Some(cost);
        }
    }

    fill_gaps(&mut bands);

    Ok(QuantileTable(
        bands.map(|band| band.unwrap_or(floor_value).min(MAX_TABLE_VALUE)),
    ))
}
