//! Per-cell seeding: SplitMix64 mixing of `(seed, skill, distance)`.
//!
//! Each grid cell gets its own `SmallRng`. Its seed depends only on the master
//! seed and the cell's coordinates, never on the cell's position in the grid or
//! on which worker runs it, so tables are reproducible under any thread count.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// SplitMix64 step.
#[inline(always)]
fn splitmix64_next(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e3779b97f4a7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Derive the seed for one grid cell.
pub fn cell_seed(seed: u64, skill: i32, distance: u32) -> u64 {
    let mut x = seed;
    x ^= (skill as u32 as u64).wrapping_mul(0xd6e8feb86659fd93);
    x ^= (distance as u64).wrapping_mul(0xa5a35625e4f7c1ad);
    let mut s = x;
    splitmix64_next(&mut s)
}

/// Generator for one grid cell.
pub fn cell_rng(seed: u64, skill: i32, distance: u32) -> SmallRng {
    SmallRng::seed_from_u64(cell_seed(seed, skill, distance))
}
