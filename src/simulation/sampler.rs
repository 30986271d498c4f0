//! Cruise-test sampler: simulates how many attempts a trip costs.
//!
//! One cruise covers `distance` areas. Each attempt rolls a D100 and advances
//! one area on `roll <= target_roll` or on a natural 1 (the critical floor), so
//! every trip terminates even at `target_roll <= 0`. Each attempt costs one
//! point of power loss (PL), success or not.
//!
//! The generator is injected; callers seed it (see [`super::seeding`]).

use rand::Rng;

use crate::constants::{CRITICAL_ROLL, DIE_SIDES};

/// Whether a single D100 roll advances the ship.
#[inline(always)]
fn attempt_succeeds(roll: i32, target_roll: i32) -> bool {
    roll <= target_roll || roll == CRITICAL_ROLL
}

/// Fly one cruise of `distance` areas and return its PL cost.
///
/// A zero distance costs nothing and performs no draws.
#[inline]
pub fn cruise_test<R: Rng + ?Sized>(rng: &mut R, target_roll: i32, distance: u32) -> u32 {
    let mut remaining = distance;
    let mut cost = 0u32;
    while remaining > 0 {
        let roll = rng.random_range(1..=DIE_SIDES);
        if attempt_succeeds(roll, target_roll) {
            remaining -= 1;
        }
        cost += 1;
    }
    cost
}

/// Simulate `trial_count` independent cruises, returning their costs ascending.
pub fn simulate<R: Rng + ?Sized>(
    rng: &mut R,
    target_roll: i32,
    distance: u32,
    trial_count: usize,
) -> Vec<u32> {
    if distance == 0 {
        return vec![0; trial_count];
    }
    let mut costs: Vec<u32> = (0..trial_count)
        .map(|_| cruise_test(rng, target_roll, distance))
        .collect();
    costs.sort_unstable();
    costs
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{RngCore, SeedableRng};

    /// Fails the test on any draw.
    struct NoDrawRng;

    impl RngCore for NoDrawRng {
        fn next_u32(&mut self) -> u32 {
            panic!("unexpected random draw");
        }
        fn next_u64(&mut self) -> u64 {
            panic!("unexpected random draw");
        }
        fn fill_bytes(&mut self, _dst: &mut [u8]) {
            panic!("unexpected random draw");
        }
    }

    #[test]
    fn test_attempt_succeeds() {
        assert!(attempt_succeeds(50, 50));
        assert!(!attempt_succeeds(51, 50));
        assert!(attempt_succeeds(1, 0));
        assert!(attempt_succeeds(1, -40));
        assert!(!attempt_succeeds(2, 0));
        assert!(attempt_succeeds(100, 130));
    }

    #[test]
    fn test_zero_distance_draws_nothing() {
        let mut rng = NoDrawRng;
        assert_eq!(simulate(&mut rng, 50, 0, 1000), vec![0; 1000]);
        assert_eq!(cruise_test(&mut rng, 50, 0), 0);
    }

    #[test]
    fn test_certain_success_costs_distance() {
        let mut rng = SmallRng::seed_from_u64(42);
        for target in [100, 101, 250] {
            let costs = simulate(&mut rng, target, 7, 500);
            assert!(costs.iter().all(|&c| c == 7), "target={}", target);
        }
    }

    #[test]
    fn test_cost_never_below_distance() {
        let mut rng = SmallRng::seed_from_u64(7);
        for target in [1, 20, 55, 99] {
            let costs = simulate(&mut rng, target, 4, 2000);
            assert!(costs.iter().all(|&c| c >= 4), "target={}", target);
        }
    }

    #[test]
    fn test_output_sorted_and_sized() {
        let mut rng = SmallRng::seed_from_u64(3);
        let costs = simulate(&mut rng, 40, 3, 5000);
        assert_eq!(costs.len(), 5000);
        assert!(costs.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_hopeless_skill_terminates_on_criticals() {
        // Only natural 1s advance: expected cost is 100 per area.
        let mut rng = SmallRng::seed_from_u64(11);
        let costs = simulate(&mut rng, 0, 1, 2000);
        let mean = costs.iter().map(|&c| c as f64).sum::<f64>() / costs.len() as f64;
        assert!(
            (80.0..120.0).contains(&mean),
            "Mean cost {:.1} far from 100",
            mean
        );
    }

    #[test]
    fn test_simulate_deterministic() {
        let mut rng1 = SmallRng::seed_from_u64(123);
        let mut rng2 = SmallRng::seed_from_u64(123);
        assert_eq!(
            simulate(&mut rng1, 60, 5, 1000),
            simulate(&mut rng2, 60, 5, 1000)
        );
    }
}
