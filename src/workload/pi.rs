//! A MapReduce-compatible Monte Carlo estimator for Pi.
//!
//! Every map invocation is one trial: draw a point in the unit square
//! and score whether it landed inside the unit circle. The reduce
//! function sums the hits. The quarter circle covers `pi / 4` of the
//! square, so `4 * hits / samples` approximates Pi.

use anyhow::Result;
use rand::{Rng, RngCore};

/// Draws one random point and scores the trial.
///
/// The element value only triggers the trial; the outcome depends on
/// nothing but the two uniform draws from `rng`. Returns `1` if the
/// point fell strictly inside the unit circle, `0` otherwise.
pub fn map(_elem: u64, rng: &mut dyn RngCore) -> Result<u64> {
    let x: f64 = rng.random();
    let y: f64 = rng.random();
    Ok(u64::from(x * x + y * y < 1.0))
}

/// Simply sums up two partial hit counts.
pub fn reduce(a: u64, b: u64) -> u64 {
    a + b
}

/// Derives the Pi estimate from the collected aggregate.
pub fn estimate(hits: u64, samples: u64) -> f64 {
    4.0 * hits as f64 / samples as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::FixedRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn outcome_is_binary() {
        let mut rng = StdRng::seed_from_u64(7);
        for elem in 1..=1_000 {
            let outcome = map(elem, &mut rng).unwrap();
            assert!(outcome == 0 || outcome == 1);
        }
    }

    #[test]
    fn point_inside_the_circle_scores_one() {
        let mut rng = FixedRng::uniform(0.5);
        assert_eq!(map(1, &mut rng).unwrap(), 1);
    }

    #[test]
    fn point_outside_the_circle_scores_zero() {
        // (0.9, 0.9) lies outside: 0.81 + 0.81 >= 1.
        let mut rng = FixedRng::uniform(0.9);
        assert_eq!(map(1, &mut rng).unwrap(), 0);
    }

    #[test]
    fn reduce_is_associative_and_commutative() {
        for (a, b, c) in [(0, 1, 2), (5, 0, 11), (100, 23, 42)] {
            assert_eq!(reduce(reduce(a, b), c), reduce(a, reduce(b, c)));
            assert_eq!(reduce(a, b), reduce(b, a));
        }
    }

    #[test]
    fn estimate_follows_the_hit_ratio() {
        assert_eq!(estimate(5, 5), 4.0);
        assert_eq!(estimate(0, 5), 0.0);
        assert_eq!(estimate(1, 4), 1.0);
    }
}
