//! Weighted categorical sampling.
//!
//! A `Categorical` pairs an ordered label slice with a same-length
//! weight slice. Construction validates the weights; a draw is one
//! cumulative roll against the stream RNG. The sampler never
//! re-normalizes — callers own the guarantee that weights sum to 1.

use crate::error::{DatasetError, DatasetResult};
use crate::rng::StreamRng;

/// How far a weight vector may drift from summing to exactly 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug)]
pub struct Categorical<'a, T> {
    labels: &'a [T],
    weights: &'a [f64],
}

impl<'a, T: Copy> Categorical<'a, T> {
    /// Validate a label/weight table. `context` names the table in
    /// the error so a bad distribution is traceable to its source.
    pub fn new(labels: &'a [T], weights: &'a [f64], context: &'static str) -> DatasetResult<Self> {
        if labels.is_empty() {
            return Err(DatasetError::InvalidDistribution {
                context,
                reason: "empty label set".into(),
            });
        }
        if labels.len() != weights.len() {
            return Err(DatasetError::InvalidDistribution {
                context,
                reason: format!("{} labels but {} weights", labels.len(), weights.len()),
            });
        }
        if let Some(w) = weights.iter().find(|w| **w < 0.0) {
            return Err(DatasetError::InvalidDistribution {
                context,
                reason: format!("negative weight {w}"),
            });
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(DatasetError::InvalidDistribution {
                context,
                reason: format!("weights sum to {sum}, expected 1"),
            });
        }
        Ok(Self { labels, weights })
    }

    /// One independent draw. Stateless with respect to prior draws.
    pub fn draw(&self, rng: &mut StreamRng) -> T {
        let roll = rng.next_f64();
        let mut cumulative = 0.0;
        for (label, weight) in self.labels.iter().zip(self.weights) {
            cumulative += weight;
            if roll < cumulative {
                return *label;
            }
        }
        // Floating-point tail: the cumulative sum can land a hair
        // under 1.0. The roll belongs to the last label.
        *self.labels.last().unwrap()
    }
}

/// Validate-and-draw in one call. The common path for fixed tables.
pub fn draw_one<T: Copy>(
    labels: &[T],
    weights: &[f64],
    context: &'static str,
    rng: &mut StreamRng,
) -> DatasetResult<T> {
    Ok(Categorical::new(labels, weights, context)?.draw(rng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_weights_not_summing_to_one() {
        let err = Categorical::new(&["a", "b"], &[0.5, 0.4], "test").unwrap_err();
        match err {
            DatasetError::InvalidDistribution { context, .. } => assert_eq!(context, "test"),
            other => panic!("expected InvalidDistribution, got {other:?}"),
        }
    }

    #[test]
    fn rejects_negative_weight() {
        assert!(Categorical::new(&["a", "b"], &[1.2, -0.2], "test").is_err());
    }

    #[test]
    fn rejects_empty_label_set() {
        let labels: &[&str] = &[];
        assert!(Categorical::new(labels, &[], "test").is_err());
    }

    #[test]
    fn rejects_length_mismatch() {
        assert!(Categorical::new(&["a", "b", "c"], &[0.5, 0.5], "test").is_err());
    }

    #[test]
    fn zero_weight_label_is_never_drawn() {
        // Statistical property from the spec'd behavior: an outcome
        // with weight 0 must not appear, across several seeds.
        for seed in [1u64, 13, 99, 7777] {
            let mut rng = StreamRng::new(seed);
            let dist = Categorical::new(&["live", "dead"], &[1.0, 0.0], "test").unwrap();
            for _ in 0..10_000 {
                assert_eq!(dist.draw(&mut rng), "live", "zero-weight label drawn (seed {seed})");
            }
        }
    }

    #[test]
    fn draw_frequencies_track_weights() {
        let mut rng = StreamRng::new(13);
        let dist = Categorical::new(&["x", "y", "z"], &[0.6, 0.3, 0.1], "test").unwrap();
        let n = 50_000;
        let mut hits = [0usize; 3];
        for _ in 0..n {
            match dist.draw(&mut rng) {
                "x" => hits[0] += 1,
                "y" => hits[1] += 1,
                _ => hits[2] += 1,
            }
        }
        for (hit, expected) in hits.iter().zip([0.6, 0.3, 0.1]) {
            let observed = *hit as f64 / n as f64;
            assert!(
                (observed - expected).abs() < 0.02,
                "observed {observed:.3}, expected {expected}"
            );
        }
    }
}
