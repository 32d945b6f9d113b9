//! All tunable distributions in one place.
//!
//! Every weight vector here lines up positionally with the matching
//! `ALL` array in `types`. The sampler validates each table on use,
//! so a bad edit here fails the run as a configuration error rather
//! than silently skewing the data.

use crate::types::{AgeGroup, Generation};
use serde::Serialize;

/// Population share of each donor type, in `DonorType::ALL` order:
/// Foundation/Corporate, Major Individual, Monthly Sustainers,
/// Event Donors, Small Online Donors.
pub const DONOR_TYPE_WEIGHTS: [f64; 5] = [0.02, 0.03, 0.15, 0.20, 0.60];

/// Generation mix, in `Generation::ALL` order. Independent of donor type.
pub const GENERATION_WEIGHTS: [f64; 4] = [0.15, 0.35, 0.30, 0.20];

/// Gender mix, in `Gender::ALL` order.
pub const GENDER_WEIGHTS: [f64; 4] = [0.58, 0.40, 0.015, 0.005];

/// Payment method mix, in `PaymentMethod::ALL` order. Global, not
/// conditioned on any donor attribute.
pub const METHOD_WEIGHTS: [f64; 6] = [0.35, 0.25, 0.15, 0.15, 0.05, 0.05];

/// Giving profile for one donor type: donation amount distribution
/// (normal) and expected donations per donor (Poisson lambda).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DonorTypeParams {
    pub avg_donation: f64,
    pub std_dev: f64,
    pub frequency: f64,
}

pub fn donor_type_params(donor_type: crate::types::DonorType) -> DonorTypeParams {
    use crate::types::DonorType::*;
    match donor_type {
        FoundationCorporate => DonorTypeParams {
            avg_donation: 25_000.0,
            std_dev: 15_000.0,
            frequency: 1.5,
        },
        MajorIndividual => DonorTypeParams {
            avg_donation: 5_000.0,
            std_dev: 2_000.0,
            frequency: 2.0,
        },
        // $35/month sustainers: small amounts, ~11 gifts a year.
        MonthlySustainers => DonorTypeParams {
            avg_donation: 35.0,
            std_dev: 15.0,
            frequency: 11.0,
        },
        EventDonors => DonorTypeParams {
            avg_donation: 150.0,
            std_dev: 75.0,
            frequency: 1.2,
        },
        SmallOnlineDonors => DonorTypeParams {
            avg_donation: 45.0,
            std_dev: 25.0,
            frequency: 1.8,
        },
    }
}

/// Permitted age groups per generation, with conditional weights.
/// A generation never maps outside its subset (hard invariant).
pub fn age_group_dist(generation: Generation) -> (&'static [AgeGroup], &'static [f64]) {
    use AgeGroup::*;
    match generation {
        Generation::GenZ => (&[From18To30], &[1.0]),
        Generation::Millennial => (&[From18To30, From31To45], &[0.3, 0.7]),
        Generation::GenX => (&[From31To45, From46To60], &[0.4, 0.6]),
        Generation::Boomer => (&[From46To60, Over60], &[0.3, 0.7]),
    }
}

/// Income bracket weights keyed by generation, in
/// `IncomeBracket::ALL` order.
pub fn income_weights(generation: Generation) -> &'static [f64; 4] {
    match generation {
        Generation::Boomer => &[0.20, 0.35, 0.35, 0.10],
        Generation::GenX => &[0.25, 0.40, 0.25, 0.10],
        Generation::Millennial => &[0.40, 0.35, 0.15, 0.10],
        Generation::GenZ => &[0.60, 0.25, 0.05, 0.10],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Generation;

    fn assert_unit_sum(weights: &[f64], what: &str) {
        let sum: f64 = weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "{what} weights sum to {sum}");
    }

    #[test]
    fn all_fixed_tables_sum_to_one() {
        assert_unit_sum(&DONOR_TYPE_WEIGHTS, "donor_type");
        assert_unit_sum(&GENERATION_WEIGHTS, "generation");
        assert_unit_sum(&GENDER_WEIGHTS, "gender");
        assert_unit_sum(&METHOD_WEIGHTS, "method");
    }

    #[test]
    fn conditional_tables_sum_to_one() {
        for generation in Generation::ALL {
            let (labels, weights) = age_group_dist(generation);
            assert_eq!(labels.len(), weights.len());
            assert_unit_sum(weights, generation.label());
            assert_unit_sum(income_weights(generation), generation.label());
        }
    }
}
