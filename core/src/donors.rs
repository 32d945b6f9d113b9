//! Donor profile generation.
//!
//! Draw order is load-bearing: later draws condition on earlier ones
//! (age group on generation, income on generation, name on gender,
//! acquisition on donor type), and reproducibility depends on every
//! run consuming the stream in the same sequence.

use crate::config;
use crate::error::DatasetResult;
use crate::identity::IdentityGenerator;
use crate::rng::StreamRng;
use crate::sampler;
use crate::selectors;
use crate::types::{AgeGroup, DonorType, Gender, Generation, IncomeBracket};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// One synthetic donor. Write-once: never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorRecord {
    pub donor_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub gender: Gender,
    pub generation: Generation,
    pub age_group: AgeGroup,
    pub income_bracket: IncomeBracket,
    pub donor_type: DonorType,
    pub first_donation_date: NaiveDate,
    pub acquisition_source: String,
}

/// Generate `n` donor profiles. First donation dates land uniformly
/// between five years and one year before `today`.
pub fn generate_donors(
    n: usize,
    rng: &mut StreamRng,
    today: NaiveDate,
) -> DatasetResult<Vec<DonorRecord>> {
    let window_start = today - Duration::days(5 * 365);
    let window_end = today - Duration::days(365);

    let mut donors = Vec::with_capacity(n);
    for i in 0..n {
        let donor_type = sampler::draw_one(
            &DonorType::ALL,
            &config::DONOR_TYPE_WEIGHTS,
            "donor_type",
            rng,
        )?;
        let generation = sampler::draw_one(
            &Generation::ALL,
            &config::GENERATION_WEIGHTS,
            "generation",
            rng,
        )?;
        let (age_labels, age_weights) = config::age_group_dist(generation);
        let age_group = sampler::draw_one(age_labels, age_weights, "age_group", rng)?;
        let income_bracket = sampler::draw_one(
            &IncomeBracket::ALL,
            config::income_weights(generation),
            "income_bracket",
            rng,
        )?;
        let gender = sampler::draw_one(&Gender::ALL, &config::GENDER_WEIGHTS, "gender", rng)?;

        let name = IdentityGenerator::full_name(gender, rng);
        let email = IdentityGenerator::email(rng);
        let phone = IdentityGenerator::phone(rng);
        let address = IdentityGenerator::address(rng);

        let acquisition_source = selectors::acquisition_source(donor_type, rng)?.to_string();
        let first_donation_date = IdentityGenerator::date_between(window_start, window_end, rng);

        donors.push(DonorRecord {
            donor_id: format!("DNR{i:04}"),
            name,
            email,
            phone,
            address,
            gender,
            generation,
            age_group,
            income_bracket,
            donor_type,
            first_donation_date,
            acquisition_source,
        });
    }

    log::info!("generation: built {n} donor profiles");
    Ok(donors)
}
