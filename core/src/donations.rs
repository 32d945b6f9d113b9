//! Donation sequence generation.

use crate::config;
use crate::donors::DonorRecord;
use crate::error::DatasetResult;
use crate::identity::IdentityGenerator;
use crate::rng::StreamRng;
use crate::sampler;
use crate::selectors;
use crate::types::PaymentMethod;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Donation amounts never fall below this floor.
pub const MIN_AMOUNT: f64 = 5.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationRecord {
    pub donation_id: String,
    pub donor_id: String,
    pub amount: f64,
    pub donation_date: NaiveDate,
    pub campaign: String,
    pub method: PaymentMethod,
}

/// Round to cents.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Generate every donor's donation sequence. Count is a Poisson draw
/// on the donor type's frequency, floored at 1 — every donor gives at
/// least once. Dates land in [first_donation_date, today].
pub fn generate_donations(
    donors: &[DonorRecord],
    rng: &mut StreamRng,
    today: NaiveDate,
) -> DatasetResult<Vec<DonationRecord>> {
    let mut donations = Vec::new();
    for donor in donors {
        let params = config::donor_type_params(donor.donor_type);
        let count = rng.poisson(params.frequency).max(1);

        for _ in 0..count {
            let amount = round2(rng.normal(params.avg_donation, params.std_dev).max(MIN_AMOUNT));
            let donation_date =
                IdentityGenerator::date_between(donor.first_donation_date, today, rng);
            let campaign = selectors::campaign(donor.donor_type, donor.generation, rng)?;
            let method = sampler::draw_one(
                &PaymentMethod::ALL,
                &config::METHOD_WEIGHTS,
                "method",
                rng,
            )?;

            donations.push(DonationRecord {
                donation_id: IdentityGenerator::donation_token(rng),
                donor_id: donor.donor_id.clone(),
                amount,
                donation_date,
                campaign: campaign.to_string(),
                method,
            });
        }
    }

    log::info!(
        "generation: built {} donations for {} donors",
        donations.len(),
        donors.len()
    );
    Ok(donations)
}
