//! Acquisition-source and campaign selection.
//!
//! Two pure dispatch tables keyed on donor type. Campaign selection
//! additionally splits Event Donors and Small Online Donors by
//! generation (Gen Z/Millennial vs Gen X/Boomer). The donor type
//! enum is closed, so every branch is enumerated at compile time —
//! an unknown type cannot reach these tables.

use crate::error::DatasetResult;
use crate::rng::StreamRng;
use crate::sampler;
use crate::types::{DonorType, Generation};

/// Where a donor of this type was most plausibly acquired.
pub fn acquisition_source(
    donor_type: DonorType,
    rng: &mut StreamRng,
) -> DatasetResult<&'static str> {
    let (labels, weights): (&[&'static str], &[f64]) = match donor_type {
        DonorType::FoundationCorporate => (
            &[
                "Foundation Outreach",
                "Partner Organization",
                "Website Donation",
                "Email Campaign",
                "Referral",
            ],
            &[0.50, 0.30, 0.10, 0.07, 0.03],
        ),
        DonorType::MajorIndividual => (
            &[
                "Foundation Outreach",
                "Partner Organization",
                "Website Donation",
                "Email Campaign",
                "Event",
                "Referral",
            ],
            &[0.25, 0.20, 0.25, 0.15, 0.10, 0.05],
        ),
        DonorType::MonthlySustainers => (
            &[
                "Website Donation",
                "Meta Ads",
                "Nurture Campaign",
                "Email Campaign",
                "Newsletter Signup",
                "Volunteer Conversion",
            ],
            &[0.40, 0.25, 0.15, 0.10, 0.06, 0.04],
        ),
        DonorType::EventDonors => (
            &[
                "Earth Day Event",
                "Fox Habitat Event",
                "Bat Box Build Event",
                "Website Donation",
                "Meta Ads",
                "Volunteer Conversion",
            ],
            &[0.35, 0.25, 0.20, 0.10, 0.06, 0.04],
        ),
        DonorType::SmallOnlineDonors => (
            &[
                "Website Donation",
                "Meta Ads",
                "Google Ads",
                "Nurture Campaign",
                "Newsletter Signup",
                "Peer-to-Peer Fundraising",
            ],
            &[0.30, 0.25, 0.20, 0.12, 0.08, 0.05],
        ),
    };
    sampler::draw_one(labels, weights, "acquisition_source", rng)
}

/// Which campaign a donation lands in. For Event Donors and Small
/// Online Donors the younger cohorts respond to a different slate.
pub fn campaign(
    donor_type: DonorType,
    generation: Generation,
    rng: &mut StreamRng,
) -> DatasetResult<&'static str> {
    let younger = matches!(generation, Generation::GenZ | Generation::Millennial);
    let (labels, weights): (&[&'static str], &[f64]) = match donor_type {
        DonorType::FoundationCorporate => (
            &[
                "Annual Appeal",
                "Emergency Response Fund",
                "Biodiversity Action Program",
                "Gray Bat Habitat Fund",
                "Crocodilian Conservation Challenge",
            ],
            &[0.35, 0.25, 0.20, 0.12, 0.08],
        ),
        DonorType::MajorIndividual => (
            &[
                "Annual Appeal",
                "Giving Season",
                "Emergency Response Fund",
                "Endangered Species Fund",
                "Biodiversity Action Program",
                "Arctic Fox Day",
            ],
            &[0.30, 0.25, 0.15, 0.12, 0.10, 0.08],
        ),
        DonorType::MonthlySustainers => (
            &[
                "Monthly Giving Program",
                "Annual Appeal",
                "Giving Season",
                "Arctic Fox Day",
                "Pollinator Protection Project",
            ],
            &[0.60, 0.15, 0.10, 0.08, 0.07],
        ),
        DonorType::EventDonors if younger => (
            &[
                "Earth Day Events",
                "Red Fox Run 5K",
                "Kids 4 Climate School Fundraiser",
                "Arctic Fox Day",
                "Gray Bat Habitat Fund",
                "Annual Appeal",
            ],
            &[0.30, 0.25, 0.20, 0.10, 0.08, 0.07],
        ),
        DonorType::EventDonors => (
            &[
                "Earth Day Events",
                "Annual Appeal",
                "Giving Season",
                "Red Fox Run 5K",
                "Gray Bat Habitat Fund",
                "Endangered Species Fund",
            ],
            &[0.25, 0.20, 0.18, 0.15, 0.12, 0.10],
        ),
        DonorType::SmallOnlineDonors if younger => (
            &[
                "Arctic Fox Day",
                "Kids 4 Climate School Fundraiser",
                "Earth Day Events",
                "New Year Giving Initiative",
                "Whale Shark Supporter Program",
                "Annual Appeal",
            ],
            &[0.25, 0.20, 0.18, 0.12, 0.12, 0.13],
        ),
        DonorType::SmallOnlineDonors => (
            &[
                "Annual Appeal",
                "Giving Season",
                "Arctic Fox Day",
                "Endangered Species Fund",
                "Earth Day Events",
                "Emergency Response Fund",
            ],
            &[0.25, 0.20, 0.18, 0.15, 0.12, 0.10],
        ),
    };
    sampler::draw_one(labels, weights, "campaign", rng)
}
