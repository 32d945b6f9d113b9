//! Aggregation over the donor x donation join.
//!
//! Read-only views: the join borrows both tables, and every report
//! is computed fresh from the joined rows. Grouping goes through a
//! BTreeMap so report order is deterministic even between equal
//! totals.

use crate::donations::{round2, DonationRecord};
use crate::donors::DonorRecord;
use crate::error::{DatasetError, DatasetResult};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// One donation with its donor attributes attached.
#[derive(Debug, Clone, Copy)]
pub struct JoinedRow<'a> {
    pub donation: &'a DonationRecord,
    pub donor: &'a DonorRecord,
}

/// Inner join on donor_id. A donation referencing a missing donor,
/// or dated before its donor's first donation, is a data-integrity
/// failure for the whole run.
pub fn join<'a>(
    donors: &'a [DonorRecord],
    donations: &'a [DonationRecord],
) -> DatasetResult<Vec<JoinedRow<'a>>> {
    let by_id: HashMap<&str, &DonorRecord> =
        donors.iter().map(|d| (d.donor_id.as_str(), d)).collect();

    let mut rows = Vec::with_capacity(donations.len());
    for donation in donations {
        let donor = by_id.get(donation.donor_id.as_str()).ok_or_else(|| {
            DatasetError::DataIntegrity(format!(
                "donation {} references unknown donor {}",
                donation.donation_id, donation.donor_id
            ))
        })?;
        if donation.donation_date < donor.first_donation_date {
            return Err(DatasetError::DataIntegrity(format!(
                "donation {} dated {} precedes donor {}'s first donation {}",
                donation.donation_id,
                donation.donation_date,
                donor.donor_id,
                donor.first_donation_date
            )));
        }
        rows.push(JoinedRow { donation, donor });
    }
    Ok(rows)
}

/// Sum / mean / count for one group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupStat {
    pub key: String,
    pub total: f64,
    pub mean: f64,
    pub count: usize,
}

fn group_by<F>(rows: &[JoinedRow], key_fn: F) -> Vec<GroupStat>
where
    F: Fn(&JoinedRow) -> String,
{
    let mut acc: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let entry = acc.entry(key_fn(row)).or_insert((0.0, 0));
        entry.0 += row.donation.amount;
        entry.1 += 1;
    }
    let mut stats: Vec<GroupStat> = acc
        .into_iter()
        .map(|(key, (total, count))| GroupStat {
            key,
            total: round2(total),
            mean: round2(total / count as f64),
            count,
        })
        .collect();
    stats.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.key.cmp(&b.key))
    });
    stats
}

/// The five descriptive reports over one generated dataset.
#[derive(Debug, Serialize)]
pub struct ReportSet {
    pub by_gender: Vec<GroupStat>,
    pub by_generation: Vec<GroupStat>,
    pub by_campaign: Vec<GroupStat>,
    pub by_acquisition_source: Vec<GroupStat>,
    /// Donor consistency: one group per donor_id, most frequent first.
    pub by_donor: Vec<GroupStat>,
}

pub fn build_reports(rows: &[JoinedRow]) -> ReportSet {
    let mut by_donor = group_by(rows, |r| r.donor.donor_id.clone());
    by_donor.sort_by(|a, b| {
        b.count.cmp(&a.count).then_with(|| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.key.cmp(&b.key))
        })
    });

    ReportSet {
        by_gender: group_by(rows, |r| r.donor.gender.label().to_string()),
        by_generation: group_by(rows, |r| r.donor.generation.label().to_string()),
        by_campaign: group_by(rows, |r| r.donation.campaign.clone()),
        by_acquisition_source: group_by(rows, |r| r.donor.acquisition_source.clone()),
        by_donor,
    }
}
