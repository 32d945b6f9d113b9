//! CSV export of the three tables.
//!
//! Column names and order are a downstream compatibility contract;
//! do not reorder. Writers are generic over `io::Write` so tests can
//! capture output bytes without touching disk. Amounts are always
//! printed with two decimals.

use crate::donations::DonationRecord;
use crate::donors::DonorRecord;
use crate::error::{DatasetError, DatasetResult};
use crate::report::JoinedRow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const DONORS_FILE: &str = "conservation_donors.csv";
pub const DONATIONS_FILE: &str = "conservation_donations.csv";
pub const ANALYSIS_FILE: &str = "conservation_analysis.csv";

const DONOR_COLUMNS: [&str; 12] = [
    "donor_id",
    "name",
    "email",
    "phone",
    "address",
    "gender",
    "generation",
    "age_group",
    "income_bracket",
    "donor_type",
    "first_donation_date",
    "acquisition_source",
];

const DONATION_COLUMNS: [&str; 6] = [
    "donation_id",
    "donor_id",
    "amount",
    "donation_date",
    "campaign",
    "method",
];

fn donor_fields(d: &DonorRecord) -> [String; 12] {
    [
        d.donor_id.clone(),
        d.name.clone(),
        d.email.clone(),
        d.phone.clone(),
        d.address.clone(),
        d.gender.label().to_string(),
        d.generation.label().to_string(),
        d.age_group.label().to_string(),
        d.income_bracket.label().to_string(),
        d.donor_type.label().to_string(),
        d.first_donation_date.to_string(),
        d.acquisition_source.clone(),
    ]
}

fn donation_fields(d: &DonationRecord) -> [String; 6] {
    [
        d.donation_id.clone(),
        d.donor_id.clone(),
        format!("{:.2}", d.amount),
        d.donation_date.to_string(),
        d.campaign.clone(),
        d.method.label().to_string(),
    ]
}

pub fn write_donors_csv<W: Write>(out: W, donors: &[DonorRecord]) -> DatasetResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(DONOR_COLUMNS)?;
    for donor in donors {
        writer.write_record(donor_fields(donor))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_donations_csv<W: Write>(out: W, donations: &[DonationRecord]) -> DatasetResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(DONATION_COLUMNS)?;
    for donation in donations {
        writer.write_record(donation_fields(donation))?;
    }
    writer.flush()?;
    Ok(())
}

/// The donor⋈donation view: donation columns, then the donor's
/// attributes (donor_id appears once, from the donation side).
pub fn write_analysis_csv<W: Write>(out: W, rows: &[JoinedRow]) -> DatasetResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    let header: Vec<&str> = DONATION_COLUMNS
        .iter()
        .chain(DONOR_COLUMNS.iter().filter(|c| **c != "donor_id"))
        .copied()
        .collect();
    writer.write_record(&header)?;
    for row in rows {
        let donation = donation_fields(row.donation);
        let donor = donor_fields(row.donor);
        let record: Vec<&str> = donation
            .iter()
            .map(String::as_str)
            .chain(
                donor
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != 0) // skip the donor-side donor_id
                    .map(|(_, f)| f.as_str()),
            )
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write all three tables into `dir`. Fails on the first table that
/// cannot be written; files already written stay on disk, but the
/// run must then be reported as failed.
pub fn export_all(
    dir: &Path,
    donors: &[DonorRecord],
    donations: &[DonationRecord],
    rows: &[JoinedRow],
) -> DatasetResult<()> {
    write_table(dir, DONORS_FILE, |w| write_donors_csv(w, donors))?;
    write_table(dir, DONATIONS_FILE, |w| write_donations_csv(w, donations))?;
    write_table(dir, ANALYSIS_FILE, |w| write_analysis_csv(w, rows))?;
    Ok(())
}

fn write_table<F>(dir: &Path, file_name: &str, write_fn: F) -> DatasetResult<()>
where
    F: FnOnce(File) -> DatasetResult<()>,
{
    let path = dir.join(file_name);
    let as_export_err = |reason: String| DatasetError::Export {
        path: path.display().to_string(),
        reason,
    };
    let file = File::create(&path).map_err(|e| as_export_err(e.to_string()))?;
    write_fn(file).map_err(|e| as_export_err(e.to_string()))?;
    log::info!("export: wrote {}", path.display());
    Ok(())
}
