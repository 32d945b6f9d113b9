//! Report consistency: no donation dropped or double-counted, and
//! the join rejects corrupt tables.

use chrono::NaiveDate;
use donorsim_core::{
    error::DatasetError,
    export,
    pipeline::{generate_as_of, Dataset, RunConfig},
    report::{self, GroupStat},
};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn run(donors: usize, seed: u64) -> Dataset {
    generate_as_of(&RunConfig { donors, seed }, as_of()).expect("generation")
}

fn total_of(stats: &[GroupStat]) -> f64 {
    stats.iter().map(|s| s.total).sum()
}

#[test]
fn every_report_sums_to_the_grand_total() {
    let dataset = run(500, 13);
    let rows = report::join(&dataset.donors, &dataset.donations).unwrap();
    let reports = report::build_reports(&rows);

    let grand_total: f64 = dataset.donations.iter().map(|d| d.amount).sum();

    for (name, stats) in [
        ("gender", &reports.by_gender),
        ("generation", &reports.by_generation),
        ("campaign", &reports.by_campaign),
        ("acquisition_source", &reports.by_acquisition_source),
        ("donor", &reports.by_donor),
    ] {
        let report_total = total_of(stats);
        assert!(
            (report_total - grand_total).abs() < 0.05,
            "{name} report total {report_total:.2} != grand total {grand_total:.2}"
        );
        let report_count: usize = stats.iter().map(|s| s.count).sum();
        assert_eq!(
            report_count,
            dataset.donations.len(),
            "{name} report dropped or double-counted donations"
        );
    }
}

#[test]
fn reports_are_sorted_by_total_descending() {
    let dataset = run(300, 13);
    let rows = report::join(&dataset.donors, &dataset.donations).unwrap();
    let reports = report::build_reports(&rows);

    for stats in [
        &reports.by_gender,
        &reports.by_generation,
        &reports.by_campaign,
        &reports.by_acquisition_source,
    ] {
        for pair in stats.windows(2) {
            assert!(
                pair[0].total >= pair[1].total,
                "report not sorted: {} ({:.2}) before {} ({:.2})",
                pair[0].key,
                pair[0].total,
                pair[1].key,
                pair[1].total
            );
        }
    }

    // Donor consistency report sorts by gift count first.
    for pair in reports.by_donor.windows(2) {
        assert!(pair[0].count >= pair[1].count, "donor report not sorted by count");
    }
}

#[test]
fn scenario_ten_donors_seed_thirteen() {
    let dataset = run(10, 13);
    assert_eq!(dataset.donors.len(), 10);
    assert!(
        dataset.donations.len() >= 10,
        "every donor gives at least once, expected >= 10 donations"
    );

    let rows = report::join(&dataset.donors, &dataset.donations).unwrap();
    assert_eq!(rows.len(), dataset.donations.len(), "join dropped donations");

    // CSV row counts: header + one line per record.
    let mut donors_csv = Vec::new();
    export::write_donors_csv(&mut donors_csv, &dataset.donors).unwrap();
    let donor_lines = String::from_utf8(donors_csv).unwrap().lines().count();
    assert_eq!(donor_lines, dataset.donors.len() + 1);

    let mut donations_csv = Vec::new();
    export::write_donations_csv(&mut donations_csv, &dataset.donations).unwrap();
    let donation_lines = String::from_utf8(donations_csv).unwrap().lines().count();
    assert_eq!(donation_lines, dataset.donations.len() + 1);

    let mut analysis_csv = Vec::new();
    export::write_analysis_csv(&mut analysis_csv, &rows).unwrap();
    let analysis_lines = String::from_utf8(analysis_csv).unwrap().lines().count();
    assert_eq!(analysis_lines, rows.len() + 1);
}

#[test]
fn join_rejects_dangling_donor_id() {
    let mut dataset = run(20, 13);
    dataset.donations[0].donor_id = "DNR9999".into();

    let err = report::join(&dataset.donors, &dataset.donations).unwrap_err();
    match err {
        DatasetError::DataIntegrity(msg) => {
            assert!(msg.contains("DNR9999"), "message should name the id: {msg}")
        }
        other => panic!("expected DataIntegrity, got {other:?}"),
    }
}

#[test]
fn join_rejects_donation_before_first_donation_date() {
    let mut dataset = run(20, 13);
    dataset.donations[0].donation_date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();

    let err = report::join(&dataset.donors, &dataset.donations).unwrap_err();
    assert!(
        matches!(err, DatasetError::DataIntegrity(_)),
        "expected DataIntegrity, got {err:?}"
    );
}
