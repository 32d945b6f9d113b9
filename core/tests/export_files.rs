//! On-disk export behavior.

use chrono::NaiveDate;
use donorsim_core::{
    error::DatasetError,
    export,
    pipeline::{generate_as_of, RunConfig},
    report,
};
use std::fs;
use std::path::PathBuf;

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("donorsim-{tag}-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn export_all_writes_three_tables() {
    let config = RunConfig { donors: 25, seed: 13 };
    let dataset = generate_as_of(&config, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()).unwrap();
    let rows = report::join(&dataset.donors, &dataset.donations).unwrap();

    let dir = scratch_dir("export");
    export::export_all(&dir, &dataset.donors, &dataset.donations, &rows).unwrap();

    for file in [
        export::DONORS_FILE,
        export::DONATIONS_FILE,
        export::ANALYSIS_FILE,
    ] {
        let path = dir.join(file);
        let content = fs::read_to_string(&path).expect("exported file readable");
        assert!(content.lines().count() > 1, "{file} has no data rows");
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn unwritable_destination_is_an_export_error() {
    let config = RunConfig { donors: 5, seed: 13 };
    let dataset = generate_as_of(&config, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()).unwrap();
    let rows = report::join(&dataset.donors, &dataset.donations).unwrap();

    let missing = PathBuf::from("/nonexistent-donorsim-dir/deep");
    let err = export::export_all(&missing, &dataset.donors, &dataset.donations, &rows).unwrap_err();
    match err {
        DatasetError::Export { path, .. } => {
            assert!(path.contains("conservation_donors.csv"), "error names the table: {path}")
        }
        other => panic!("expected Export error, got {other:?}"),
    }
}
