// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dataset loading from real files: soft failure and normalization.

use shala::{classify_management, Dataset, SourceFormat};
use std::fs;
use tempfile::tempdir;

const SAMPLE_CSV: &str = "\
Unnamed: 0, school_name ,district,block,village,state_mgmt,school_category,school_type,school_status,udise_code
0,Govt High School Hebbal ,Mysuru,Mysuru North,Hebbal,Department of Education,Secondary,Co-educational,Operational,29260100101
1,St Mary's Convent,Bengaluru Urban,South,Jayanagar,Private Unaided,Primary,Co-educational,Operational,29280200202
2,Aided Basic School,Mysuru,Mysuru South,Varuna,Pvt Aided,Primary,Co-educational,Operational,29260300303
";

#[test]
fn load_csv_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schools.csv");
    fs::write(&path, SAMPLE_CSV).unwrap();

    let dataset = Dataset::load(&path);
    assert_eq!(dataset.len(), 3);

    let first = &dataset.records()[0];
    assert_eq!(first.name, "Govt High School Hebbal");
    assert_eq!(first.district, "Mysuru");
    assert_eq!(first.block, "Mysuru North");
    assert_eq!(first.village, "Hebbal");
    assert_eq!(first.udise_code, "29260100101");

    assert_eq!(dataset.districts(), vec!["Bengaluru Urban", "Mysuru"]);
}

#[test]
fn missing_file_loads_empty_without_error() {
    let dir = tempdir().unwrap();
    let dataset = Dataset::load(&dir.path().join("does-not-exist.xlsx"));
    assert!(dataset.is_empty());
}

#[test]
fn corrupt_workbook_loads_empty_without_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schools.xlsx");
    fs::write(&path, b"this is not a zip archive").unwrap();
    assert!(Dataset::load(&path).is_empty());
}

#[test]
fn byte_stream_matches_file_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schools.csv");
    fs::write(&path, SAMPLE_CSV).unwrap();

    let from_file = Dataset::load(&path);
    let from_bytes = Dataset::from_bytes(SAMPLE_CSV.as_bytes(), SourceFormat::Csv);
    assert_eq!(from_file.records(), from_bytes.records());
}

#[test]
fn headerless_garbage_csv_loads_rows_not_panics() {
    // A file with no recognizable columns still loads; every field is
    // empty, so records exist but nothing is searchable by name.
    let dataset = Dataset::from_bytes(b"a,b\n1,2\n", SourceFormat::Csv);
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].name, "");
    assert!(dataset.districts().is_empty());
}

#[test]
fn management_labels_classify_from_loaded_data() {
    let dataset = Dataset::from_bytes(SAMPLE_CSV.as_bytes(), SourceFormat::Csv);
    let labels: Vec<String> = dataset
        .records()
        .iter()
        .map(|r| classify_management(&r.management))
        .collect();
    assert_eq!(labels, vec!["Government", "Private Unaided", "Private Aided"]);
}
