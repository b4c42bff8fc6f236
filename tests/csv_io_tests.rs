//! CSV loader and join formatter tests.

use std::fs;
use std::path::PathBuf;

use seqr::io::{join_sequence, Dataset, IoError};
use seqr::prelude::*;
use seqr::stats;

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("seqr-test-{}-{}", std::process::id(), name));
    fs::write(&path, contents).expect("failed to write fixture");
    path
}

const PEOPLE_CSV: &str = "\
name,city,age
ann,lisbon,34
bob,porto,19
cid,lisbon,28
dee,porto,19
eve,braga,41
";

#[test]
fn test_load_reads_headers_and_rows() {
    let path = write_fixture("people.csv", PEOPLE_CSV);
    let dataset = Dataset::load(&path).unwrap();
    assert_eq!(dataset.headers(), &["name", "city", "age"]);
    assert_eq!(dataset.len(), 5);

    let first = dataset.rows().iterate().pull().unwrap();
    assert_eq!(first.field("name"), Some("ann"));
    assert_eq!(first.field("nope"), None);

    let _ = fs::remove_file(path);
}

#[test]
fn test_numeric_column_feeds_the_statistics_engine() {
    let path = write_fixture("ages.csv", PEOPLE_CSV);
    let dataset = Dataset::load(&path).unwrap();
    let ages = dataset.column_f64("age").unwrap();

    let id = |v: &f64| *v;
    assert_eq!(stats::count(&ages), 5);
    assert_eq!(stats::sum(&ages, id), 141.0);
    assert_eq!(stats::min(&ages, id).unwrap(), 19.0);
    assert_eq!(stats::max(&ages, id).unwrap(), 41.0);
    assert_eq!(stats::mode(&ages, id).unwrap(), 19.0);
    assert_eq!(stats::median(&ages, id).unwrap(), 28.0);

    let _ = fs::remove_file(path);
}

#[test]
fn test_rows_group_by_labeled_field() {
    let path = write_fixture("cities.csv", PEOPLE_CSV);
    let dataset = Dataset::load(&path).unwrap();
    let groups = dataset
        .rows()
        .group_by(|row| row.field("city").unwrap_or("").to_string());

    assert_eq!(
        groups.sizes(),
        vec![
            ("lisbon".to_string(), 2),
            ("porto".to_string(), 2),
            ("braga".to_string(), 1),
        ]
    );
    let sums = groups.sums(|row| {
        row.field("age")
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(0.0)
    });
    assert_eq!(
        sums,
        vec![
            ("lisbon".to_string(), 62.0),
            ("porto".to_string(), 38.0),
            ("braga".to_string(), 41.0),
        ]
    );

    let _ = fs::remove_file(path);
}

#[test]
fn test_missing_column_is_an_error() {
    let path = write_fixture("missing.csv", PEOPLE_CSV);
    let dataset = Dataset::load(&path).unwrap();
    assert!(matches!(
        dataset.column_f64("salary"),
        Err(IoError::MissingColumn(_))
    ));
    let _ = fs::remove_file(path);
}

#[test]
fn test_non_numeric_cell_is_a_parse_error() {
    let path = write_fixture("badnum.csv", "x\n1\ntwo\n3\n");
    let dataset = Dataset::load(&path).unwrap();
    let err = dataset.column_f64("x").err().expect("expected parse error");
    match err {
        IoError::Parse { column, value } => {
            assert_eq!(column, "x");
            assert_eq!(value, "two");
        }
        other => panic!("expected parse error, got {other}"),
    }
    let _ = fs::remove_file(path);
}

#[test]
fn test_join_formatter_downstream_of_the_engine() {
    let seq = Sequence::from_values(vec![5, 3, 1, 4, 2]).order().take(3);
    assert_eq!(join_sequence(&seq, "[", ", ", "]"), "[1, 2, 3]");

    let distinct_cities = Sequence::from_values(vec!["porto", "lisbon", "porto"]).distinct();
    assert_eq!(join_sequence(&distinct_cities, "", " | ", ""), "porto | lisbon");
}
