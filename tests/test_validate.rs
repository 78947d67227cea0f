mod common;

use std::fs;

use tempfile::tempdir;

use vertexareas::{validate_metric, ExpectedFields, Field, TextInspector, ValidationOutcome};

use common::{FakeWorkbench, VERTEX_AREAS_REPORT};

#[test]
fn a_good_metric_file_validates() {
    let dir = tempdir().unwrap();
    let metric = dir.path().join("lh.midthickness.func.gii");
    fs::write(&metric, b"<GIFTI/>").unwrap();

    let inspector = TextInspector::new(FakeWorkbench::new(VERTEX_AREAS_REPORT));
    let outcome = validate_metric(&metric, &inspector, &ExpectedFields::default());

    assert!(outcome.is_passed(), "{:?}", outcome.report_lines());
    match outcome {
        ValidationOutcome::Checked { size, checks } => {
            assert_eq!(8, size);
            assert_eq!(8, checks.len());
        }
        other => panic!("expected a checked outcome, got {:?}", other),
    }
}

#[test]
fn a_missing_file_is_reported_as_such() {
    let dir = tempdir().unwrap();
    let inspector = TextInspector::new(FakeWorkbench::new(VERTEX_AREAS_REPORT));
    let outcome = validate_metric(&dir.path().join("nope.func.gii"), &inspector, &ExpectedFields::default());
    assert_eq!(ValidationOutcome::FileMissing, outcome);
}

#[test]
fn an_empty_file_is_reported_as_such() {
    let dir = tempdir().unwrap();
    let metric = dir.path().join("lh.mid.func.gii");
    fs::write(&metric, b"").unwrap();

    let inspector = TextInspector::new(FakeWorkbench::new(VERTEX_AREAS_REPORT));
    let outcome = validate_metric(&metric, &inspector, &ExpectedFields::default());
    assert_eq!(ValidationOutcome::EmptyFile, outcome);
    assert!(!outcome.is_passed());
}

#[test]
fn a_failing_tool_is_a_tool_failure_not_an_error() {
    let dir = tempdir().unwrap();
    let metric = dir.path().join("lh.mid.func.gii");
    fs::write(&metric, b"x").unwrap();

    let mut wb = FakeWorkbench::new(VERTEX_AREAS_REPORT);
    wb.fail_info = true;
    let outcome = validate_metric(&metric, &TextInspector::new(wb), &ExpectedFields::default());

    assert!(matches!(outcome, ValidationOutcome::ToolFailure { size: 1, .. }));
    assert!(!outcome.is_passed());
}

#[test]
fn each_missing_field_is_listed_exactly() {
    let dir = tempdir().unwrap();
    let metric = dir.path().join("lh.mid.func.gii");
    fs::write(&metric, b"x").unwrap();

    let cases = [
        ("Type:                     Metric\n", Field::Type),
        ("Maps to Surface:          true\n", Field::MapsToSurface),
        ("Number of Maps:           1\n", Field::NumberOfMaps),
        ("Number of Vertices:       32492\n", Field::NumberOfVertices),
        ("   vertex areas\n", Field::MapName),
    ];

    for (line, field) in cases.iter() {
        let report = VERTEX_AREAS_REPORT.replace(line, "\n");
        let inspector = TextInspector::new(FakeWorkbench::new(&report));
        let outcome = validate_metric(&metric, &inspector, &ExpectedFields::default());

        assert!(!outcome.is_passed());
        assert_eq!(vec![*field], outcome.failed_fields(), "removed {:?}", line);
    }
}

#[test]
fn a_missing_map_table_fails_all_statistics() {
    let dir = tempdir().unwrap();
    let metric = dir.path().join("lh.mid.func.gii");
    fs::write(&metric, b"x").unwrap();

    let report = VERTEX_AREAS_REPORT.split("\nMap   Minimum").next().unwrap().to_string();
    let inspector = TextInspector::new(FakeWorkbench::new(&report));
    let outcome = validate_metric(&metric, &inspector, &ExpectedFields::default());

    assert_eq!(vec![Field::MapName, Field::Minimum, Field::Maximum, Field::Mean], outcome.failed_fields());
}

#[test]
fn other_expected_values_can_be_configured() {
    let dir = tempdir().unwrap();
    let metric = dir.path().join("lh.mid.func.gii");
    fs::write(&metric, b"x").unwrap();

    let expected = ExpectedFields { map_name: String::from("areas"), ..ExpectedFields::default() };
    let report = VERTEX_AREAS_REPORT.replace("vertex areas", "areas");
    let outcome = validate_metric(&metric, &TextInspector::new(FakeWorkbench::new(&report)), &expected);

    assert!(outcome.is_passed());
}
