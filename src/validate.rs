//! Validation of a produced vertex area metric file against the expected field values.

use serde::Serialize;

use std::fmt;
use std::fs;
use std::path::Path;

use crate::config::ExpectedFields;
use crate::report::MetricSummary;
use crate::traits::MetricInspector;


/// The fields checked for every metric file, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Field {
    Type,
    MapsToSurface,
    NumberOfMaps,
    MapName,
    NumberOfVertices,
    Minimum,
    Maximum,
    Mean,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Type,
        Field::MapsToSurface,
        Field::NumberOfMaps,
        Field::MapName,
        Field::NumberOfVertices,
        Field::Minimum,
        Field::Maximum,
        Field::Mean,
    ];

    /// The label used for this field in the tool's report.
    pub const fn label(self) -> &'static str {
        match self {
            Field::Type => "Type",
            Field::MapsToSurface => "Maps to Surface",
            Field::NumberOfMaps => "Number of Maps",
            Field::MapName => "Map Name",
            Field::NumberOfVertices => "Number of Vertices",
            Field::Minimum => "Minimum",
            Field::Maximum => "Maximum",
            Field::Mean => "Mean",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}


/// The result of checking a single field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Check {
    pub field: Field,
    pub passed: bool,
    pub message: String,
}

impl Check {
    fn pass(field: Field, message: String) -> Check {
        Check { field, passed: true, message }
    }

    fn fail(field: Field, message: String) -> Check {
        Check { field, passed: false, message }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mark = if self.passed { '✓' } else { '✗' };
        write!(f, "{} {}: {}", mark, self.field, self.message)
    }
}


/// How validating one metric file ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ValidationOutcome {
    FileMissing,
    EmptyFile,
    /// The file could not be inspected.
    ToolFailure { size: u64, message: String },
    /// All checks ran. Some of them may have failed.
    Checked { size: u64, checks: Vec<Check> },
}

impl ValidationOutcome {
    pub fn is_passed(&self) -> bool {
        match self {
            ValidationOutcome::Checked { checks, .. } => checks.iter().all(|c| c.passed),
            _ => false,
        }
    }

    /// The fields whose check failed. Empty unless all checks ran.
    pub fn failed_fields(&self) -> Vec<Field> {
        match self {
            ValidationOutcome::Checked { checks, .. } => {
                checks.iter().filter(|c| !c.passed).map(|c| c.field).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Human readable diagnostics, one line per check.
    pub fn report_lines(&self) -> Vec<String> {
        match self {
            ValidationOutcome::FileMissing => vec![String::from("✗ Output file does not exist")],
            ValidationOutcome::EmptyFile => vec![String::from("✗ Output file is empty")],
            ValidationOutcome::ToolFailure { size, message } => vec![
                format!("✓ File exists with size: {} bytes", size),
                format!("✗ Failed to get file information: {}", message),
            ],
            ValidationOutcome::Checked { size, checks } => {
                let mut lines = vec![format!("✓ File exists with size: {} bytes", size)];
                lines.extend(checks.iter().map(|c| c.to_string()));
                let failed = self.failed_fields();
                if failed.is_empty() {
                    lines.push(String::from("✓ All field validations passed"));
                } else {
                    let names: Vec<&str> = failed.iter().map(|f| f.label()).collect();
                    lines.push(format!("✗ Failed validations: {}", names.join(", ")));
                }
                lines
            }
        }
    }
}


/// Validate the metric file at `path`. This never fails: every problem is part of the returned outcome.
pub fn validate_metric<I>(path: &Path, inspector: &I, expected: &ExpectedFields) -> ValidationOutcome
where
    I: MetricInspector + ?Sized,
{
    let size = match fs::metadata(path) {
        Ok(meta) if meta.is_file() => meta.len(),
        _ => return ValidationOutcome::FileMissing,
    };
    if size == 0 {
        return ValidationOutcome::EmptyFile;
    }

    match inspector.inspect(path) {
        Ok(summary) => ValidationOutcome::Checked { size, checks: check_summary(&summary, expected) },
        Err(err) => ValidationOutcome::ToolFailure { size, message: err.to_string() },
    }
}


/// Run all field checks on an inspected summary. Every check runs, regardless of earlier failures.
pub fn check_summary(summary: &MetricSummary, expected: &ExpectedFields) -> Vec<Check> {
    Field::ALL
        .iter()
        .map(|&field| match field {
            Field::Type => check_equal(field, summary.data_type.as_deref(), &expected.data_type),
            Field::MapsToSurface => check_equal(field, summary.maps_to_surface.as_deref(), &expected.maps_to_surface),
            Field::NumberOfMaps => check_equal(field, summary.number_of_maps.as_deref(), &expected.number_of_maps),
            Field::MapName => check_map_name(&summary.map_names, &expected.map_name),
            Field::NumberOfVertices => check_positive(field, summary.number_of_vertices.as_deref()),
            Field::Minimum => check_positive(field, summary.minimum.as_deref()),
            Field::Maximum => check_positive(field, summary.maximum.as_deref()),
            Field::Mean => check_positive(field, summary.mean.as_deref()),
        })
        .collect()
}

fn check_equal(field: Field, found: Option<&str>, expected: &str) -> Check {
    match found {
        Some(value) if value.trim().eq_ignore_ascii_case(expected.trim()) => Check::pass(field, value.to_string()),
        Some(value) => Check::fail(field, format!("Expected '{}', found '{}'", expected, value)),
        None => Check::fail(field, format!("Expected '{}' not found", expected)),
    }
}

fn check_map_name(names: &[String], expected: &str) -> Check {
    let wanted = expected.trim().to_lowercase();
    if names.iter().any(|n| n.trim().to_lowercase() == wanted) {
        Check::pass(Field::MapName, format!("Found '{}'", expected))
    } else {
        Check::fail(Field::MapName, format!("'{}' not found", expected))
    }
}

fn check_positive(field: Field, found: Option<&str>) -> Check {
    let value = match found {
        Some(v) => v,
        None => return Check::fail(field, String::from("Not found in output")),
    };
    match value.parse::<f64>() {
        Ok(number) if number > 0.0 => Check::pass(field, format!("{} (valid positive value)", value)),
        Ok(_) => Check::fail(field, format!("{} (should be positive)", value)),
        Err(_) => Check::fail(field, format!("{} (not a valid number)", value)),
    }
}
