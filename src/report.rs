//! Parsing of the textual report printed by `wb_command -file-information`.
//!
//! A report for a single-map metric file looks like this:
//!
//! ```text
//! Name:                     lh.midthickness.func.gii
//! Type:                     Metric
//! Structure:                CortexLeft
//! Maps to Surface:          true
//! Maps to Volume:           false
//! Number of Maps:           1
//! Number of Vertices:       32492
//!
//! Map   Minimum   Maximum    Mean   Sample Dev   % Positive   % Negative   Inf/NaN   Map Name
//!   1     0.017     2.497   0.908        0.353      100.000        0.000         0   vertex areas
//! ```
//!
//! The report is free-form text meant for humans, so all values are kept as the raw tokens found.

use regex::Regex;
use serde::Serialize;

use std::sync::OnceLock;


/// What was learned about a metric file. Every field is the raw token, `None` if it was not found.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MetricSummary {
    pub data_type: Option<String>,
    pub maps_to_surface: Option<String>,
    pub number_of_maps: Option<String>,
    pub number_of_vertices: Option<String>,
    pub map_names: Vec<String>,
    /// Statistics of the first map.
    pub minimum: Option<String>,
    pub maximum: Option<String>,
    pub mean: Option<String>,
}


struct ReportPatterns {
    data_type: Regex,
    maps_to_surface: Regex,
    number_of_maps: Regex,
    number_of_vertices: Regex,
    table_header: Regex,
    first_map_stats: Regex,
    map_row: Regex,
}

fn patterns() -> &'static ReportPatterns {
    static PATTERNS: OnceLock<ReportPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| ReportPatterns {
        data_type: header_field("Type"),
        maps_to_surface: header_field("Maps to Surface"),
        number_of_maps: header_field("Number of Maps"),
        number_of_vertices: header_field("Number of Vertices"),
        table_header: Regex::new(r"(?miR)^\s*Map\s+Minimum\s+Maximum\s+Mean\b.*$").unwrap(),
        first_map_stats: Regex::new(r"(?mR)^\s*1\s+([\d.eE+-]+)\s+([\d.eE+-]+)\s+([\d.eE+-]+)").unwrap(),
        // Map, Minimum, Maximum, Mean, Sample Dev, % Positive, % Negative, Inf/NaN, Map Name
        map_row: Regex::new(r"(?mR)^\s*\d+(?:\s+\S+){7}\s+(\S.*?)\s*$").unwrap(),
    })
}

fn header_field(name: &str) -> Regex {
    Regex::new(&format!(r"(?miR)^\s*{}:[ \t]*(\S[^\r\n]*?)[ \t]*$", regex::escape(name))).unwrap()
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text).map(|c| c[1].to_string())
}


impl MetricSummary {

    /// Parse the text of a full `-file-information` report. Fields that cannot be found are left empty, this
    /// never fails. Both `\n` and `\r\n` line endings are accepted.
    pub fn from_report(text: &str) -> MetricSummary {
        let p = patterns();

        let mut summary = MetricSummary {
            data_type: capture(&p.data_type, text),
            maps_to_surface: capture(&p.maps_to_surface, text),
            number_of_maps: capture(&p.number_of_maps, text),
            number_of_vertices: capture(&p.number_of_vertices, text),
            ..MetricSummary::default()
        };

        // Only the lines below the table header are map rows. Older reports without the header are searched whole.
        let table = match p.table_header.find(text) {
            Some(m) => &text[m.end()..],
            None => text,
        };

        if let Some(c) = p.first_map_stats.captures(table) {
            summary.minimum = Some(c[1].to_string());
            summary.maximum = Some(c[2].to_string());
            summary.mean = Some(c[3].to_string());
        }

        summary.map_names = p
            .map_row
            .captures_iter(table)
            .map(|c| c[1].to_string())
            .collect();

        summary
    }
}


/// Parse the output of `-file-information -only-map-names`, one name per line.
pub fn parse_map_names(text: &str) -> Vec<String> {
    text.lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

/// Parse single-value outputs like `-only-number-of-maps` or `-metric-stats -reduce`: the first non-empty line.
pub fn parse_first_value(text: &str) -> Option<String> {
    text.lines()
        .map(|l| l.trim())
        .find(|l| !l.is_empty())
        .map(String::from)
}
