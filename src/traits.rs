use std::path::Path;

use crate::error::Result;
use crate::report::MetricSummary;

/// Something that can tell what a metric file contains.
pub trait MetricInspector {
    fn inspect(&self, metric: &Path) -> Result<MetricSummary>;
}

