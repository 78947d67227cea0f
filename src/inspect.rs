//! Strategies for learning what a metric file contains, by asking `wb_command`.

use tracing::{debug, warn};

use std::path::Path;

use crate::config::InspectStrategy;
use crate::error::{Result, VertexAreasError};
use crate::report::{parse_first_value, parse_map_names, MetricSummary};
use crate::traits::MetricInspector;
use crate::workbench::{InfoQuery, Reduction, Workbench};


/// Scrapes the full human readable `-file-information` report.
#[derive(Debug, Clone)]
pub struct TextInspector<W> {
    workbench: W,
}

impl<W: Workbench> TextInspector<W> {
    pub fn new(workbench: W) -> TextInspector<W> {
        TextInspector { workbench }
    }
}

impl<W: Workbench> MetricInspector for TextInspector<W> {
    fn inspect(&self, metric: &Path) -> Result<MetricSummary> {
        let text = self.workbench.file_information(metric, InfoQuery::Full)?;
        debug!(metric = %metric.display(), "captured file information report");
        Ok(MetricSummary::from_report(&text))
    }
}


/// Uses the narrow, single-purpose queries of the tool where they exist. Only the header fields (type,
/// surface mapping, vertex count) still come from scraping, and from the short `-no-map-info` report.
///
/// If any of the structured queries fails, the full text report is scraped instead.
#[derive(Debug, Clone)]
pub struct StructuredInspector<W> {
    workbench: W,
}

impl<W: Workbench> StructuredInspector<W> {
    pub fn new(workbench: W) -> StructuredInspector<W> {
        StructuredInspector { workbench }
    }

    fn query(&self, metric: &Path) -> Result<MetricSummary> {
        let header = self.workbench.file_information(metric, InfoQuery::NoMapInfo)?;
        let mut summary = MetricSummary::from_report(&header);

        let num_maps = self.workbench.file_information(metric, InfoQuery::OnlyNumberOfMaps)?;
        summary.number_of_maps = Some(
            parse_first_value(&num_maps)
                .ok_or_else(|| VertexAreasError::MissingToolOutput(String::from("-file-information -only-number-of-maps")))?,
        );

        let names = self.workbench.file_information(metric, InfoQuery::OnlyMapNames)?;
        summary.map_names = parse_map_names(&names);

        summary.minimum = self.reduce(metric, Reduction::Min)?;
        summary.maximum = self.reduce(metric, Reduction::Max)?;
        summary.mean = self.reduce(metric, Reduction::Mean)?;
        Ok(summary)
    }

    /// The reduction of the first map.
    fn reduce(&self, metric: &Path, reduction: Reduction) -> Result<Option<String>> {
        let out = self.workbench.metric_stats(metric, reduction)?;
        Ok(parse_first_value(&out))
    }
}

impl<W: Workbench> MetricInspector for StructuredInspector<W> {
    fn inspect(&self, metric: &Path) -> Result<MetricSummary> {
        match self.query(metric) {
            Ok(summary) => Ok(summary),
            Err(err) => {
                warn!(metric = %metric.display(), error = %err, "structured query failed, falling back to the text report");
                let text = self.workbench.file_information(metric, InfoQuery::Full)?;
                Ok(MetricSummary::from_report(&text))
            }
        }
    }
}


/// Build the inspector for the configured strategy.
pub fn inspector_for<'a, W: Workbench + 'a>(strategy: InspectStrategy, workbench: W) -> Box<dyn MetricInspector + 'a> {
    match strategy {
        InspectStrategy::Text => Box::new(TextInspector::new(workbench)),
        InspectStrategy::Structured => Box::new(StructuredInspector::new(workbench)),
    }
}
