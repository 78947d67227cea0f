//! The batch run: discover surfaces, compute vertex areas for each, validate the results.

use serde::Serialize;
use tracing::{error, info};

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::discover::discover_surfaces;
use crate::error::{Result, VertexAreasError};
use crate::traits::MetricInspector;
use crate::util::metric_path_for;
use crate::validate::{validate_metric, ValidationOutcome};
use crate::workbench::Workbench;


/// What happened to one input surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileOutcome {
    pub surface: PathBuf,
    /// `None` if no metric path could be derived from the surface name.
    pub metric: Option<PathBuf>,
    /// Set if naming or computing the metric failed. Only recorded when the run keeps going after failures.
    pub error: Option<String>,
    pub validation: Option<ValidationOutcome>,
}

impl FileOutcome {
    pub fn is_passed(&self) -> bool {
        self.error.is_none() && self.validation.as_ref().map_or(false, |v| v.is_passed())
    }
}


/// The outcomes of a whole run, in processing order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RunSummary {
    pub files: Vec<FileOutcome>,
}

impl RunSummary {
    pub fn num_passed(&self) -> usize {
        self.files.iter().filter(|f| f.is_passed()).count()
    }

    pub fn all_passed(&self) -> bool {
        self.files.iter().all(|f| f.is_passed())
    }
}


/// A configured batch run. Progress and diagnostics are written to the given output as the run proceeds.
pub struct Pipeline<'a, W, I: ?Sized> {
    config: &'a Config,
    workbench: W,
    inspector: &'a I,
}

impl<'a, W, I> Pipeline<'a, W, I>
where
    W: Workbench,
    I: MetricInspector + ?Sized,
{
    pub fn new(config: &'a Config, workbench: W, inspector: &'a I) -> Pipeline<'a, W, I> {
        Pipeline { config, workbench, inspector }
    }

    /// Find the input surfaces. No matching surface at all is an error.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let surfaces = discover_surfaces(&self.config.input_dir, &self.config.discovery)?;
        if surfaces.is_empty() {
            return Err(VertexAreasError::NoInputFiles);
        }
        Ok(surfaces)
    }

    /// Discover, then compute and validate every surface in turn.
    ///
    /// A failing computation ends the run with an error, unless the config asks to keep going. Validation
    /// failures never end the run, they are part of the summary.
    pub fn run(&self, out: &mut dyn Write) -> Result<RunSummary> {
        let surfaces = self.discover()?;

        writeln!(out, "Found {} input file(s):", surfaces.len())?;
        for surface in &surfaces {
            writeln!(out, "  - {}", surface.display())?;
        }

        let mut summary = RunSummary::default();
        for surface in &surfaces {
            summary.files.push(self.process(surface, out)?);
        }

        info!(total = summary.files.len(), passed = summary.num_passed(), "run finished");
        Ok(summary)
    }

    /// Compute the vertex areas of one surface and validate the produced metric file.
    ///
    /// With `keep_going` set, a surface that cannot be named or computed is recorded as failed instead of
    /// ending the run.
    pub fn process(&self, surface: &Path, out: &mut dyn Write) -> Result<FileOutcome> {
        let discovery = &self.config.discovery;

        writeln!(out)?;
        writeln!(out, "Processing: {}", surface.file_name().map(|n| n.to_string_lossy()).unwrap_or_default())?;
        writeln!(out, "Input: {}", surface.display())?;

        let metric = match metric_path_for(surface, &discovery.input_suffix, &discovery.output_suffix) {
            Ok(metric) => metric,
            Err(err) => return self.skip(surface, None, err, out),
        };
        writeln!(out, "Output: {}", metric.display())?;

        if let Err(err) = self.workbench.surface_vertex_areas(surface, &metric) {
            return self.skip(surface, Some(metric), err, out);
        }
        writeln!(out, "Surface area metric saved to {}", metric.display())?;

        let validation = validate_metric(&metric, self.inspector, &self.config.expected);
        for line in validation.report_lines() {
            writeln!(out, "{}", line)?;
        }
        if validation.is_passed() {
            writeln!(out, "✓ Complete output file validation successful")?;
        } else {
            writeln!(out, "✗ Output file validation failed")?;
        }

        Ok(FileOutcome {
            surface: surface.to_path_buf(),
            metric: Some(metric),
            error: None,
            validation: Some(validation),
        })
    }

    /// Record a failed surface and continue, or end the run with `err`.
    fn skip(&self, surface: &Path, metric: Option<PathBuf>, err: VertexAreasError, out: &mut dyn Write) -> Result<FileOutcome> {
        if !self.config.keep_going {
            return Err(err);
        }
        error!(surface = %surface.display(), error = %err, "surface failed, continuing");
        writeln!(out, "✗ Processing failed: {}", err)?;
        Ok(FileOutcome {
            surface: surface.to_path_buf(),
            metric,
            error: Some(err.to_string()),
            validation: None,
        })
    }
}
