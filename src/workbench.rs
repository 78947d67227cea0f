//! Invocation of the Connectome Workbench command line tool, `wb_command`.

use tracing::debug;

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use crate::error::{Result, VertexAreasError};


/// The variants of `wb_command -file-information` used by the inspectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoQuery {
    /// The full human readable report, including the map table.
    Full,
    /// Only the header fields, without per-map statistics.
    NoMapInfo,
    OnlyNumberOfMaps,
    OnlyMapNames,
}

impl InfoQuery {
    pub const fn flag(self) -> Option<&'static str> {
        match self {
            Self::Full => None,
            Self::NoMapInfo => Some("-no-map-info"),
            Self::OnlyNumberOfMaps => Some("-only-number-of-maps"),
            Self::OnlyMapNames => Some("-only-map-names"),
        }
    }
}


/// Reductions supported by `wb_command -metric-stats -reduce`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Min,
    Max,
    Mean,
}

impl Reduction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Mean => "MEAN",
        }
    }
}


/// The operations of the external tool this crate relies on.
pub trait Workbench {
    /// Compute the area of each vertex of `surface`, writing a metric file to `metric`.
    fn surface_vertex_areas(&self, surface: &Path, metric: &Path) -> Result<()>;

    /// Return the stdout of a file-information query.
    fn file_information(&self, file: &Path, query: InfoQuery) -> Result<String>;

    /// Return the stdout of a metric-stats reduction, one line per map.
    fn metric_stats(&self, metric: &Path, reduction: Reduction) -> Result<String>;
}

impl<W: Workbench + ?Sized> Workbench for &W {
    fn surface_vertex_areas(&self, surface: &Path, metric: &Path) -> Result<()> {
        (**self).surface_vertex_areas(surface, metric)
    }

    fn file_information(&self, file: &Path, query: InfoQuery) -> Result<String> {
        (**self).file_information(file, query)
    }

    fn metric_stats(&self, metric: &Path, reduction: Reduction) -> Result<String> {
        (**self).metric_stats(metric, reduction)
    }
}


/// Captured output of a finished tool process.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ToolOutput {
    success: bool,
    status: Option<i32>,
    stdout: String,
    stderr: String,
}


/// Runs a `wb_command` binary found by path or on `PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WbCommand {
    program: String,
}

impl WbCommand {
    pub fn new<S: Into<String>>(program: S) -> WbCommand {
        WbCommand { program: program.into() }
    }

    /// Run the tool with the given arguments and capture its output. Fails only if the process cannot be started.
    fn run(&self, args: &[&OsStr]) -> Result<ToolOutput> {
        debug!(program = %self.program, ?args, "running wb_command");
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|err| VertexAreasError::ToolSpawn(self.program.clone(), err))?;

        Ok(ToolOutput {
            success: output.status.success(),
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Like `run`, but a non-zero exit status is an error.
    fn run_checked(&self, operation: &str, args: &[&OsStr]) -> Result<String> {
        let output = self.run(args)?;
        if !output.success {
            return Err(VertexAreasError::ToolFailed(
                self.program.clone(),
                operation.to_string(),
                output.status,
                output.stderr,
            ));
        }
        Ok(output.stdout)
    }
}

impl Default for WbCommand {
    fn default() -> WbCommand {
        WbCommand::new(crate::config::DEFAULT_WB_COMMAND)
    }
}

impl Workbench for WbCommand {
    fn surface_vertex_areas(&self, surface: &Path, metric: &Path) -> Result<()> {
        const OP: &str = "-surface-vertex-areas";
        self.run_checked(OP, &[OsStr::new(OP), surface.as_os_str(), metric.as_os_str()])?;
        Ok(())
    }

    fn file_information(&self, file: &Path, query: InfoQuery) -> Result<String> {
        const OP: &str = "-file-information";
        let mut args = vec![OsStr::new(OP), file.as_os_str()];
        if let Some(flag) = query.flag() {
            args.push(OsStr::new(flag));
        }
        self.run_checked(OP, &args)
    }

    fn metric_stats(&self, metric: &Path, reduction: Reduction) -> Result<String> {
        const OP: &str = "-metric-stats";
        self.run_checked(OP, &[OsStr::new(OP), metric.as_os_str(), OsStr::new("-reduce"), OsStr::new(reduction.as_str())])
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn a_missing_program_is_a_spawn_error() {
        let wb = WbCommand::new("/nonexistent/bin/wb_command");
        let res = wb.file_information(Path::new("lh.func.gii"), InfoQuery::Full);
        assert!(matches!(res, Err(VertexAreasError::ToolSpawn(_, _))));
    }

    #[cfg(unix)]
    #[test]
    fn a_failing_program_is_a_tool_failure() {
        let wb = WbCommand::new("false");
        let res = wb.metric_stats(Path::new("lh.func.gii"), Reduction::Mean);
        match res {
            Err(err @ VertexAreasError::ToolFailed(..)) => {
                assert_eq!("false -metric-stats failed (exit status 1): ", err.to_string());
                if let VertexAreasError::ToolFailed(program, op, status, _) = err {
                    assert_eq!("false", program);
                    assert_eq!("-metric-stats", op);
                    assert_eq!(Some(1), status);
                }
            }
            other => panic!("expected ToolFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn stdout_is_captured_on_success() {
        let wb = WbCommand::new("echo");
        let out = wb.file_information(Path::new("lh.func.gii"), InfoQuery::OnlyMapNames).unwrap();
        assert_eq!("-file-information lh.func.gii -only-map-names\n", out);
    }

    #[test]
    fn query_flags() {
        assert_eq!(None, InfoQuery::Full.flag());
        assert_eq!(Some("-no-map-info"), InfoQuery::NoMapInfo.flag());
        assert_eq!("MEAN", Reduction::Mean.as_str());
    }
}
