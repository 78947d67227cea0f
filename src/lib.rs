//! Batch computation and validation of per-vertex surface area metrics for brain surface meshes.
//!
//! The surface areas are computed by the Connectome Workbench command line tool `wb_command`. This crate
//! finds the input meshes (GIFTI `*.surf.gii` files following the `mid`/`midthickness` naming convention),
//! runs the tool for each of them, and checks the produced `*.func.gii` metric files by inspecting the
//! tool's file information output.

pub mod config;
pub mod discover;
pub mod error;
pub mod inspect;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod traits;
pub mod util;
pub mod validate;
pub mod workbench;

pub use config::{Config, DiscoveryConfig, ExpectedFields, InspectStrategy, WorkbenchConfig};
pub use discover::discover_surfaces;
pub use error::{Result, VertexAreasError};
pub use inspect::{inspector_for, StructuredInspector, TextInspector};
pub use pipeline::{FileOutcome, Pipeline, RunSummary};
pub use report::MetricSummary;
pub use traits::MetricInspector;
pub use util::metric_path_for;
pub use validate::{validate_metric, Check, Field, ValidationOutcome};
pub use workbench::{InfoQuery, Reduction, WbCommand, Workbench};
