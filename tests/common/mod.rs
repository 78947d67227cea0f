#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use vertexareas::{InfoQuery, Reduction, Result, VertexAreasError, Workbench};

pub const VERTEX_AREAS_REPORT: &str = "\
Name:                     lh.midthickness.func.gii
Type:                     Metric
Structure:                CortexLeft
Data Size:                130.02 Kilobytes
Maps to Surface:          true
Maps to Volume:           false
Maps with LabelTable:     false
Maps with Palette:        true
All Map Palettes Equal:   true
Map Interval Units:       NIFTI_UNITS_UNKNOWN
Number of Maps:           1
Number of Vertices:       32492

Map   Minimum   Maximum    Mean   Sample Dev   % Positive   % Negative   Inf/NaN   Map Name
  1     0.017     2.497   0.908        0.353      100.000        0.000         0   vertex areas
";

/// Stands in for `wb_command`: writes a small metric file and answers file information queries with a fixed report.
pub struct FakeWorkbench {
    pub report: String,
    pub fail_compute_for: Option<String>,
    pub fail_info: bool,
    pub computed: RefCell<Vec<PathBuf>>,
}

impl FakeWorkbench {
    pub fn new(report: &str) -> FakeWorkbench {
        FakeWorkbench {
            report: report.to_string(),
            fail_compute_for: None,
            fail_info: false,
            computed: RefCell::new(Vec::new()),
        }
    }
}

impl Workbench for FakeWorkbench {
    fn surface_vertex_areas(&self, surface: &Path, metric: &Path) -> Result<()> {
        let name = surface.file_name().unwrap().to_string_lossy().to_string();
        if self.fail_compute_for.as_deref() == Some(name.as_str()) {
            return Err(VertexAreasError::ToolFailed(
                String::from("fake_wb_command"),
                String::from("-surface-vertex-areas"),
                Some(255),
                String::from("ERROR: surface file is corrupt"),
            ));
        }
        fs::write(metric, b"<GIFTI/>")?;
        self.computed.borrow_mut().push(surface.to_path_buf());
        Ok(())
    }

    fn file_information(&self, _file: &Path, query: InfoQuery) -> Result<String> {
        if self.fail_info {
            return Err(VertexAreasError::ToolFailed(String::from("fake_wb_command"), String::from("-file-information"), Some(1), String::new()));
        }
        assert_eq!(InfoQuery::Full, query);
        Ok(self.report.clone())
    }

    fn metric_stats(&self, _metric: &Path, _reduction: Reduction) -> Result<String> {
        Err(VertexAreasError::MissingToolOutput(String::from("-metric-stats")))
    }
}

/// Create an empty file, including its parent directories.
pub fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"surf").unwrap();
}
