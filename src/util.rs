//! Utility functions used in all other vertexareas modules.

use std::path::{Path, PathBuf};

use crate::error::{Result, VertexAreasError};

/// Check whether the file name (not the directory part) of the path ends with the given suffix.
pub fn file_name_ends_with<P>(path: P, suffix: &str) -> bool
where
    P: AsRef<Path>,
{
    path.as_ref()
        .file_name()
        .map(|a| a.to_string_lossy().ends_with(suffix))
        .unwrap_or(false)
}

/// Check whether the file name (not the directory part) of the path contains the given marker.
pub fn file_name_contains<P>(path: P, marker: &str) -> bool
where
    P: AsRef<Path>,
{
    path.as_ref()
        .file_name()
        .map(|a| a.to_string_lossy().contains(marker))
        .unwrap_or(false)
}

/// Derive the metric file path for a surface file.
///
/// The trailing `input_suffix` of the file name is replaced by `output_suffix`, the file stays in the
/// same directory. So `sub-01/lh.midthickness.surf.gii` becomes `sub-01/lh.midthickness.func.gii`.
pub fn metric_path_for<P>(surface: P, input_suffix: &str, output_suffix: &str) -> Result<PathBuf>
where
    P: AsRef<Path>,
{
    let surface = surface.as_ref();
    let stem = surface
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(input_suffix))
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| {
            VertexAreasError::UnexpectedSurfaceName(surface.to_path_buf(), input_suffix.to_string())
        })?;

    Ok(surface.with_file_name(format!("{}{}", stem, output_suffix)))
}
