//! Discovery of input surface files below a directory.

use glob::{MatchOptions, Pattern};
use tracing::{debug, info, warn};

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::DiscoveryConfig;
use crate::error::{Result, VertexAreasError};
use crate::util::{file_name_contains, file_name_ends_with};


/// Find all surface files below `root` matching any of the configured glob patterns.
///
/// A file matched by several patterns is reported once. Only files whose name ends with the input suffix
/// and contains the marker are kept. Hidden files and directories are skipped unless a pattern names the leading
/// dot literally. The returned paths are sorted, but callers should not rely on any order.
pub fn discover_surfaces<P: AsRef<Path>>(root: P, cfg: &DiscoveryConfig) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let root_str = root
        .to_str()
        .ok_or_else(|| VertexAreasError::NonUtf8Path(root.to_path_buf()))?;
    let escaped_root = Pattern::escape(root_str);
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut found: BTreeSet<PathBuf> = BTreeSet::new();
    for pattern in &cfg.patterns {
        let full_pattern = Path::new(&escaped_root).join(pattern);
        let full_pattern = full_pattern
            .to_str()
            .ok_or_else(|| VertexAreasError::NonUtf8Path(full_pattern.clone()))?;
        debug!(pattern = full_pattern, "expanding glob pattern");

        for entry in glob::glob_with(full_pattern, options)? {
            match entry {
                Ok(path) => {
                    if path.is_file()
                        && file_name_ends_with(&path, &cfg.input_suffix)
                        && file_name_contains(&path, &cfg.marker)
                    {
                        found.insert(path);
                    }
                }
                Err(err) => warn!(path = %err.path().display(), error = %err, "skipping unreadable entry"),
            }
        }
    }

    info!(root = %root.display(), count = found.len(), "discovered input surfaces");
    Ok(found.into_iter().collect())
}
