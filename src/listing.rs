//! Dataset-folder file listing.

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::constants::listing::{DEFAULT_IMAGE_EXTENSION, ID_SEPARATOR};
use crate::errors::PipelineError;
use crate::types::{FileId, PathString};

/// Parallel id/path sequences for one dataset folder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileListing {
    /// Extracted file ids, aligned with `paths`.
    pub ids: Vec<FileId>,
    /// Full file paths, aligned with `ids`.
    pub paths: Vec<PathString>,
}

impl FileListing {
    /// Number of listed files.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when no file was listed.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// List image files under `folder` using the default extension.
pub fn list_ids_and_paths(folder: impl AsRef<Path>) -> Result<FileListing, PipelineError> {
    list_ids_and_paths_with_extension(folder, DEFAULT_IMAGE_EXTENSION)
}

/// List files directly under `folder` (non-recursive) whose extension
/// matches, extracting each id as the stem token after the final underscore
/// (`product_front_B0ABC123.png` → `B0ABC123`; a stem with no underscore is
/// its own id).
///
/// Entries are sorted by file name so listings are reproducible across runs.
pub fn list_ids_and_paths_with_extension(
    folder: impl AsRef<Path>,
    extension: &str,
) -> Result<FileListing, PipelineError> {
    let mut entries: Vec<(String, FileId, PathString)> = Vec::new();
    for entry in WalkDir::new(folder.as_ref()).max_depth(1) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() || !has_extension(entry.path(), extension) {
            continue;
        }
        let Some((name, id)) = name_and_id(entry.path()) else {
            continue;
        };
        entries.push((name, id, entry.path().display().to_string()));
    }
    entries.sort_by(|left, right| left.0.cmp(&right.0));

    let mut listing = FileListing::default();
    for (_, id, path) in entries {
        listing.ids.push(id);
        listing.paths.push(path);
    }
    Ok(listing)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

fn name_and_id(path: &Path) -> Option<(String, FileId)> {
    let name = path.file_name()?.to_str()?.to_string();
    let stem = path.file_stem()?.to_str()?;
    let id = stem.rsplit(ID_SEPARATOR).next()?.to_string();
    Some((name, id))
}
