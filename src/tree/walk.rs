use std::fs;
use std::path::{Component, Path, MAIN_SEPARATOR};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use super::{Scan, ScannedEntry};
use crate::error::TreeError;

/// Order in which the entries of each directory are visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryOrder {
    /// Sorted by file name, byte-wise. The default, since the reference
    /// layouts rely on name order within each directory.
    #[default]
    FileName,
    /// Whatever order the filesystem enumerates.
    Filesystem,
}

/// Traversal settings for [`scan`].
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Deepest file depth to include (`None` for unlimited).
    pub max_depth: Option<usize>,
    /// Whether to descend into symlinked directories. When off, they are
    /// skipped entirely.
    pub follow_symlinks: bool,
    pub order: EntryOrder,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            follow_symlinks: true,
            order: EntryOrder::default(),
        }
    }
}

/// Convert a host path to `/`-separated form.
pub fn to_posix(path: &Path) -> String {
    let raw = path.to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        raw.into_owned()
    } else {
        raw.replace(MAIN_SEPARATOR, "/")
    }
}

/// The parent directory of `path` in `/`-separated form, if it has one.
pub fn parent_folder(path: &Path) -> Option<String> {
    path.parent().map(to_posix)
}

/// Whether `path` is a directory. A final symlink is not followed.
pub fn is_directory(path: &Path) -> Result<bool, TreeError> {
    fs::symlink_metadata(path)
        .map(|meta| meta.is_dir())
        .map_err(|e| TreeError::fs(path, e))
}

/// Walk `root` and collect every file below it.
///
/// Directories are never emitted; they are implied by the file paths. With a
/// depth bound of `k`, directories at depth `k` are listed but not descended
/// into. Any error aborts the whole scan.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<Scan, TreeError> {
    let metadata = fs::metadata(root).map_err(|e| TreeError::fs(root, e))?;
    if !metadata.is_dir() {
        return Err(TreeError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    let root_name = root_name(root)?;
    debug!(root = %root.display(), max_depth = ?options.max_depth, "scanning");

    // walkdir counts the root as depth 0, so its children sit one level lower
    // than the depth reported in `ScannedEntry`.
    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(options.follow_symlinks);
    if let Some(max_depth) = options.max_depth {
        walker = walker.max_depth(max_depth.saturating_add(1));
    }
    if options.order == EntryOrder::FileName {
        walker = walker.sort_by_file_name();
    }

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() || is_linked_directory(&entry) {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|_| TreeError::EmptyPath(entry.path().display().to_string()))?;
        entries.push(ScannedEntry {
            relative_path: format!("{}/{}", root_name, to_posix(relative)),
            depth: entry.depth() - 1,
        });
    }

    debug!(root = %root.display(), files = entries.len(), "scan finished");
    Ok(Scan { root_name, entries })
}

/// An unfollowed symlink whose target is a directory. Dangling links are not.
fn is_linked_directory(entry: &DirEntry) -> bool {
    entry.path_is_symlink()
        && fs::metadata(entry.path())
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
}

/// Display name of the scan root: its last normal component, resolving `.`
/// and `..` through the filesystem when needed.
fn root_name(root: &Path) -> Result<String, TreeError> {
    if let Some(Component::Normal(name)) = root.components().next_back() {
        return Ok(name.to_string_lossy().into_owned());
    }
    let resolved = root.canonicalize().map_err(|e| TreeError::fs(root, e))?;
    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| TreeError::EmptyPath(root.display().to_string()))
}
