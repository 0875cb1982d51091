//! Directory scanning, depth grouping, and tree line layout.

mod format;
mod group;
mod layout;
pub(crate) mod walk;

use std::path::Path;

use crate::error::TreeError;

pub use format::{file_prefix_for, format_file_line, format_folder_line, indent};
pub use group::{group_by_depth, order_by_depth, DepthGroups, Sibling};
pub use layout::{detailed_lines, minimal_lines};
pub use walk::{is_directory, parent_folder, scan, to_posix, EntryOrder, ScanOptions};

/// A file found below the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedEntry {
    /// Path from the scan root's parent, `/`-separated, starting with the
    /// root's own name (e.g. `test_folder/src/test.txt`).
    pub relative_path: String,
    /// Directory levels below the scan root (direct children are 0).
    pub depth: usize,
}

impl ScannedEntry {
    pub fn new(relative_path: impl Into<String>, depth: usize) -> Self {
        Self {
            relative_path: relative_path.into(),
            depth,
        }
    }
}

/// The result of a single filesystem walk.
///
/// Both retrieval shapes, the depth-ordered flat list and the depth groups,
/// are derived from the same walk so they always agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    /// Display name of the scan root; the first segment of every entry path.
    pub root_name: String,
    /// Files in traversal order.
    pub entries: Vec<ScannedEntry>,
}

impl Scan {
    pub fn new(root_name: impl Into<String>, entries: Vec<ScannedEntry>) -> Self {
        Self {
            root_name: root_name.into(),
            entries,
        }
    }

    /// Entries sorted by ascending depth, stable for equal depths.
    pub fn ordered(&self) -> Vec<ScannedEntry> {
        order_by_depth(self.entries.clone())
    }

    pub fn grouped(&self) -> DepthGroups {
        group_by_depth(&self.entries)
    }
}

/// Prefixes for the full set of sibling positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullFilePrefixes {
    /// Last (or only) file of its depth group.
    pub unique: String,
    /// Any file that is not last in its depth group.
    pub start: String,
    pub middle: String,
    pub end: String,
}

impl FullFilePrefixes {
    pub fn new(
        unique: impl Into<String>,
        start: impl Into<String>,
        middle: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            unique: unique.into(),
            start: start.into(),
            middle: middle.into(),
            end: end.into(),
        }
    }

    /// `┗ ` for the last file, `┣ ` for the others.
    pub fn box_drawing() -> Self {
        Self::new("┗ ", "┣ ", "┃ ", "┗ ")
    }
}

/// File prefix symbols: one symbol for every line, or a full positional set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilePrefixSet {
    Simple { middle: String },
    Full(FullFilePrefixes),
}

impl FilePrefixSet {
    pub fn simple(middle: impl Into<String>) -> Self {
        FilePrefixSet::Simple {
            middle: middle.into(),
        }
    }

    /// The prefix used by the minimal layout.
    pub fn middle(&self) -> &str {
        match self {
            FilePrefixSet::Simple { middle } => middle,
            FilePrefixSet::Full(full) => &full.middle,
        }
    }
}

/// Upper bound on the indent emitted for one depth level.
pub const MAX_INDENT_BYTES: usize = 1024;

/// Formatting settings shared by both tree styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeConfiguration {
    pub folder_prefix: String,
    pub file_prefix: FilePrefixSet,
    /// How many times `separator` is repeated per depth level.
    pub recurrence: i64,
    /// The indent unit.
    pub separator: String,
    /// Deepest file depth to include; `-1` means unbounded.
    pub max_depth: i64,
}

impl TreeConfiguration {
    pub fn new(
        folder_prefix: impl Into<String>,
        file_prefix: FilePrefixSet,
        recurrence: i64,
        separator: impl Into<String>,
        max_depth: i64,
    ) -> Self {
        Self {
            folder_prefix: folder_prefix.into(),
            file_prefix,
            recurrence,
            separator: separator.into(),
            max_depth,
        }
    }

    /// Folder icon, bare file names, three-space indent, no depth bound.
    pub fn minimal() -> Self {
        Self::new("🗃️ ", FilePrefixSet::simple(""), 3, " ", -1)
    }

    pub fn with_folder_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.folder_prefix = prefix.into();
        self
    }

    pub fn with_file_prefix(mut self, prefix: FilePrefixSet) -> Self {
        self.file_prefix = prefix;
        self
    }

    pub fn with_recurrence(mut self, recurrence: i64) -> Self {
        self.recurrence = recurrence;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: i64) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Reject values that cannot produce a meaningful tree.
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.recurrence < 0 {
            return Err(TreeError::Configuration(format!(
                "recurrence must not be negative (got {})",
                self.recurrence
            )));
        }
        if self.recurrence > 0 && self.separator.is_empty() {
            return Err(TreeError::Configuration(
                "separator must not be empty when recurrence is positive".to_string(),
            ));
        }
        let unit_bytes = usize::try_from(self.recurrence)
            .ok()
            .and_then(|width| self.separator.len().checked_mul(width));
        if !matches!(unit_bytes, Some(bytes) if bytes <= MAX_INDENT_BYTES) {
            return Err(TreeError::Configuration(format!(
                "indent of {} x {:?} per level exceeds {} bytes",
                self.recurrence, self.separator, MAX_INDENT_BYTES
            )));
        }
        if self.max_depth < -1 {
            return Err(TreeError::Configuration(format!(
                "max depth must be -1 (unbounded) or non-negative (got {})",
                self.max_depth
            )));
        }
        Ok(())
    }

    /// The depth bound as the scanner expects it.
    pub fn depth_limit(&self) -> Option<usize> {
        usize::try_from(self.max_depth).ok()
    }

    pub(crate) fn indent_width(&self) -> usize {
        usize::try_from(self.recurrence).unwrap_or(0)
    }
}

/// Settings for the detailed style: a distinct root prefix and positional
/// file prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailedTreeConfiguration {
    /// Prefix of the scan root's own line only.
    pub parent_folder_prefix: String,
    pub tree: TreeConfiguration,
}

impl DetailedTreeConfiguration {
    pub fn new(parent_folder_prefix: impl Into<String>, tree: TreeConfiguration) -> Self {
        Self {
            parent_folder_prefix: parent_folder_prefix.into(),
            tree,
        }
    }

    /// Package icon on the root, box-drawing connectors on files, depth 4.
    pub fn detailed() -> Self {
        Self::new(
            "📦 ",
            TreeConfiguration::new(
                "🗃️ ",
                FilePrefixSet::Full(FullFilePrefixes::box_drawing()),
                3,
                " ",
                4,
            ),
        )
    }

    pub fn validate(&self) -> Result<(), TreeError> {
        self.tree.validate()?;
        self.full_prefixes().map(|_| ())
    }

    pub fn full_prefixes(&self) -> Result<&FullFilePrefixes, TreeError> {
        match &self.tree.file_prefix {
            FilePrefixSet::Full(full) => Ok(full),
            FilePrefixSet::Simple { .. } => Err(TreeError::Configuration(
                "the detailed tree needs a full file prefix set".to_string(),
            )),
        }
    }
}

/// Formatted lines, one per folder or file, in emission order.
pub type TreeLines = Vec<String>;

/// Join formatted lines into the final string handed to a presentation layer.
pub fn format_tree(lines: &[String], separator: &str) -> String {
    lines.join(separator)
}

/// A tree style: how to scan a root and turn the scan into lines.
pub trait TreeBuilder {
    fn scan_options(&self) -> ScanOptions;

    fn validate(&self) -> Result<(), TreeError>;

    /// Lay out already-scanned files. Never touches the filesystem.
    fn build_lines(&self, scan: &Scan) -> Result<TreeLines, TreeError>;

    /// Validate, walk `root` once, and lay out the result.
    fn create_tree(&self, root: &Path) -> Result<TreeLines, TreeError> {
        self.validate()?;
        let scan = walk::scan(root, &self.scan_options())?;
        self.build_lines(&scan)
    }

    fn format_tree(&self, lines: &[String], separator: &str) -> String {
        format_tree(lines, separator)
    }
}

/// Folder and file prefixes only.
#[derive(Debug, Clone)]
pub struct MinimalTree {
    configuration: TreeConfiguration,
    follow_symlinks: bool,
    order: EntryOrder,
}

impl MinimalTree {
    pub fn new(configuration: TreeConfiguration) -> Self {
        Self {
            configuration,
            follow_symlinks: true,
            order: EntryOrder::default(),
        }
    }

    pub fn follow_symlinks(mut self, yes: bool) -> Self {
        self.follow_symlinks = yes;
        self
    }

    pub fn order(mut self, order: EntryOrder) -> Self {
        self.order = order;
        self
    }

    pub fn configuration(&self) -> &TreeConfiguration {
        &self.configuration
    }
}

impl TreeBuilder for MinimalTree {
    fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            max_depth: self.configuration.depth_limit(),
            follow_symlinks: self.follow_symlinks,
            order: self.order,
        }
    }

    fn validate(&self) -> Result<(), TreeError> {
        self.configuration.validate()
    }

    fn build_lines(&self, scan: &Scan) -> Result<TreeLines, TreeError> {
        minimal_lines(&self.configuration, scan)
    }
}

/// Root prefix plus last-child / middle-child file connectors.
#[derive(Debug, Clone)]
pub struct DetailedTree {
    configuration: DetailedTreeConfiguration,
    follow_symlinks: bool,
    order: EntryOrder,
}

impl DetailedTree {
    pub fn new(configuration: DetailedTreeConfiguration) -> Self {
        Self {
            configuration,
            follow_symlinks: true,
            order: EntryOrder::default(),
        }
    }

    pub fn follow_symlinks(mut self, yes: bool) -> Self {
        self.follow_symlinks = yes;
        self
    }

    pub fn order(mut self, order: EntryOrder) -> Self {
        self.order = order;
        self
    }

    pub fn configuration(&self) -> &DetailedTreeConfiguration {
        &self.configuration
    }
}

impl TreeBuilder for DetailedTree {
    fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            max_depth: self.configuration.tree.depth_limit(),
            follow_symlinks: self.follow_symlinks,
            order: self.order,
        }
    }

    fn validate(&self) -> Result<(), TreeError> {
        self.configuration.validate()
    }

    fn build_lines(&self, scan: &Scan) -> Result<TreeLines, TreeError> {
        detailed_lines(&self.configuration, scan)
    }
}
