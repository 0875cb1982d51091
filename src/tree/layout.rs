use std::collections::HashSet;
use tracing::trace;

use super::format::{file_prefix_for, format_file_line, format_folder_line};
use super::{DetailedTreeConfiguration, Scan, TreeConfiguration, TreeLines};
use crate::error::TreeError;

/// Emitted lines plus the folder lines already seen.
///
/// A folder line is kept only the first time its exact text shows up.
struct LineBuffer {
    lines: TreeLines,
    seen_folders: HashSet<String>,
}

impl LineBuffer {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            seen_folders: HashSet::new(),
        }
    }

    fn push_folder(&mut self, line: String) {
        if self.seen_folders.insert(line.clone()) {
            self.lines.push(line);
        }
    }

    fn push_file(&mut self, line: String) {
        self.lines.push(line);
    }

    fn into_lines(self) -> TreeLines {
        self.lines
    }
}

/// Split a relative path into its folder segments and the file name.
fn split_segments(relative_path: &str) -> Result<(Vec<&str>, &str), TreeError> {
    let mut segments: Vec<&str> = relative_path.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(TreeError::EmptyPath(relative_path.to_string()));
    }
    match segments.pop() {
        Some(file) if !segments.is_empty() => Ok((segments, file)),
        _ => Err(TreeError::EmptyPath(relative_path.to_string())),
    }
}

fn check_root(scan: &Scan) -> Result<(), TreeError> {
    if scan.root_name.is_empty() || scan.root_name.contains('/') {
        return Err(TreeError::EmptyPath(scan.root_name.clone()));
    }
    Ok(())
}

/// Lay out a scan in the minimal style.
///
/// Files are visited in depth order. Each folder segment on a file's path is
/// emitted at its segment index the first time it is met, then the file
/// itself at its own depth plus one.
pub fn minimal_lines(config: &TreeConfiguration, scan: &Scan) -> Result<TreeLines, TreeError> {
    config.validate()?;
    check_root(scan)?;

    let mut buffer = LineBuffer::new();
    buffer.push_folder(format_folder_line(
        config,
        &config.folder_prefix,
        &scan.root_name,
        0,
    )?);

    for entry in scan.ordered() {
        let (folders, file) = split_segments(&entry.relative_path)?;
        for (depth, folder) in folders.iter().enumerate() {
            buffer.push_folder(format_folder_line(
                config,
                &config.folder_prefix,
                folder,
                depth,
            )?);
        }
        trace!(path = %entry.relative_path, depth = entry.depth, "file line");
        buffer.push_file(format_file_line(
            config,
            config.file_prefix.middle(),
            file,
            entry.depth,
        )?);
    }

    Ok(buffer.into_lines())
}

/// Lay out a scan in the detailed style.
///
/// Like [`minimal_lines`], but files are visited group by group, the root
/// uses the parent folder prefix, and the last file of each depth group gets
/// the `unique` prefix while every other file gets `start`.
pub fn detailed_lines(
    config: &DetailedTreeConfiguration,
    scan: &Scan,
) -> Result<TreeLines, TreeError> {
    config.validate()?;
    let prefixes = config.full_prefixes()?;
    check_root(scan)?;
    let tree = &config.tree;
    let folder_prefix = |depth: usize| {
        if depth == 0 {
            config.parent_folder_prefix.as_str()
        } else {
            tree.folder_prefix.as_str()
        }
    };

    let mut buffer = LineBuffer::new();
    buffer.push_folder(format_folder_line(
        tree,
        folder_prefix(0),
        &scan.root_name,
        0,
    )?);

    let groups = scan.grouped();
    for sibling in groups.siblings() {
        let (folders, file) = split_segments(sibling.path)?;
        for (depth, folder) in folders.iter().enumerate() {
            buffer.push_folder(format_folder_line(tree, folder_prefix(depth), folder, depth)?);
        }
        trace!(
            path = sibling.path,
            depth = sibling.depth,
            position = sibling.position,
            count = sibling.count,
            "file line"
        );
        buffer.push_file(format_file_line(
            tree,
            file_prefix_for(prefixes, sibling.is_last()),
            file,
            sibling.depth,
        )?);
    }

    Ok(buffer.into_lines())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{FilePrefixSet, ScannedEntry};

    fn minimal() -> TreeConfiguration {
        TreeConfiguration::new("🗃️ ", FilePrefixSet::simple(""), 3, " ", -1)
    }

    fn scan(root: &str, paths: &[(&str, usize)]) -> Scan {
        Scan::new(
            root,
            paths
                .iter()
                .map(|(p, d)| ScannedEntry::new(*p, *d))
                .collect(),
        )
    }

    #[test]
    fn single_file() {
        let lines = minimal_lines(&minimal(), &scan("one_file", &[("one_file/unique_file", 0)]))
            .unwrap();
        assert_eq!(lines, vec!["🗃️ one_file", "   unique_file"]);
    }

    #[test]
    fn nested_minimal() {
        let s = scan(
            "test_folder",
            &[
                ("test_folder/env.test", 0),
                ("test_folder/file.txt", 0),
                ("test_folder/src/test.txt", 1),
            ],
        );
        let lines = minimal_lines(&minimal(), &s).unwrap();
        assert_eq!(
            lines,
            vec![
                "🗃️ test_folder",
                "   env.test",
                "   file.txt",
                "   🗃️ src",
                "      test.txt",
            ]
        );
    }

    #[test]
    fn shallower_files_come_first() {
        // traversal met the nested file before its shallower sibling
        let s = scan(
            "r",
            &[("r/sub/inner.txt", 1), ("r/top.txt", 0)],
        );
        let lines = minimal_lines(&minimal(), &s).unwrap();
        assert_eq!(lines, vec!["🗃️ r", "   top.txt", "   🗃️ sub", "      inner.txt"]);
    }

    #[test]
    fn shared_ancestor_emitted_once() {
        let s = scan(
            "r",
            &[
                ("r/a/b/one.txt", 2),
                ("r/a/b/two.txt", 2),
                ("r/a/b/c/three.txt", 3),
            ],
        );
        let lines = minimal_lines(&minimal(), &s).unwrap();
        assert_eq!(lines.iter().filter(|l| l.ends_with("🗃️ a")).count(), 1);
        assert_eq!(lines.iter().filter(|l| l.ends_with("🗃️ b")).count(), 1);
        assert_eq!(lines.iter().filter(|l| l.ends_with("🗃️ r")).count(), 1);
    }

    #[test]
    fn empty_scan_is_root_only() {
        let lines = minimal_lines(&minimal(), &scan("empty", &[])).unwrap();
        assert_eq!(lines, vec!["🗃️ empty"]);
    }

    #[test]
    fn detailed_marks_last_of_each_group() {
        let s = scan(
            "multiple_depth_and_files",
            &[
                ("multiple_depth_and_files/env.test", 0),
                ("multiple_depth_and_files/file.txt", 0),
                ("multiple_depth_and_files/file1txt", 0),
                ("multiple_depth_and_files/src/app/env.test", 2),
                ("multiple_depth_and_files/src/app/file.txt", 2),
                ("multiple_depth_and_files/src/app/file1txt", 2),
                ("multiple_depth_and_files/src/test.txt", 1),
            ],
        );
        let lines = detailed_lines(&DetailedTreeConfiguration::detailed(), &s).unwrap();
        assert_eq!(
            lines,
            vec![
                "📦 multiple_depth_and_files",
                "   ┣ env.test",
                "   ┣ file.txt",
                "   ┗ file1txt",
                "   🗃️ src",
                "      ┗ test.txt",
                "      🗃️ app",
                "         ┣ env.test",
                "         ┣ file.txt",
                "         ┗ file1txt",
            ]
        );
    }

    #[test]
    fn detailed_position_ignores_name_overlap() {
        // "file.txt" is a substring of "a_file.txt"; position comes from the index
        let s = scan("r", &[("r/a_file.txt", 0), ("r/file.txt", 0)]);
        let lines = detailed_lines(&DetailedTreeConfiguration::detailed(), &s).unwrap();
        assert_eq!(lines, vec!["📦 r", "   ┣ a_file.txt", "   ┗ file.txt"]);
    }

    #[test]
    fn detailed_rejects_simple_prefixes() {
        let mut cfg = DetailedTreeConfiguration::detailed();
        cfg.tree.file_prefix = FilePrefixSet::simple("");
        let err = detailed_lines(&cfg, &scan("r", &[])).unwrap_err();
        assert!(matches!(err, TreeError::Configuration(_)));
    }

    #[test]
    fn bad_recurrence_fails_before_layout() {
        let cfg = minimal().with_recurrence(-3);
        let err = minimal_lines(&cfg, &scan("r", &[("r/a", 0)])).unwrap_err();
        assert!(matches!(err, TreeError::Configuration(_)));
    }

    #[test]
    fn huge_recurrence_fails_instead_of_allocating() {
        let cfg = minimal().with_recurrence(i64::MAX);
        let err = minimal_lines(&cfg, &scan("r", &[("r/a.txt", 0)])).unwrap_err();
        assert!(matches!(err, TreeError::Configuration(_)));
    }

    #[test]
    fn degenerate_paths_are_rejected() {
        assert!(matches!(
            minimal_lines(&minimal(), &scan("", &[])),
            Err(TreeError::EmptyPath(_))
        ));
        assert!(matches!(
            minimal_lines(&minimal(), &scan("r", &[("r//x", 1)])),
            Err(TreeError::EmptyPath(_))
        ));
        assert!(matches!(
            minimal_lines(&minimal(), &scan("r", &[("lonely", 0)])),
            Err(TreeError::EmptyPath(_))
        ));
    }

    #[test]
    fn layout_is_idempotent() {
        let s = scan("r", &[("r/a.txt", 0), ("r/d/b.txt", 1)]);
        let cfg = DetailedTreeConfiguration::detailed();
        assert_eq!(detailed_lines(&cfg, &s).unwrap(), detailed_lines(&cfg, &s).unwrap());
    }
}
