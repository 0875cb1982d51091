#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use treegen::{DetailedTreeConfiguration, FilePrefixSet, TreeConfiguration};

/// Create `root_name` inside a fresh temp dir and populate it from a list of
/// relative paths. Paths ending with '/' create directories; others create
/// empty files. Returns the guard and the root path.
pub fn create_fixture(root_name: &str, paths: &[&str]) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join(root_name);
    fs::create_dir_all(&root).unwrap();
    for p in paths {
        let full = root.join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    (tmp, root)
}

/// Folder icon, empty file prefix, three-space indent.
pub fn minimal_config(max_depth: i64) -> TreeConfiguration {
    TreeConfiguration::new("🗃️ ", FilePrefixSet::simple(""), 3, " ", max_depth)
}

pub fn detailed_config(max_depth: i64) -> DetailedTreeConfiguration {
    let mut cfg = DetailedTreeConfiguration::detailed();
    cfg.tree.max_depth = max_depth;
    cfg
}

/// `depth/depth1/depth2/depth3/file3.txt` plus a deeper `depth4/file4.txt`.
pub fn depth_fixture() -> (TempDir, PathBuf) {
    create_fixture(
        "depth",
        &[
            "depth1/depth2/depth3/file3.txt",
            "depth1/depth2/depth3/depth4/file4.txt",
        ],
    )
}

pub fn multiple_depth_fixture() -> (TempDir, PathBuf) {
    create_fixture(
        "multiple_depth_and_files",
        &[
            "env.test",
            "file.txt",
            "file1txt",
            "src/test.txt",
            "src/app/env.test",
            "src/app/file.txt",
            "src/app/file1txt",
        ],
    )
}
