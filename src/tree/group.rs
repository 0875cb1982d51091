use std::collections::BTreeMap;

use super::ScannedEntry;

/// Sort entries by ascending depth, keeping traversal order within a depth.
pub fn order_by_depth(mut entries: Vec<ScannedEntry>) -> Vec<ScannedEntry> {
    entries.sort_by_key(|entry| entry.depth);
    entries
}

/// Batch relative paths by depth, in traversal-encounter order.
pub fn group_by_depth(entries: &[ScannedEntry]) -> DepthGroups {
    let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for entry in entries {
        groups
            .entry(entry.depth)
            .or_default()
            .push(entry.relative_path.clone());
    }
    DepthGroups { groups }
}

/// Relative paths keyed by depth, iterated by ascending depth.
///
/// Only depths that actually hold a file have a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepthGroups {
    groups: BTreeMap<usize, Vec<String>>,
}

impl DepthGroups {
    pub fn get(&self, depth: usize) -> Option<&[String]> {
        self.groups.get(&depth).map(Vec::as_slice)
    }

    pub fn depths(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> + '_ {
        self.groups
            .iter()
            .map(|(depth, paths)| (*depth, paths.as_slice()))
    }

    /// Every path with its position inside its depth group.
    pub fn siblings(&self) -> impl Iterator<Item = Sibling<'_>> + '_ {
        self.iter().flat_map(|(depth, paths)| {
            let count = paths.len();
            paths.iter().enumerate().map(move |(position, path)| Sibling {
                depth,
                path,
                position,
                count,
            })
        })
    }

    /// Number of depth groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// A file seen through its depth group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sibling<'a> {
    pub depth: usize,
    pub path: &'a str,
    /// Index within the depth group.
    pub position: usize,
    /// Size of the depth group.
    pub count: usize,
}

impl Sibling<'_> {
    pub fn is_last(&self) -> bool {
        self.position + 1 == self.count
    }
}
