#![forbid(unsafe_code)]
//! treegen — render a directory as a prefixed, indented text tree.

pub mod cli;
pub mod error;
pub mod tree;

pub use error::TreeError;
pub use tree::{
    format_tree, DetailedTree, DetailedTreeConfiguration, FilePrefixSet, FullFilePrefixes,
    MinimalTree, TreeBuilder, TreeConfiguration, TreeLines,
};
