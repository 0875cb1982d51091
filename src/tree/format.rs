//! Per-line text: indentation, prefix, name.

use super::{FullFilePrefixes, TreeConfiguration};
use crate::error::TreeError;

/// `separator` repeated `recurrence` times per level.
pub fn indent(config: &TreeConfiguration, levels: usize) -> Result<String, TreeError> {
    let repeats = config
        .indent_width()
        .checked_mul(levels)
        .filter(|repeats| config.separator.len().checked_mul(*repeats).is_some())
        .ok_or_else(|| {
            TreeError::Configuration(format!(
                "indent of {} levels overflows (recurrence {})",
                levels, config.recurrence
            ))
        })?;
    Ok(config.separator.repeat(repeats))
}

/// A folder line. `depth` is the folder's segment index in the path, so the
/// scan root itself sits at 0.
pub fn format_folder_line(
    config: &TreeConfiguration,
    prefix: &str,
    name: &str,
    depth: usize,
) -> Result<String, TreeError> {
    Ok(format!("{}{}{}", indent(config, depth)?, prefix, name))
}

/// A file line, one level deeper than the file's scan depth.
pub fn format_file_line(
    config: &TreeConfiguration,
    prefix: &str,
    name: &str,
    depth: usize,
) -> Result<String, TreeError> {
    Ok(format!("{}{}{}", indent(config, depth + 1)?, prefix, name))
}

pub fn file_prefix_for(prefixes: &FullFilePrefixes, is_last: bool) -> &str {
    if is_last {
        &prefixes.unique
    } else {
        &prefixes.start
    }
}
