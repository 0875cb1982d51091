use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::tree::{
    DetailedTreeConfiguration, FilePrefixSet, FullFilePrefixes, TreeConfiguration,
};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Folder and file prefixes only
    Minimal,
    /// Root prefix and last/middle file connectors
    Detailed,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "treegen",
    version,
    about = "Render a directory as an indented text tree",
    after_help = "Examples:\n  treegen src\n  treegen --style minimal -L 2 .\n  treegen --crlf --indent '-' --recurrence 2 docs"
)]
pub struct Args {
    /// Directory to render (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output style
    #[arg(short = 's', long = "style", value_enum, default_value_t = Style::Detailed)]
    pub style: Style,

    /// Max file depth (root's direct children are depth 0)
    #[arg(short = 'L', long = "level")]
    pub max_depth: Option<usize>,

    /// Prefix for folder lines
    #[arg(long = "folder-prefix", allow_hyphen_values = true)]
    pub folder_prefix: Option<String>,

    /// Prefix for the root folder line (detailed style)
    #[arg(long = "root-prefix", allow_hyphen_values = true)]
    pub root_prefix: Option<String>,

    /// Prefix for file lines (non-last files in the detailed style)
    #[arg(long = "file-prefix", allow_hyphen_values = true)]
    pub file_prefix: Option<String>,

    /// Prefix for the last file of a depth group (detailed style)
    #[arg(long = "last-prefix", allow_hyphen_values = true)]
    pub last_prefix: Option<String>,

    /// Indent unit repeats per level
    #[arg(long = "recurrence", allow_negative_numbers = true)]
    pub recurrence: Option<i64>,

    /// Indent unit
    #[arg(long = "indent", allow_hyphen_values = true)]
    pub indent: Option<String>,

    /// Join lines with CRLF instead of LF
    #[arg(long = "crlf")]
    pub crlf: bool,

    /// Skip symlinked directories instead of descending into them
    #[arg(short = 'P', long = "no-follow")]
    pub no_follow: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    pub fn line_separator(&self) -> &'static str {
        if self.crlf {
            "\r\n"
        } else {
            "\n"
        }
    }

    /// Log filter derived from `-v`/`-q`.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn max_depth_value(&self, default: i64) -> i64 {
        match self.max_depth {
            Some(depth) => i64::try_from(depth).unwrap_or(i64::MAX),
            None => default,
        }
    }

    /// Minimal-style configuration: preset values overridden by flags.
    pub fn minimal_configuration(&self) -> TreeConfiguration {
        let preset = TreeConfiguration::minimal();
        let file_prefix = match &self.file_prefix {
            Some(prefix) => FilePrefixSet::simple(prefix.clone()),
            None => preset.file_prefix.clone(),
        };
        TreeConfiguration {
            folder_prefix: self
                .folder_prefix
                .clone()
                .unwrap_or(preset.folder_prefix),
            file_prefix,
            recurrence: self.recurrence.unwrap_or(preset.recurrence),
            separator: self.indent.clone().unwrap_or(preset.separator),
            max_depth: self.max_depth_value(preset.max_depth),
        }
    }

    /// Detailed-style configuration: preset values overridden by flags.
    pub fn detailed_configuration(&self) -> DetailedTreeConfiguration {
        let mut config = DetailedTreeConfiguration::detailed();
        let mut prefixes = FullFilePrefixes::box_drawing();
        if let Some(prefix) = &self.file_prefix {
            prefixes.start = prefix.clone();
        }
        if let Some(prefix) = &self.last_prefix {
            prefixes.unique = prefix.clone();
            prefixes.end = prefix.clone();
        }
        config.tree.file_prefix = FilePrefixSet::Full(prefixes);

        if let Some(prefix) = &self.root_prefix {
            config.parent_folder_prefix = prefix.clone();
        }
        if let Some(prefix) = &self.folder_prefix {
            config.tree.folder_prefix = prefix.clone();
        }
        if let Some(recurrence) = self.recurrence {
            config.tree.recurrence = recurrence;
        }
        if let Some(indent) = &self.indent {
            config.tree.separator = indent.clone();
        }
        config.tree.max_depth = self.max_depth_value(config.tree.max_depth);
        config
    }
}
