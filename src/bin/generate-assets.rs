#![forbid(unsafe_code)]
//! Writes shell completions and the `treegen(1)` man page.
//!
//! Usage: `generate-assets [OUT_DIR]` (default `dist`).

use anyhow::Context;
use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;
use treegen::cli::Args;

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));
    let completions_dir = out_dir.join("completions");
    let man_dir = out_dir.join("man");

    for dir in [&completions_dir, &man_dir] {
        fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;
    }

    let mut cmd = Args::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
        let written = generate_to(shell, &mut cmd, "treegen", &completions_dir)?;
        eprintln!("{shell}: {}", written.display());
    }

    let mut page = Vec::new();
    Man::new(Args::command()).render(&mut page)?;
    let man_path = man_dir.join("treegen.1");
    fs::write(&man_path, page).with_context(|| format!("{}: cannot write", man_path.display()))?;
    eprintln!("man: {}", man_path.display());
    Ok(())
}
