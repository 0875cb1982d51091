#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use treegen::cli::{Args, Style};
use treegen::{DetailedTree, MinimalTree, TreeBuilder};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("treegen: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("treegen={}", args.log_level())));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_tracing(&args);

    let builder: Box<dyn TreeBuilder> = match args.style {
        Style::Minimal => Box::new(
            MinimalTree::new(args.minimal_configuration()).follow_symlinks(!args.no_follow),
        ),
        Style::Detailed => Box::new(
            DetailedTree::new(args.detailed_configuration())
                .follow_symlinks(!args.no_follow),
        ),
    };

    let lines = builder
        .create_tree(&args.path)
        .with_context(|| format!("{}: failed to build tree", args.path.display()))?;
    info!(lines = lines.len(), style = ?args.style, "tree built");

    println!("{}", builder.format_tree(&lines, args.line_separator()));
    Ok(())
}
