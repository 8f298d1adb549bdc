//! XP CLI - content toolkit for the XP websites.
//!
//! Provides commands for:
//! - `render`: Render one markdown document to HTML
//! - `lessons`: Render a directory of lessons into pages
//! - `navigation`: Fetch the site navigation as JSON
//! - `articles`: Fetch articles and write article pages
//! - `radar`: Fetch radar items and write the radar page

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ArticlesArgs, LessonsArgs, NavigationArgs, RadarArgs, RenderArgs};
use output::Output;

/// XP - content toolkit.
#[derive(Parser)]
#[command(name = "xp", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a markdown document to HTML.
    Render(RenderArgs),
    /// Render a directory of lessons.
    Lessons(LessonsArgs),
    /// Print the site navigation as JSON.
    Navigation(NavigationArgs),
    /// Write article pages and the blog listing.
    Articles(ArticlesArgs),
    /// Write the technology radar page.
    Radar(RadarArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Lessons(args) => args.execute(),
        Commands::Navigation(args) => args.execute(),
        Commands::Articles(args) => args.execute(),
        Commands::Radar(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
