//! docmap CLI - Documentation site map checker.
//!
//! Provides commands for:
//! - `check`: Validate navigation and sidebar configuration
//! - `nav`: List top navigation entries
//! - `sidebar`: Show the sidebar for a path
//! - `page`: Show sidebar section, active nav entry, pager and edit link for a route

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, NavArgs, PageArgs, SidebarArgs, SiteArgs};
use output::Output;

/// docmap - Documentation site map checker.
#[derive(Parser)]
#[command(name = "docmap", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate navigation and sidebar configuration.
    Check(CheckArgs),
    /// List top navigation entries.
    Nav(NavArgs),
    /// Show the sidebar groups for a path.
    Sidebar(SidebarArgs),
    /// Show sidebar section, active nav entry, pager and edit link for a route.
    Page(PageArgs),
}

impl Commands {
    /// Site options shared by every command.
    fn site_args(&self) -> &SiteArgs {
        match self {
            Self::Check(args) => &args.site,
            Self::Nav(args) => &args.site,
            Self::Sidebar(args) => &args.site,
            Self::Page(args) => &args.site,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.site_args().verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
        Commands::Page(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
