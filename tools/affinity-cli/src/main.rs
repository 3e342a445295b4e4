//! Affinity Command Line Interface
//!
//! A CLI tool for co-purchase affinity analysis over transaction exports.

mod commands;
mod error;
mod ingest;
mod output;
mod repl;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use affinity_graph::projection::DEFAULT_PROJECTION_ITEMS;
use affinity_graph::query::{
    DEFAULT_NEIGHBOR_LIMIT, DEFAULT_PAIR_LIMIT, DEFAULT_RECOMMENDATION_LIMIT,
};

use crate::commands::Workspace;
use crate::error::Result;
use crate::repl::Repl;

/// Affinity Command Line Interface
///
/// Aggregates purchase transactions into a co-purchase graph and answers
/// analytic queries over it.
#[derive(Parser, Debug)]
#[command(name = "affinity")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the transactions CSV file
    #[arg(short, long, env = "AFFINITY_TRANSACTIONS", global = true)]
    pub transactions: Option<PathBuf>,

    /// Path to a JSON file mapping items to categories
    #[arg(short, long, env = "AFFINITY_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    Table,
    /// JSON format
    Json,
    /// Compact single-line format
    Compact,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the items most frequently co-purchased with an item
    Top {
        /// The target item
        item: String,

        /// Number of neighbors to return
        #[arg(short = 'n', long, default_value_t = DEFAULT_NEIGHBOR_LIMIT)]
        limit: usize,
    },

    /// Show the most popular item combinations
    Pairs {
        /// Number of pairs to return
        #[arg(short = 'k', long, default_value_t = DEFAULT_PAIR_LIMIT)]
        limit: usize,
    },

    /// Check the co-purchase relationship between two items
    Relation {
        /// First item
        first: String,

        /// Second item
        second: String,
    },

    /// Show co-purchase relationships within one catalog category
    Category {
        /// The category name
        name: String,
    },

    /// Recommend items to go with a set of input items
    Recommend {
        /// Input items (comma-separated)
        #[arg(value_delimiter = ',')]
        items: Vec<String>,

        /// Number of recommendations to return
        #[arg(short = 'n', long, default_value_t = DEFAULT_RECOMMENDATION_LIMIT)]
        limit: usize,
    },

    /// Export the high-frequency subgraph as JSON for external rendering
    Export {
        /// Number of top-frequency items to project
        #[arg(short = 'n', long, default_value_t = DEFAULT_PROJECTION_ITEMS)]
        top: usize,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show graph statistics
    Info,

    /// Start an interactive session
    Repl,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("affinity=info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let workspace = Workspace::load(cli.transactions.as_deref(), cli.catalog.as_deref())?;

    match cli.command {
        Commands::Top { item, limit } => commands::top(&workspace, &item, limit, cli.format),
        Commands::Pairs { limit } => commands::pairs(&workspace, limit, cli.format),
        Commands::Relation { first, second } => {
            commands::relation(&workspace, &first, &second, cli.format)
        }
        Commands::Category { name } => commands::category(&workspace, &name, cli.format),
        Commands::Recommend { items, limit } => {
            commands::recommend(&workspace, &items, limit, cli.format)
        }
        Commands::Export { top, output } => {
            commands::export(&workspace, top, output.as_deref())
        }
        Commands::Info => commands::show_info(&workspace, cli.format),
        Commands::Repl => {
            let mut repl = Repl::new(workspace, cli.format)?;
            repl.run()
        }
    }
}
