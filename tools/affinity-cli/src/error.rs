//! Error types for the CLI.

use std::path::PathBuf;

use thiserror::Error;

/// CLI-specific result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
pub enum CliError {
    /// No transaction file specified.
    #[error("no transaction file specified. Use --transactions or set AFFINITY_TRANSACTIONS")]
    NoTransactionsSpecified,

    /// Transaction file not found.
    #[error("transaction file not found: {0}")]
    TransactionsNotFound(PathBuf),

    /// No catalog file specified for a category-scoped command.
    #[error("no catalog specified. Use --catalog or set AFFINITY_CATALOG")]
    NoCatalogSpecified,

    /// Catalog file not found.
    #[error("catalog file not found: {0}")]
    CatalogNotFound(PathBuf),

    /// Catalog error.
    #[error("catalog error: {0}")]
    Catalog(#[from] affinity_core::CatalogError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// REPL error.
    #[error("REPL error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// Invalid input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
