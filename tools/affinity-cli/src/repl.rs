//! Interactive REPL implementation.
//!
//! A menu-driven session over a loaded workspace: pick an operation, answer
//! its prompts, see the result. Mirrors the CLI subcommands one to one.

use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

use affinity_graph::projection::DEFAULT_PROJECTION_ITEMS;
use affinity_graph::query::{
    DEFAULT_NEIGHBOR_LIMIT, DEFAULT_PAIR_LIMIT, DEFAULT_RECOMMENDATION_LIMIT,
};

use crate::commands::{self, Workspace};
use crate::error::Result;
use crate::OutputFormat;

/// The interactive affinity session.
pub struct Repl {
    workspace: Workspace,
    format: OutputFormat,
    editor: Editor<(), DefaultHistory>,
}

impl Repl {
    /// Create a new REPL over a loaded workspace.
    pub fn new(workspace: Workspace, format: OutputFormat) -> Result<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .history_ignore_dups(true)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;

        // Load history
        let history_path = Self::history_path();
        if history_path.exists() {
            let _ = editor.load_history(&history_path);
        }

        Ok(Self { workspace, format, editor })
    }

    /// Get the history file path.
    fn history_path() -> PathBuf {
        dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join("affinity").join("history.txt")
    }

    /// Run the REPL loop.
    pub fn run(&mut self) -> Result<()> {
        self.print_menu();

        loop {
            match self.editor.readline("affinity> ") {
                Ok(line) => {
                    let line = line.trim().to_owned();
                    if line.is_empty() {
                        continue;
                    }
                    if matches!(line.as_str(), "8" | "exit" | "quit" | ".exit") {
                        println!("Goodbye!");
                        break;
                    }
                    if let Err(e) = self.process_choice(&line) {
                        eprintln!("Error: {e}");
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Enter 8 or press Ctrl-D to exit");
                }
                Err(ReadlineError::Eof) => {
                    println!("Goodbye!");
                    break;
                }
                Err(e) => {
                    return Err(e.into());
                }
            }
        }

        // Save history
        let history_path = Self::history_path();
        if let Some(parent) = history_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = self.editor.save_history(&history_path);

        Ok(())
    }

    /// Print the operation menu.
    fn print_menu(&self) {
        println!("===== Co-purchase Affinity Analysis =====");
        println!("1. Top co-purchased items for an item");
        println!("2. Most popular item pairs");
        println!("3. Check a co-purchase relationship");
        println!("4. Relationships within a category");
        println!("5. Recommend items for a basket");
        println!("6. Export high-frequency subgraph (JSON)");
        println!("7. Graph statistics");
        println!("8. Exit");
        println!("(enter a number, or 'menu' to reprint)");
    }

    /// Dispatch one menu choice.
    fn process_choice(&mut self, choice: &str) -> Result<()> {
        match choice {
            "1" => {
                let item = self.prompt("Item name: ")?;
                let limit = self.prompt_count("How many results", DEFAULT_NEIGHBOR_LIMIT)?;
                commands::top(&self.workspace, &item, limit, self.format)
            }
            "2" => {
                let limit = self.prompt_count("How many pairs", DEFAULT_PAIR_LIMIT)?;
                commands::pairs(&self.workspace, limit, self.format)
            }
            "3" => {
                let first = self.prompt("First item: ")?;
                let second = self.prompt("Second item: ")?;
                commands::relation(&self.workspace, &first, &second, self.format)
            }
            "4" => {
                let name = self.prompt("Category name: ")?;
                commands::category(&self.workspace, &name, self.format)
            }
            "5" => {
                let basket = self.prompt("Items (comma-separated): ")?;
                let items: Vec<String> = basket
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(ToOwned::to_owned)
                    .collect();
                let limit =
                    self.prompt_count("How many recommendations", DEFAULT_RECOMMENDATION_LIMIT)?;
                commands::recommend(&self.workspace, &items, limit, self.format)
            }
            "6" => {
                let top = self.prompt_count("How many items to project", DEFAULT_PROJECTION_ITEMS)?;
                let target = self.prompt("Output file (empty for stdout): ")?;
                let path = (!target.is_empty()).then(|| PathBuf::from(target));
                commands::export(&self.workspace, top, path.as_deref())
            }
            "7" => commands::show_info(&self.workspace, self.format),
            "menu" | "help" => {
                self.print_menu();
                Ok(())
            }
            _ => {
                println!("Invalid choice: {choice} (enter a number between 1 and 8)");
                Ok(())
            }
        }
    }

    /// Read one trimmed line with a prompt.
    fn prompt(&mut self, text: &str) -> Result<String> {
        Ok(self.editor.readline(text)?.trim().to_owned())
    }

    /// Read a count, falling back to a default on empty or invalid input.
    fn prompt_count(&mut self, what: &str, default: usize) -> Result<usize> {
        let answer = self.prompt(&format!("{what} (default {default}): "))?;
        Ok(answer.parse().unwrap_or(default))
    }
}
