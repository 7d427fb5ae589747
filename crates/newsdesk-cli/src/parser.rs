//! CLI argument definitions.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// News publishing service with threaded comments.
#[derive(Parser)]
#[command(name = "newsdesk", version, about)]
pub struct Cli {
    /// Path to the SQLite database (defaults to the platform data
    /// directory).
    #[arg(long, global = true, env = "NEWSDESK_DB")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server.
    Serve {
        /// Port to listen on.
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
    /// Manage news items from the terminal.
    #[command(subcommand)]
    News(NewsCommand),
    /// Inspect or change application settings.
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Subcommand)]
pub enum NewsCommand {
    /// Publish a news item.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        text: String,
        /// Publication date (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List recent news items, newest first.
    List {
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show current settings.
    Show,
    /// Change the number of news items on the home page.
    SetPageSize {
        #[arg(long)]
        size: u32,
    },
}
