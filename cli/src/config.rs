use clap::{Parser, Subcommand};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

#[derive(Parser, Debug)]
#[command(name = "todo", about = "Work with the todo list served at /api/todo/")]
pub struct Cli {
    /// Base URL of the todo server.
    #[arg(long, env = "TODO_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the rendered rows.
    List,
    /// Print the full HTML page.
    Render,
    /// Submit a new item.
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Tick (or untick) an item.
    Check {
        id: String,
        #[arg(long)]
        uncheck: bool,
    },
    /// Change the title and/or content of an item.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Remove an item.
    Delete { id: String },
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            api_url: cli.api_url.clone(),
        }
    }
}
