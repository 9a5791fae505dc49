//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "quillpad", version, about = "Manage posts on a Quillpad blog backend")]
pub struct Cli {
    /// Backend origin (overrides QUILLPAD_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the token
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "QUILLPAD_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored token
    Logout,
    /// List all posts
    List,
    /// Show one post
    Show { id: i64 },
    /// Search posts by keyword (at most 20 characters)
    Search { keyword: String },
    /// Create a post
    New(DraftArgs),
    /// Edit an existing post
    Edit {
        id: i64,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Delete a post
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Draft fields; anything omitted keeps its current value.
#[derive(Debug, Default, Args)]
pub struct DraftArgs {
    #[arg(long)]
    pub title: Option<String>,

    /// Date as YYYY-MM-DD (new posts default to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Markdown content
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read markdown content from a file
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Upload an image and link it at the caret (repeatable, in order)
    #[arg(long = "image", value_name = "PATH")]
    pub images: Vec<PathBuf>,

    /// Character offset to insert images at (default: end of content)
    #[arg(long)]
    pub caret: Option<usize>,
}
