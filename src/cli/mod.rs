//! CLI module for DocQA
//!
//! Provides command-line interface parsing and handling for the docqa binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod chat;
pub mod commands;
pub mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use commands::{execute, Context};
pub use output::Output;

/// DocQA - ask questions about a PDF
///
/// Client for a DocQA service: create an account, log in, upload a PDF and
/// ask questions about it.
#[derive(Parser, Debug)]
#[command(
    name = "docqa",
    version,
    about = "DocQA - ask questions about an uploaded PDF",
    long_about = "Command-line client for a DocQA service.\n\n\
                  Log in once, upload a PDF, then ask questions one at a time or\n\
                  in an interactive chat that keeps a running history.",
    after_help = "EXAMPLES:\n    \
                  docqa signup -e me@example.com       # Create an account\n    \
                  docqa login -e me@example.com        # Log in (prompts for password)\n    \
                  docqa upload paper.pdf               # Upload a document\n    \
                  docqa ask What is the main result?   # Ask a single question\n    \
                  docqa chat                           # Interactive session"
)]
pub struct Cli {
    /// Path to the configuration file (defaults to ./docqa.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the DocQA service
    #[arg(long, global = true, env = "DOCQA_API_URL")]
    pub api_url: Option<String>,

    /// File holding the session token
    #[arg(long, global = true, env = "DOCQA_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account
    Signup(CredentialArgs),

    /// Log in and remember the session
    Login(CredentialArgs),

    /// Forget the stored session
    Logout,

    /// Show the service URL and whether you are logged in
    Status,

    /// Upload a PDF for questioning
    Upload {
        /// Path to the PDF file
        file: PathBuf,
    },

    /// Ask a single question about the uploaded PDF
    Ask {
        /// The question (remaining words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Interactive question/answer session with history
    Chat,
}

/// Email and password, prompted for when omitted
#[derive(Args, Debug, Clone)]
pub struct CredentialArgs {
    /// Account email
    #[arg(short, long)]
    pub email: Option<String>,

    /// Account password
    #[arg(short, long, env = "DOCQA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Output helper honouring `--no-color`
    pub fn output(&self) -> Output {
        if self.no_color {
            Output::no_color()
        } else {
            Output::new()
        }
    }
}
