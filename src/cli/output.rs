//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for the DocQA CLI.

use docqa_core::Exchange;
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Output style configuration
#[derive(Debug, Clone, Copy)]
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the chat banner
    pub fn banner(&self) {
        if self.colored {
            println!(
                "\n  {} {}",
                "DocQA".bright_cyan().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
            println!("  {}\n", "Ask questions about your uploaded PDF".bright_white());
        } else {
            println!("\n  DocQA v{}", env!("CARGO_PKG_VERSION"));
            println!("  Ask questions about your uploaded PDF\n");
        }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a header for a section
    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    /// Print a hint/tip message
    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("\n  {} {}", "💡".dimmed(), message.dimmed().italic());
        } else {
            println!("\n  [TIP] {}", message);
        }
    }

    /// Print a command suggestion
    pub fn command(&self, cmd: &str) {
        if self.colored {
            println!("     {}", format!("$ {}", cmd).bright_cyan());
        } else {
            println!("     $ {}", cmd);
        }
    }

    /// Print an answer from the service
    pub fn answer(&self, text: &str) {
        if self.colored {
            println!("\n  {} {}\n", "Answer:".bright_green().bold(), text);
        } else {
            println!("\n  Answer: {}\n", text);
        }
    }

    /// Print one history entry
    pub fn exchange(&self, exchange: &Exchange) {
        if self.colored {
            println!("    {} {}", "Q:".cyan().bold(), exchange.question());
            println!("    {} {}\n", "A:".green().bold(), exchange.answer());
        } else {
            println!("    Q: {}", exchange.question());
            println!("    A: {}\n", exchange.answer());
        }
    }

    /// Print the chat prompt without a trailing newline
    pub fn prompt(&self) {
        if self.colored {
            print!("{} ", "?".bright_cyan().bold());
        } else {
            print!("> ");
        }
        io::stdout().flush().ok();
    }

    /// Print newline
    pub fn newline(&self) {
        println!();
    }
}
