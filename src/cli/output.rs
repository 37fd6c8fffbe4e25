//! Output formatting for CLI commands

use serde::Serialize;

use crate::session::Response;

/// Divider framing each response in text mode
const DIVIDER: &str = "______________________________________________________________________";

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints a session response
    ///
    /// Text mode frames the message with dividers; JSON mode prints one object
    /// per response.
    pub fn response(&self, response: &Response) {
        match self.format {
            OutputFormat::Text => {
                println!("{}", DIVIDER);
                for line in response.message().lines() {
                    println!("  {}", line);
                }
                println!("{}", DIVIDER);
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": !response.is_error(),
                        "message": response.message(),
                        "exit": response.is_exit(),
                    })
                );
            }
        }
    }

    /// Prints a greeting (text only)
    pub fn greeting(&self, name: &str) {
        if self.format == OutputFormat::Text {
            println!("{}", DIVIDER);
            println!("Hello! I'm {}", name);
            println!("I'm your grumpy personal assistant");
            println!("{}", DIVIDER);
        }
    }

    /// Prints a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "message": message
                    })
                );
            }
        }
    }

    /// Prints an error message
    pub fn error(&self, message: &str) {
        match self.format {
            OutputFormat::Text => eprintln!("Error: {}", message),
            OutputFormat::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "success": false,
                        "error": message
                    })
                );
            }
        }
    }

    /// Prints a warning (always to stderr)
    pub fn warning(&self, message: &str) {
        match self.format {
            OutputFormat::Text => eprintln!("Warning: {}", message),
            OutputFormat::Json => {
                eprintln!("{}", serde_json::json!({ "warning": message }));
            }
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) {
        match self.format {
            OutputFormat::Text => {
                if let Ok(json) = serde_json::to_string_pretty(data) {
                    println!("{}", json);
                }
            }
            OutputFormat::Json => {
                if let Ok(json) = serde_json::to_string(data) {
                    println!("{}", json);
                }
            }
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
