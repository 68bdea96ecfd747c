//! Interactive session commands, parsed with clap in multicall mode.

use clap::{Parser, Subcommand};

/// One line typed at the session prompt.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(multicall = true)]
pub struct ReplLine {
    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Commands available at the session prompt.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Fill in the form and add a new product
    Add,
    /// Load the product at a table row into the form and edit it
    Edit {
        /// Row number as shown by `list`
        row: usize,
    },
    /// Stop editing without saving changes
    Cancel,
    /// Show the products table
    #[command(alias = "ls")]
    List,
    /// Show total investment, revenue, and profit
    Summary,
    /// Search known products by name
    Products {
        /// Part of a product name; empty lists everything
        partial: Vec<String>,
    },
    /// Export the products table to an XLSX file
    Export {
        /// Output file, quoted if it has spaces; defaults to the configured export path
        path: Vec<String>,
    },
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// Parses a session line. Returns clap's error (including `help` output) on failure.
///
/// # Errors
/// Returns a `clap::Error` for unknown commands, bad arguments, or help requests.
pub fn parse_line(line: &str) -> Result<Command, clap::Error> {
    ReplLine::try_parse_from(split_words(line)).map(|parsed| parsed.command)
}

/// Splits a line into words on whitespace. Text inside single or double quotes
/// is kept as one word, exactly as typed; an unclosed quote runs to the end.
#[must_use]
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_word = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(current);
    }
    words
}

/// Joins split words back into one argument with single spaces, `None` if
/// there were none. Quote an argument to keep runs of whitespace intact.
#[must_use]
pub fn joined(words: &[String]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
