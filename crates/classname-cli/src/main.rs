//! `cn` CLI — compose CSS class strings from JSON class expressions.
//!
//! ## Usage
//!
//! ```sh
//! # Join a JSON argument list into a class string (stdin → stdout)
//! echo '["btn", {"btn-active": true, "hidden": false}]' | cn join
//!
//! # Join from file to file
//! cn join -i classes.json -o classes.txt
//!
//! # Drop repeated tokens, keeping first occurrences
//! echo '["btn", {"btn": true}, "btn-lg"]' | cn join --dedupe
//!
//! # One token per line (handy for piping into sort/uniq/grep)
//! cn tokens -i classes.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "cn", version, about = "Conditional CSS class-list composer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Join a JSON class expression into a space-separated class string
    Join {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Drop repeated tokens, keeping the first occurrence of each
        #[arg(long)]
        dedupe: bool,
    },
    /// Emit the collected tokens one per line
    Tokens {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Drop repeated tokens, keeping the first occurrence of each
        #[arg(long)]
        dedupe: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Join {
            input,
            output,
            dedupe,
        } => {
            let class = compose(input.as_deref(), dedupe)?;
            write_output(output.as_deref(), &class)?;
        }
        Commands::Tokens {
            input,
            output,
            dedupe,
        } => {
            let class = compose(input.as_deref(), dedupe)?;
            let lines = class.split(' ').filter(|t| !t.is_empty()).fold(
                String::new(),
                |mut acc, token| {
                    acc.push_str(token);
                    acc.push('\n');
                    acc
                },
            );
            write_output(output.as_deref(), &lines)?;
        }
    }

    Ok(())
}

/// Read the JSON class expression and aggregate it, optionally deduplicating.
fn compose(input: Option<&str>, dedupe: bool) -> Result<String> {
    let json = read_input(input)?;
    let class = classname_core::aggregate_json(&json)
        .context("Failed to aggregate JSON class expression")?;
    Ok(if dedupe {
        classname_core::dedupe(&class)
    } else {
        class
    })
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
