use clap::{Parser, Subcommand};
use eyre::{eyre, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use dun_core::union::{Union, DEFAULT_DISCRIMINANT};

#[derive(Parser)]
#[command(name = "dun")]
#[command(about = "Inspect discriminated unions in JSON files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a file holds a well-formed tagged union
    Check {
        /// JSON file
        file: PathBuf,

        /// Discriminant field name
        #[arg(short, long, default_value = DEFAULT_DISCRIMINANT)]
        discriminant: String,
    },
    /// Print the tag of a tagged union
    Tag {
        /// JSON file
        file: PathBuf,

        /// Discriminant field name
        #[arg(short, long, default_value = DEFAULT_DISCRIMINANT)]
        discriminant: String,

        /// Emit the full summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Test whether a tagged union carries a specific tag
    Is {
        /// JSON file
        file: PathBuf,

        /// Tag to test for
        tag: String,

        /// Discriminant field name
        #[arg(short, long, default_value = DEFAULT_DISCRIMINANT)]
        discriminant: String,
    },
    /// Count elements of a JSON array by tag
    Tally {
        /// JSON file holding an array
        file: PathBuf,

        /// Discriminant field name
        #[arg(short, long, default_value = DEFAULT_DISCRIMINANT)]
        discriminant: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Check { file, discriminant } => {
            check_file(file, discriminant)?;
        }
        Commands::Tag {
            file,
            discriminant,
            json,
        } => {
            show_tag(file, discriminant, *json)?;
        }
        Commands::Is {
            file,
            tag,
            discriminant,
        } => {
            return is_tag(file, tag, discriminant);
        }
        Commands::Tally { file, discriminant } => {
            tally_file(file, discriminant)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_value(file: &PathBuf) -> Result<serde_json::Value> {
    let content = fs::read_to_string(file)?;
    Ok(serde_json::from_str(&content)?)
}

fn check_file(file: &PathBuf, discriminant: &str) -> Result<()> {
    let value = read_value(file)?;
    let union = Union::with_discriminant(&value, discriminant)
        .map_err(|e| eyre!("{}: {}", file.display(), e))?;

    println!(
        "{}: tagged union, {} = {:?}",
        file.display(),
        union.discriminant(),
        union.tag()
    );
    Ok(())
}

fn show_tag(file: &PathBuf, discriminant: &str, as_json: bool) -> Result<()> {
    let value = read_value(file)?;
    let union = Union::with_discriminant(&value, discriminant)
        .map_err(|e| eyre!("{}: {}", file.display(), e))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&union.info())?);
    } else {
        println!("{}", union.tag());
    }
    Ok(())
}

fn is_tag(file: &PathBuf, tag: &str, discriminant: &str) -> Result<ExitCode> {
    let value = read_value(file)?;

    // The narrowing predicate validates nothing: a malformed input just
    // fails to match, it is not an error.
    if dun_core::union::is_with(&value, tag, discriminant) {
        println!("true");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("false");
        Ok(ExitCode::FAILURE)
    }
}

#[derive(Serialize)]
struct Tally {
    discriminant: String,
    total: usize,
    by_tag: BTreeMap<String, usize>,
    not_unions: usize,
}

fn tally_file(file: &PathBuf, discriminant: &str) -> Result<()> {
    let value = read_value(file)?;
    let elements = value
        .as_array()
        .ok_or_else(|| eyre!("{}: expected a JSON array", file.display()))?;

    let mut tally = Tally {
        discriminant: discriminant.to_string(),
        total: elements.len(),
        by_tag: BTreeMap::new(),
        not_unions: 0,
    };

    for element in elements {
        match Union::with_discriminant(element, discriminant) {
            Ok(union) => {
                *tally.by_tag.entry(union.tag().to_string()).or_insert(0) += 1;
            }
            Err(_) => tally.not_unions += 1,
        }
    }

    println!("{}", serde_json::to_string_pretty(&tally)?);
    Ok(())
}
