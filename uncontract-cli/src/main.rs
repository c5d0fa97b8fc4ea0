//! Command-line front end for contraction expansion

use anyhow::Context;
use clap::Parser;
use log::debug;
use std::io::Read;
use uncontract_cli::output::{write_expansions, OutputFormat};
use uncontract_cli::{CliError, CliResult};
use uncontract_core::{Expander, Expansion};

#[derive(Debug, Parser)]
#[command(
    name = "uncontract",
    version,
    about = "Expand English contractions into their full forms"
)]
struct Cli {
    /// Sentence to expand; reads stdin when neither this nor -i is given
    sentence: Option<String>,

    /// Input files, one sentence per line
    #[arg(short, long, conflicts_with = "sentence")]
    input: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let sentences = gather_sentences(&cli)?;
    debug!("expanding {} sentence(s)", sentences.len());

    let expander =
        Expander::new().map_err(|e| CliError::ProcessingError(e.to_string()))?;

    let mut expansions: Vec<Expansion> = Vec::with_capacity(sentences.len());
    for sentence in &sentences {
        let expansion = expander
            .expand(sentence)
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;
        expansions.push(expansion);
    }

    let mut stdout = std::io::stdout().lock();
    write_expansions(&mut stdout, cli.format, &expansions)
}

/// Collect non-empty input lines from the argument, files, or stdin.
fn gather_sentences(cli: &Cli) -> CliResult<Vec<String>> {
    if let Some(sentence) = &cli.sentence {
        if sentence.is_empty() {
            return Err(CliError::NoInput.into());
        }
        return Ok(vec![sentence.clone()]);
    }

    let mut sentences = Vec::new();

    if cli.input.is_empty() {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        collect_lines(&buffer, &mut sentences);
    } else {
        for path in &cli.input {
            let content = std::fs::read_to_string(path)
                .map_err(|_| CliError::FileNotFound(path.clone()))?;
            collect_lines(&content, &mut sentences);
        }
    }

    if sentences.is_empty() {
        return Err(CliError::NoInput.into());
    }
    Ok(sentences)
}

fn collect_lines(content: &str, sentences: &mut Vec<String>) {
    sentences.extend(
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string),
    );
}
