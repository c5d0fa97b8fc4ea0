//! Output formatting for expansion results

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;
use uncontract_core::Expansion;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One expanded sentence per line
    Text,
    /// JSON array of original/expanded records
    Json,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpansionRecord {
    /// The sentence as received
    pub original: String,
    /// The sentence with contractions expanded
    pub expanded: String,
}

impl From<&Expansion> for ExpansionRecord {
    fn from(expansion: &Expansion) -> Self {
        Self {
            original: expansion.original.clone(),
            expanded: expansion.expanded.clone(),
        }
    }
}

/// Write expansions in the selected format.
pub fn write_expansions<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    expansions: &[Expansion],
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for expansion in expansions {
                writeln!(writer, "{}", expansion.expanded)?;
            }
        }
        OutputFormat::Json => {
            let records: Vec<ExpansionRecord> =
                expansions.iter().map(ExpansionRecord::from).collect();
            serde_json::to_writer_pretty(&mut *writer, &records)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}
