use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::model::{
    CompetitionRow, CompetitionTable, Dataset, MedalCounts, MedalRow, MedalTable,
};

// ---------------------------------------------------------------------------
// Structural errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug, PartialEq)]
pub enum SchemaError {
    #[error("missing required column '{column}'")]
    MissingColumn { column: String },

    #[error(
        "{label}: gold {gold} + silver {silver} + bronze {bronze} does not equal total {total} (line {line})"
    )]
    InconsistentTotal {
        line: usize,
        label: String,
        gold: u64,
        silver: u64,
        bronze: u64,
        total: u64,
    },

    #[error("{label}: medal counts overflow (line {line})")]
    CountOverflow { line: usize, label: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load both input tables. Any failure here is fatal for the application.
pub fn load_dataset(medals: &Path, competitions: &Path, strict_totals: bool) -> Result<Dataset> {
    let file = File::open(medals)
        .with_context(|| format!("opening medal table {}", medals.display()))?;
    let (medals_table, bad_medals) = read_medals(file, strict_totals)
        .with_context(|| format!("loading medal table {}", medals.display()))?;
    log::info!(
        "Loaded {} teams from {}",
        medals_table.len(),
        medals.display()
    );

    let file = File::open(competitions)
        .with_context(|| format!("opening competition table {}", competitions.display()))?;
    let (competition_table, bad_competitions) = read_competitions(file, strict_totals)
        .with_context(|| format!("loading competition table {}", competitions.display()))?;
    log::info!(
        "Loaded {} competition results ({} competitions) from {}",
        competition_table.len(),
        competition_table.competitions().len(),
        competitions.display()
    );

    Ok(Dataset {
        medals: medals_table,
        competitions: competition_table,
        inconsistent_rows: bad_medals + bad_competitions,
    })
}

/// Parse a medal table. Returns the table and the number of rows whose
/// medals don't add up to their total.
pub fn read_medals<R: Read>(reader: R, strict_totals: bool) -> Result<(MedalTable, usize)> {
    let rows: Vec<MedalRow> = read_rows(reader, &MedalRow::COLUMNS)?;

    let mut seen = HashSet::new();
    for row in &rows {
        if !seen.insert(row.team.as_str()) {
            log::warn!("Duplicate team '{}': lookups use the first row", row.team);
        }
    }

    let bad = check_totals(
        rows.iter().map(|r| (r.team.clone(), r.counts())),
        strict_totals,
    )?;
    Ok((MedalTable::new(rows), bad))
}

/// Parse a competition table. Returns the table and the number of rows whose
/// medals don't add up to their total.
pub fn read_competitions<R: Read>(
    reader: R,
    strict_totals: bool,
) -> Result<(CompetitionTable, usize)> {
    let rows: Vec<CompetitionRow> = read_rows(reader, &CompetitionRow::COLUMNS)?;
    let bad = check_totals(
        rows.iter()
            .map(|r| (format!("{} / {}", r.competition, r.noc), r.counts())),
        strict_totals,
    )?;
    Ok((CompetitionTable::new(rows), bad))
}

// ---------------------------------------------------------------------------
// CSV helpers
// ---------------------------------------------------------------------------

/// Deserialize every record after checking that all `required` headers exist.
/// Header names are matched case-sensitively; extra columns are ignored.
fn read_rows<T: DeserializeOwned, R: Read>(reader: R, required: &[&str]) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(SchemaError::MissingColumn {
                column: column.to_string(),
            }
            .into());
        }
    }

    reader
        .deserialize()
        .enumerate()
        .map(|(i, record)| record.with_context(|| format!("CSV line {}", i + 2)))
        .collect()
}

/// Count rows violating `gold + silver + bronze == total`. In strict mode the
/// first violation is an error instead. Counts whose sum overflows are always
/// an error.
fn check_totals(
    rows: impl Iterator<Item = (String, MedalCounts)>,
    strict: bool,
) -> Result<usize> {
    let mut bad = 0;
    for (i, (label, counts)) in rows.enumerate() {
        if counts.medal_sum().is_none() {
            return Err(SchemaError::CountOverflow { line: i + 2, label }.into());
        }
        if counts.is_consistent() {
            continue;
        }
        let err = SchemaError::InconsistentTotal {
            line: i + 2,
            label,
            gold: counts.gold,
            silver: counts.silver,
            bronze: counts.bronze,
            total: counts.total,
        };
        if strict {
            return Err(err.into());
        }
        log::warn!("{err}");
        bad += 1;
    }
    Ok(bad)
}
