//! CSV loaders for ratings and credits.
//!
//! Files are MovieLens-shaped: a header row, then one record per line.
//! Ratings carry `userId,movieId,rating,timestamp` (unix seconds); credits
//! carry `movieId,castId,castName` with optional `crewId,crewName,crewRole`
//! columns. Loading is strict: the first malformed row aborts the import.

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::info;

use super::Catalog;
use crate::model::{CastMember, CrewMember, FilmId};
use crate::primitives::IndexedStore;

/// Errors raised while loading CSV data.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Underlying file error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// CSV-level parse error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// A required header column is absent.
    #[error("missing column {0:?}")]
    MissingColumn(&'static str),
    /// A row holds a value that does not parse.
    #[error("row {row}: {message}")]
    Malformed {
        /// 1-based line number, counting the header.
        row: u64,
        /// What failed to parse.
        message: String,
    },
}

/// Row counts from a completed import.
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    /// Ratings stored (duplicate user × film rows are dropped, not counted).
    pub ratings_imported: u64,
    /// Films that received a credit roster.
    pub films_credited: u64,
    /// Cast credit rows read.
    pub cast_credited: u64,
    /// Crew credit rows read.
    pub crew_credited: u64,
}

fn column(headers: &StringRecord, name: &'static str) -> Result<usize, ImportError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or(ImportError::MissingColumn(name))
}

fn field<'r>(record: &'r StringRecord, index: usize, row: u64) -> Result<&'r str, ImportError> {
    record.get(index).ok_or_else(|| ImportError::Malformed {
        row,
        message: format!("missing field {index}"),
    })
}

fn parse_field<T>(raw: &str, row: u64, what: &str) -> Result<T, ImportError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|err| ImportError::Malformed {
        row,
        message: format!("{what}: {err}"),
    })
}

/// Loads a ratings CSV into the catalog's rating store.
pub fn load_ratings(path: &Path, catalog: &mut Catalog) -> Result<ImportSummary, ImportError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = reader.headers()?.clone();
    let user_col = column(&headers, "userId")?;
    let film_col = column(&headers, "movieId")?;
    let score_col = column(&headers, "rating")?;
    let ts_col = column(&headers, "timestamp")?;

    let mut summary = ImportSummary::default();
    for (line, record) in reader.records().enumerate() {
        let row = line as u64 + 2;
        let record = record?;
        let user = parse_field(field(&record, user_col, row)?, row, "userId")?;
        let film = parse_field(field(&record, film_col, row)?, row, "movieId")?;
        let score = parse_field(field(&record, score_col, row)?, row, "rating")?;
        let seconds: i64 = parse_field(field(&record, ts_col, row)?, row, "timestamp")?;
        let timestamp =
            OffsetDateTime::from_unix_timestamp(seconds).map_err(|err| ImportError::Malformed {
                row,
                message: format!("timestamp: {err}"),
            })?;
        if catalog.ratings.add(user, film, score, timestamp) {
            summary.ratings_imported += 1;
        }
    }

    info!(ratings = summary.ratings_imported, "import.ratings.done");
    Ok(summary)
}

/// Loads a credits CSV into the catalog's credit store.
///
/// Rows for the same film may appear anywhere in the file; rosters are
/// accumulated and stored once the whole file has been read. Films already
/// present in the credit store keep their existing rosters.
pub fn load_credits(path: &Path, catalog: &mut Catalog) -> Result<ImportSummary, ImportError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = reader.headers()?.clone();
    let film_col = column(&headers, "movieId")?;
    let cast_id_col = column(&headers, "castId")?;
    let cast_name_col = column(&headers, "castName")?;
    let crew_id_col = headers.iter().position(|header| header == "crewId");
    let crew_name_col = headers.iter().position(|header| header == "crewName");
    let crew_role_col = headers.iter().position(|header| header == "crewRole");

    let mut summary = ImportSummary::default();
    let mut rosters: Vec<(FilmId, Vec<CastMember>, Vec<CrewMember>)> = Vec::new();
    let mut slots: IndexedStore<FilmId, usize> = IndexedStore::with_capacity(4096);

    for (line, record) in reader.records().enumerate() {
        let row = line as u64 + 2;
        let record = record?;
        let film: FilmId = parse_field(field(&record, film_col, row)?, row, "movieId")?;
        let slot = match slots.get(film) {
            Some(&slot) => slot,
            None => {
                slots.put(film, rosters.len());
                rosters.push((film, Vec::new(), Vec::new()));
                rosters.len() - 1
            }
        };

        let cast_raw = field(&record, cast_id_col, row)?;
        if !cast_raw.trim().is_empty() {
            let id = parse_field(cast_raw, row, "castId")?;
            let name = field(&record, cast_name_col, row)?;
            rosters[slot].1.push(CastMember::new(id, name.trim()));
            summary.cast_credited += 1;
        }

        if let (Some(id_col), Some(name_col)) = (crew_id_col, crew_name_col) {
            let crew_raw = field(&record, id_col, row)?;
            if !crew_raw.trim().is_empty() {
                let id = parse_field(crew_raw, row, "crewId")?;
                let name = field(&record, name_col, row)?;
                let role = match crew_role_col {
                    Some(role_col) => field(&record, role_col, row)?.trim(),
                    None => "",
                };
                rosters[slot].2.push(CrewMember::new(id, name.trim(), role));
                summary.crew_credited += 1;
            }
        }
    }

    for (film, cast, crew) in rosters {
        if catalog.credits.add(film, cast, crew) {
            summary.films_credited += 1;
        }
    }

    info!(
        films = summary.films_credited,
        cast = summary.cast_credited,
        crew = summary.crew_credited,
        "import.credits.done"
    );
    Ok(summary)
}
