//! Plan file decoding.
//!
//! # Responsibility
//! - Read and decode the JSON plan (`[RawEntry, ...]`) from text, readers
//!   or files.
//! - Surface source failures as `PlanSourceError`; the engine never sees
//!   partial data.
//!
//! # Invariants
//! - Decoding is all-or-nothing: any I/O or JSON error yields no rows.

use crate::model::entry::RawEntry;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Default plan file name next to the presentation assets.
pub const DEFAULT_PLAN_FILE: &str = "master_plan.json";

pub type PlanSourceResult<T> = Result<T, PlanSourceError>;

/// Source-unavailable failures. The previous snapshot stays visible.
#[derive(Debug)]
pub enum PlanSourceError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
}

impl Display for PlanSourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read plan `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid plan JSON: {err}"),
        }
    }
}

impl Error for PlanSourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for PlanSourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Decodes plan rows from JSON text.
pub fn parse_plan_json(text: &str) -> PlanSourceResult<Vec<RawEntry>> {
    Ok(serde_json::from_str(text)?)
}

/// Decodes plan rows from any reader.
pub fn read_plan<R: Read>(reader: R) -> PlanSourceResult<Vec<RawEntry>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads and decodes the plan file at `path`.
pub fn read_plan_file(path: impl AsRef<Path>) -> PlanSourceResult<Vec<RawEntry>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        error!("event=plan_read module=source status=error kind={:?}", source.kind());
        PlanSourceError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let rows = read_plan(BufReader::new(file)).inspect_err(|err| {
        error!("event=plan_parse module=source status=error reason={err}");
    })?;
    info!("event=plan_read module=source status=ok rows={}", rows.len());
    Ok(rows)
}
