use std::io;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use thiserror::Error;

use super::model::RawRecord;

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

pub const COL_IDENTIFIER: &str = "SAMNumber";
pub const COL_NAME: &str = "Name";
pub const COL_SITE_TYPE: &str = "SiteType";
pub const COL_PERIOD: &str = "Period";
pub const COL_LON: &str = "lon";
pub const COL_LAT: &str = "lat";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// Header positions of the required columns.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    identifier: usize,
    name: usize,
    site_type: usize,
    period: usize,
    lon: usize,
    lat: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |col: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == col)
                .ok_or(LoadError::MissingColumn(col))
        };
        Ok(ColumnIndex {
            identifier: find(COL_IDENTIFIER)?,
            name: find(COL_NAME)?,
            site_type: find(COL_SITE_TYPE)?,
            period: find(COL_PERIOD)?,
            lon: find(COL_LON)?,
            lat: find(COL_LAT)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load monument rows from a CSV file with a header row.
///
/// Required columns: `SAMNumber`, `Name`, `SiteType`, `Period`, `lon`, `lat`.
/// Other columns are ignored. Every column is checked before any row is read.
/// Cells are kept as text; see [`normalize`](super::filter::normalize).
pub fn load_csv(path: &Path) -> Result<Vec<RawRecord>, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    let records = read_csv(file)?;
    log::info!("Loaded {} rows from {}", records.len(), path.display());
    Ok(records)
}

/// Parse monument rows from any CSV reader.
pub fn read_csv<R: io::Read>(input: R) -> Result<Vec<RawRecord>, LoadError> {
    let mut reader = csv::Reader::from_reader(input);
    let cols = ColumnIndex::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row = i + 1;
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        records.push(RawRecord {
            row,
            identifier: cell(cols.identifier).to_string(),
            name: cell(cols.name).to_string(),
            site_type: cell(cols.site_type).to_string(),
            period: cell(cols.period).to_string(),
            lon: cell(cols.lon).to_string(),
            lat: cell(cols.lat).to_string(),
        });
    }

    Ok(records)
}
