use thiserror::Error;

use super::loader::{COL_LAT, COL_LON};
use super::model::{Dataset, PeriodLabel, RawRecord, Record};

#[derive(Error, Debug, PartialEq)]
pub enum NormalizeError {
    #[error("row {row}: unrecognized period '{value}'")]
    UnrecognizedPeriod { row: usize, value: String },
    #[error("row {row}: column '{column}' value '{value}' is not a number")]
    InvalidCoordinate {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Drop `Unknown` rows, then attach a typed [`Period`](super::model::Period)
/// and numeric coordinates to the rest.
///
/// Input order is preserved. Dropped rows are never inspected further, so
/// their coordinate cells may be blank. A period that is neither known nor
/// the sentinel, or a kept row with a bad coordinate, aborts normalisation
/// with the offending row.
pub fn normalize(rows: Vec<RawRecord>) -> Result<Dataset, NormalizeError> {
    let total = rows.len();
    let mut records = Vec::with_capacity(total);

    for raw in rows {
        let period = match PeriodLabel::classify(&raw.period) {
            PeriodLabel::Known(p) => p,
            PeriodLabel::Unknown => continue,
            PeriodLabel::Unrecognized(value) => {
                return Err(NormalizeError::UnrecognizedPeriod {
                    row: raw.row,
                    value,
                })
            }
        };
        records.push(Record {
            lon: parse_coordinate(&raw.lon, raw.row, COL_LON)?,
            lat: parse_coordinate(&raw.lat, raw.row, COL_LAT)?,
            identifier: raw.identifier,
            name: raw.name,
            site_type: raw.site_type,
            period,
        });
    }

    log::info!(
        "Kept {} of {} rows ({} with unknown period dropped)",
        records.len(),
        total,
        total - records.len()
    );
    Ok(Dataset::from_records(records))
}

fn parse_coordinate(s: &str, row: usize, column: &'static str) -> Result<f64, NormalizeError> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| NormalizeError::InvalidCoordinate {
            row,
            column,
            value: s.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Period;

    fn raw(row: usize, period: &str) -> RawRecord {
        RawRecord {
            row,
            identifier: format!("ID{row}"),
            name: format!("Site {row}"),
            site_type: "Cairn".to_string(),
            period: period.to_string(),
            lon: "-4.0".to_string(),
            lat: "52.0".to_string(),
        }
    }

    #[test]
    fn unknown_rows_are_dropped() {
        let rows = vec![
            raw(1, "Roman"),
            raw(2, "Unknown"),
            raw(3, "unknown"),
            raw(4, "Iron Age"),
            raw(5, "Unknown"),
        ];
        let n = rows.len();
        let ds = normalize(rows).unwrap();

        assert_eq!(ds.len(), n - 3);
        assert!(ds
            .records()
            .iter()
            .all(|r| r.period == Period::Roman || r.period == Period::IronAge));
    }

    #[test]
    fn coordinates_are_parsed() {
        let ds = normalize(vec![raw(1, "Roman")]).unwrap();
        assert_eq!((ds.records()[0].lon, ds.records()[0].lat), (-4.0, 52.0));
    }

    #[test]
    fn unknown_rows_with_blank_coordinates_are_dropped() {
        let mut lost = raw(2, "Unknown");
        lost.lon.clear();
        lost.lat.clear();

        let ds = normalize(vec![raw(1, "Roman"), lost]).unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn kept_row_with_bad_coordinate_is_reported() {
        let mut bad = raw(2, "Roman");
        bad.lat = "north".to_string();

        let err = normalize(vec![raw(1, "Roman"), bad]).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::InvalidCoordinate {
                row: 2,
                column: COL_LAT,
                value: "north".to_string()
            }
        );
    }

    #[test]
    fn input_order_is_preserved() {
        let ds = normalize(vec![raw(1, "Modern"), raw(2, "Neolithic"), raw(3, "Roman")]).unwrap();
        let ids: Vec<&str> = ds.records().iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(ids, ["ID1", "ID2", "ID3"]);
    }

    #[test]
    fn unrecognized_period_fails_fast() {
        let err = normalize(vec![raw(1, "Roman"), raw(2, "Tudor"), raw(3, "Jurassic")]).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::UnrecognizedPeriod {
                row: 2,
                value: "Tudor".to_string()
            }
        );
    }

    #[test]
    fn all_unknown_yields_empty_dataset() {
        let ds = normalize(vec![raw(1, "Unknown"), raw(2, "Unknown")]).unwrap();
        assert!(ds.is_empty());
    }
}
