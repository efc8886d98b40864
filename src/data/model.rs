use std::fmt;

// ---------------------------------------------------------------------------
// Period – the ordered chronological domain
// ---------------------------------------------------------------------------

/// Chronological period of a monument, earliest first.
///
/// The derived `Ord` follows declaration order, so anything keyed by
/// `Period` (e.g. a `BTreeMap`) iterates chronologically rather than
/// alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Period {
    Prehistoric,
    Neolithic,
    BronzeAge,
    IronAge,
    Roman,
    EarlyMedieval,
    Medieval,
    PostMedieval,
    Victorian,
    Industrial,
    Modern,
}

impl Period {
    /// Every period in chronological order.
    pub const ALL: [Period; 11] = [
        Period::Prehistoric,
        Period::Neolithic,
        Period::BronzeAge,
        Period::IronAge,
        Period::Roman,
        Period::EarlyMedieval,
        Period::Medieval,
        Period::PostMedieval,
        Period::Victorian,
        Period::Industrial,
        Period::Modern,
    ];

    /// Label as it appears in the source table.
    pub fn label(self) -> &'static str {
        match self {
            Period::Prehistoric => "Prehistoric",
            Period::Neolithic => "Neolithic",
            Period::BronzeAge => "Bronze Age",
            Period::IronAge => "Iron Age",
            Period::Roman => "Roman",
            Period::EarlyMedieval => "Early Medieval",
            Period::Medieval => "Medieval",
            Period::PostMedieval => "Post Medieval",
            Period::Victorian => "Victorian",
            Period::Industrial => "Industrial",
            Period::Modern => "Modern",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// PeriodLabel – a raw Period cell, classified
// ---------------------------------------------------------------------------

/// Text used in the source table for records without a usable period.
pub const UNKNOWN_SENTINEL: &str = "Unknown";

/// Classification of a raw `Period` cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodLabel {
    Known(Period),
    /// The `Unknown` sentinel.
    Unknown,
    /// Neither a known period nor the sentinel.
    Unrecognized(String),
}

impl PeriodLabel {
    /// Classify a cell. Surrounding whitespace and ASCII case are ignored.
    pub fn classify(raw: &str) -> Self {
        let text = raw.trim();
        if text.eq_ignore_ascii_case(UNKNOWN_SENTINEL) {
            return PeriodLabel::Unknown;
        }
        match Period::ALL
            .iter()
            .find(|p| p.label().eq_ignore_ascii_case(text))
        {
            Some(p) => PeriodLabel::Known(*p),
            None => PeriodLabel::Unrecognized(raw.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// One row as read from the table, before the period is validated.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// 1-based data row number (header excluded), for error reporting.
    pub row: usize,
    pub identifier: String,
    pub name: String,
    pub site_type: String,
    pub period: String,
    /// Coordinate cells as text; only rows that survive normalisation are
    /// required to hold numbers.
    pub lon: String,
    pub lat: String,
}

/// A monument with a validated period.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub identifier: String,
    pub name: String,
    pub site_type: String,
    pub period: Period,
    pub lon: f64,
    pub lat: f64,
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// Normalised monuments in input order. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
