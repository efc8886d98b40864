/// Data layer: core types, loading, and normalisation.
///
/// Architecture:
/// ```text
///  monuments.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<RawRecord>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  drop "Unknown", validate Period → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, typed chronological Period
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
