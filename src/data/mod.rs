/// Data layer: core types, loading, and querying.
///
/// Architecture:
/// ```text
///   champions.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ChampionDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ ChampionDataset │  Vec<Champion>, role index
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  case-insensitive scans → matching champions
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod query;
