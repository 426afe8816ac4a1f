/// Data layer: survey schema, normalization, filtering and aggregation.
///
/// Architecture:
/// ```text
///   dados.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  csv → RawTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ normalize   │  drop, strip, bucket, rename, explode → SurveyTable
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐     ┌─────────┐
///   │  filter   │ ──▶ │  stats   │  grouped counts, shares, means
///   └──────────┘     └─────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod profile;
pub mod schema;
pub mod stats;
