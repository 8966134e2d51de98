/// Data layer: typed records, loading, memoization, filtering, and the
/// plain-data projections the UI draws from.
///
/// Architecture:
/// ```text
///  market_share.csv   plans.json   competitors.json
///        │                 │              │
///        ▼                 ▼              ▼
///   ┌─────────────────────────────────────────┐
///   │  loader   parse file → Vec<Record>       │
///   └─────────────────────────────────────────┘
///        │
///        ▼
///   ┌─────────────────────────────────────────┐
///   │  cache    one SourceCache per file       │  (store bundles the three)
///   └─────────────────────────────────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌────────────┐
///   │  filter   │ ───▶ │ projection │  pie slices, table rows, text
///   └──────────┘      └────────────┘
/// ```

pub mod cache;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod projection;
pub mod store;
