/// Data layer: core types, loading, and the per-panel computations.
///
/// Architecture:
/// ```text
///  medals .csv   competitions .csv
///        │              │
///        ▼              ▼
///   ┌──────────────────────┐
///   │        loader        │  parse + check headers → Dataset
///   └──────────────────────┘
///              │
///              ▼
///   ┌──────────────────────┐
///   │       Dataset        │  MedalTable, CompetitionTable (read-only)
///   └──────────────────────┘
///        │              │
///        ▼              ▼
///   ┌─────────┐  ┌──────────────┐
///   │ medals  │  │ competitions │  pure functions → derived views
///   └─────────┘  └──────────────┘
/// ```

pub mod competitions;
pub mod loader;
pub mod medals;
pub mod model;
pub mod stats;
