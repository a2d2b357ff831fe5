/// Data layer: dataset types, loading, and section lookup.
///
/// Architecture:
/// ```text
///    programs.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ProgramCatalog (empty on failure)
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ ProgramCatalog  │  Vec<Program>, year → section → RawMetrics
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  lookup   │  (program, year) → aggregate section
///   └──────────┘
/// ```

pub mod loader;
pub mod lookup;
pub mod model;
