/// Data layer: mock series, core types, and alignment.
///
/// Architecture:
/// ```text
///   built-in JSON
///        │
///        ▼
///   ┌──────────────┐
///   │ SampleStore   │  parse once → Vec<Series>
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  align    │  union of years → AlignedChartData (zero-filled rows)
///   └──────────┘
/// ```

pub mod align;
pub mod model;
pub mod sample;
