/// Data layer: catalogue loading and set comparison.
///
/// Architecture:
/// ```text
///   cat1.csv        cat2.csv
///       │               │
///       ▼               ▼
///   ┌──────────────────────────┐
///   │  loader                   │  lines   → BTreeSet<String>
///   │                           │  records → BTreeSet<MutationRecord>
///   └──────────────────────────┘
///       │
///       ▼
///   ┌──────────┐
///   │ compare   │  SetComparison: counts, left-only, right-only
///   └──────────┘
/// ```

pub mod compare;
pub mod loader;
pub mod model;
