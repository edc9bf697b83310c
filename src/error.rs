use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read catalogue {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Not valid CSV, or not valid UTF-8.
    #[error("failed to parse catalogue {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(
        "catalogue {} line {line}: expected at most {expected} fields, found {found}",
        path.display()
    )]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("catalogue {} has no '{column}' column", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
