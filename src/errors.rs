use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures from partitioning the dataset or writing a subset to disk.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("selection index {index} is out of range for a dataset of {len} records")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write JSON to {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
