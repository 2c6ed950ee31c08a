use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::errors::SelectError;
use crate::partition::{partition, Split};
use crate::record::Record;
use crate::writer::write_records;

pub const FILTERED_OUTPUT_FILE: &str = "filtered_original_clickbait_prompts.json";
pub const SELECTED_OUTPUT_FILE: &str = "selected_clickbait_prompts.json";

// Destinations for the two subsets
#[derive(Debug, Clone)]
pub struct Outputs {
    pub remainder: PathBuf,
    pub selected: PathBuf,
}

impl Outputs {
    pub fn in_dir(dir: &Path) -> Self {
        Outputs {
            remainder: dir.join(FILTERED_OUTPUT_FILE),
            selected: dir.join(SELECTED_OUTPUT_FILE),
        }
    }
}

/// Partition `dataset` by `indices`, then write the remainder and the
/// selection to their files.
///
/// An index error returns before any file is touched. The two writes are
/// independent: the selection is still written when the remainder fails, and
/// the first failure is returned afterwards.
pub fn run(dataset: &[Record], indices: &[usize], outputs: &Outputs) -> Result<Split<Record>, SelectError> {
    let mut seen = HashSet::new();
    for &idx in indices {
        if !seen.insert(idx) {
            warn!("Duplicate selection index {idx}: selected more than once, excluded once");
        }
    }

    let split = partition(dataset, indices)?;
    info!(
        "Partitioned {} records: {} selected, {} remaining",
        dataset.len(),
        split.selected.len(),
        split.remainder.len()
    );

    let remainder = write_subset("remainder", &outputs.remainder, &split.remainder);
    let selected = write_subset("selected", &outputs.selected, &split.selected);
    remainder.and(selected)?;

    Ok(split)
}

fn write_subset(stage: &str, path: &Path, records: &[Record]) -> Result<(), SelectError> {
    match write_records(path, records) {
        Ok(()) => {
            info!("Wrote {} {stage} records to {}", records.len(), path.display());
            Ok(())
        }
        Err(e) => {
            error!("Writing {stage} subset failed: {e}");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample() -> Vec<Record> {
        vec![
            Record::tagged("one", &["Clickbait"]),
            Record::completed("two", &["Unsafe", "reason"]),
            Record::tagged("three", &["Non-Clickbait\n"]),
        ]
    }

    #[test]
    fn writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let outputs = Outputs::in_dir(dir.path());
        let split = run(&sample(), &[2, 0], &outputs).unwrap();

        let selected: Vec<Record> =
            serde_json::from_str(&fs::read_to_string(&outputs.selected).unwrap()).unwrap();
        let remainder: Vec<Record> =
            serde_json::from_str(&fs::read_to_string(&outputs.remainder).unwrap()).unwrap();
        assert_eq!(selected, split.selected);
        assert_eq!(remainder, split.remainder);
        assert_eq!(remainder, vec![sample()[1].clone()]);
    }

    #[test]
    fn index_error_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let outputs = Outputs::in_dir(dir.path());
        let err = run(&sample(), &[0, 3], &outputs).unwrap_err();

        assert!(matches!(err, SelectError::IndexOutOfRange { index: 3, len: 3 }));
        assert!(!outputs.remainder.exists());
        assert!(!outputs.selected.exists());
    }

    #[test]
    fn failed_remainder_write_still_writes_selection() {
        let dir = tempfile::tempdir().unwrap();
        let outputs = Outputs {
            remainder: dir.path().join("missing").join(FILTERED_OUTPUT_FILE),
            selected: dir.path().join(SELECTED_OUTPUT_FILE),
        };
        let err = run(&sample(), &[1], &outputs).unwrap_err();

        assert!(matches!(err, SelectError::Io { .. }));
        assert!(!outputs.remainder.exists());
        let selected: Vec<Record> =
            serde_json::from_str(&fs::read_to_string(&outputs.selected).unwrap()).unwrap();
        assert_eq!(selected, vec![sample()[1].clone()]);
    }
}
