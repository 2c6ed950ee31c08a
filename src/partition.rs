use std::collections::HashSet;

use crate::errors::SelectError;

// Result of splitting a dataset by selection indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<T> {
    // One entry per selection index, in index-list order
    pub selected: Vec<T>,
    // Everything not selected, in dataset order
    pub remainder: Vec<T>,
}

/// Split `dataset` into the records named by `indices` and the rest.
///
/// `selected` follows the order of `indices`, not dataset order. A repeated
/// index yields the record once per occurrence in `selected` and removes it
/// from `remainder` once. Every index is bounds-checked before any record is
/// cloned.
pub fn partition<T: Clone>(dataset: &[T], indices: &[usize]) -> Result<Split<T>, SelectError> {
    if let Some(&index) = indices.iter().find(|&&i| i >= dataset.len()) {
        return Err(SelectError::IndexOutOfRange {
            index,
            len: dataset.len(),
        });
    }

    let selected: Vec<T> = indices.iter().map(|&i| dataset[i].clone()).collect();

    let chosen: HashSet<usize> = indices.iter().copied().collect();
    let remainder: Vec<T> = dataset
        .iter()
        .enumerate()
        .filter(|(i, _)| !chosen.contains(i))
        .map(|(_, rec)| rec.clone())
        .collect();

    Ok(Split { selected, remainder })
}
