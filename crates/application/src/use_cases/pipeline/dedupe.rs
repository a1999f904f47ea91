use pacrunch_domain::{Dataset, DomainError};
use rustc_hash::FxHashSet;

/// Keep the first row for each distinct value of `column`, in input
/// order. Missing and empty cells share one key. Returns the number of rows
/// removed.
pub fn dedupe_rows(dataset: &mut Dataset, column: &str) -> Result<usize, DomainError> {
    let index = dataset
        .column_index(column)
        .ok_or_else(|| DomainError::MissingColumn {
            stage: "dedupe",
            column: column.to_string(),
        })?;

    let mut seen: FxHashSet<Option<String>> = FxHashSet::default();
    let removed = dataset.retain_rows(|row| {
        let key = row.get(index).filter(|value| !value.is_empty());
        seen.insert(key.map(str::to_owned))
    });

    Ok(removed)
}
