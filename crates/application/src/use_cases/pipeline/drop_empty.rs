use pacrunch_domain::Dataset;

/// Remove every column that is blank in all rows. The decision is
/// dataset-wide: a single non-empty cell keeps the column. With no rows at
/// all every column counts as blank.
pub fn drop_empty_columns(dataset: &mut Dataset) -> Vec<String> {
    let mut populated = vec![false; dataset.columns().len()];
    for row in dataset.rows() {
        for (index, seen) in populated.iter_mut().enumerate() {
            if !*seen && !row.is_blank(index) {
                *seen = true;
            }
        }
    }

    dataset.retain_columns(|index, _| populated[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_only_fully_empty_columns() {
        let mut dataset = Dataset::from_rows(
            &["a", "b", "c"],
            &[["1", "", ""], ["2", "", "x"], ["3", "", ""]],
        )
        .unwrap();

        let removed = drop_empty_columns(&mut dataset);

        assert_eq!(removed, vec!["b".to_string()]);
        assert_eq!(dataset.columns(), &["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_no_rows_drops_everything() {
        let mut dataset = Dataset::new(vec!["a".to_string(), "b".to_string()]).unwrap();
        let removed = drop_empty_columns(&mut dataset);
        assert_eq!(removed.len(), 2);
        assert!(dataset.columns().is_empty());
    }
}
