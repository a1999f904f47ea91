//! In-memory tabular dataset.
//!
//! A header of unique column names plus rows holding one cell per column.
//! A cell is either text or missing (`None`); an empty string is treated the
//! same as missing wherever emptiness matters.

use rustc_hash::FxHashSet;

use crate::errors::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Option<String>>,
}

impl Row {
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|cell| cell.as_deref())
    }

    pub fn is_blank(&self, index: usize) -> bool {
        self.get(index).map_or(true, str::is_empty)
    }

    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }

    fn retain_indices(&mut self, keep: &[bool]) {
        let mut position = 0;
        self.cells.retain(|_| {
            let kept = keep[position];
            position += 1;
            kept
        });
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Result<Self, DomainError> {
        let mut seen = FxHashSet::default();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(DomainError::DuplicateColumn(column.clone()));
            }
        }

        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Build a dataset from string literals; empty strings become missing cells.
    #[cfg(any(test, feature = "test-util"))]
    pub fn from_rows<C, R>(columns: &[C], rows: &[R]) -> Result<Self, DomainError>
    where
        C: AsRef<str>,
        R: AsRef<[&'static str]>,
    {
        let mut dataset = Self::new(columns.iter().map(|c| c.as_ref().to_string()).collect())?;
        for row in rows {
            dataset.push_row(
                row.as_ref()
                    .iter()
                    .map(|value| (!value.is_empty()).then(|| value.to_string()))
                    .collect(),
            )?;
        }
        Ok(dataset)
    }

    /// Append a row. Short rows are padded with missing cells.
    pub fn push_row(&mut self, mut cells: Vec<Option<String>>) -> Result<(), DomainError> {
        if cells.len() > self.columns.len() {
            return Err(DomainError::RowTooLong {
                row: self.rows.len() + 1,
                found: cells.len(),
                expected: self.columns.len(),
            });
        }

        cells.resize(self.columns.len(), None);
        self.rows.push(Row { cells });
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cells of one column in row order, `None` if the column does not exist.
    pub fn column_values(&self, name: &str) -> Option<impl Iterator<Item = Option<&str>> + '_> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row.get(index)))
    }

    /// Keep the columns for which `keep` returns true, preserving order.
    /// Returns the names of the removed columns.
    pub fn retain_columns<F>(&mut self, mut keep: F) -> Vec<String>
    where
        F: FnMut(usize, &str) -> bool,
    {
        let mask: Vec<bool> = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, name)| keep(index, name))
            .collect();

        if mask.iter().all(|kept| *kept) {
            return Vec::new();
        }

        let mut removed = Vec::new();
        let mut kept_columns = Vec::with_capacity(self.columns.len());
        for (column, kept) in self.columns.drain(..).zip(&mask) {
            if *kept {
                kept_columns.push(column);
            } else {
                removed.push(column);
            }
        }
        self.columns = kept_columns;

        for row in &mut self.rows {
            row.retain_indices(&mask);
        }

        removed
    }

    /// Keep the rows for which `keep` returns true, preserving order.
    /// Returns how many rows were removed.
    pub fn retain_rows<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&Row) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(keep);
        before - self.rows.len()
    }

    /// Write `values` into column `name`, overwriting it in place if it
    /// exists and appending it as the last column otherwise. Rows beyond the
    /// end of `values` get a missing cell.
    pub fn set_column<I>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let index = match self.column_index(name) {
            Some(index) => index,
            None => {
                self.columns.push(name.to_string());
                for row in &mut self.rows {
                    row.cells.push(None);
                }
                self.columns.len() - 1
            }
        };

        let mut values = values.into_iter();
        for row in &mut self.rows {
            row.cells[index] = values.next().flatten();
        }
    }
}
