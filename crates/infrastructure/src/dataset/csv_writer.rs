use csv::WriterBuilder;
use pacrunch_application::ports::DatasetWriter;
use pacrunch_domain::{Dataset, DomainError};
use std::io::Write;

/// Writes the header and every row as UTF-8; missing cells become empty
/// fields.
pub struct CsvDatasetWriter {
    delimiter: u8,
}

impl Default for CsvDatasetWriter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvDatasetWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn write_to<W: Write>(
        &self,
        dataset: &Dataset,
        output: W,
        destination: &str,
    ) -> Result<(), DomainError> {
        let write_error =
            |e: csv::Error| DomainError::DatasetWrite(destination.to_string(), e.to_string());

        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(output);

        // Nothing meaningful to write without columns
        if dataset.columns().is_empty() {
            return Ok(());
        }

        writer.write_record(dataset.columns()).map_err(write_error)?;

        for row in dataset.rows() {
            writer
                .write_record(row.cells().iter().map(|cell| cell.as_deref().unwrap_or("")))
                .map_err(write_error)?;
        }

        writer
            .flush()
            .map_err(|e| DomainError::DatasetWrite(destination.to_string(), e.to_string()))
    }
}

impl DatasetWriter for CsvDatasetWriter {
    fn write(&self, dataset: &Dataset, destination: &str) -> Result<(), DomainError> {
        let file = std::fs::File::create(destination)
            .map_err(|e| DomainError::DatasetWrite(destination.to_string(), e.to_string()))?;
        self.write_to(dataset, file, destination)
    }
}
