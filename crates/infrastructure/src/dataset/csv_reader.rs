// ============================================================
// CSV READER
// ============================================================
// Header row names the columns; empty fields become missing cells.

use csv::{ReaderBuilder, StringRecord};
use pacrunch_application::ports::DatasetReader;
use pacrunch_domain::{Dataset, DomainError};
use std::io::Read;
use tracing::debug;

const UTF8_BOM: char = '\u{feff}';

pub struct CsvDatasetReader {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvDatasetReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvDatasetReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse CSV from any reader; `source` only labels errors.
    pub fn read_from<R: Read>(&self, input: R, source: &str) -> Result<Dataset, DomainError> {
        let read_error = |e: csv::Error| DomainError::DatasetRead(source.to_string(), e.to_string());

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(input);

        let headers: Vec<String> = reader
            .headers()
            .map_err(read_error)?
            .iter()
            .enumerate()
            .map(|(index, name)| {
                if index == 0 {
                    name.trim_start_matches(UTF8_BOM).to_string()
                } else {
                    name.to_string()
                }
            })
            .collect();

        let mut dataset = Dataset::new(headers)?;

        let mut record = StringRecord::new();
        while reader.read_record(&mut record).map_err(read_error)? {
            let cells = record
                .iter()
                .map(|field| (!field.is_empty()).then(|| field.to_string()))
                .collect();
            dataset.push_row(cells)?;
        }

        debug!(
            source = %source,
            rows = dataset.len(),
            columns = dataset.columns().len(),
            "CSV parsed"
        );

        Ok(dataset)
    }
}

impl DatasetReader for CsvDatasetReader {
    fn read(&self, source: &str) -> Result<Dataset, DomainError> {
        let file = std::fs::File::open(source)
            .map_err(|e| DomainError::DatasetRead(source.to_string(), e.to_string()))?;
        self.read_from(file, source)
    }
}
