pub mod csv_reader;
pub mod csv_writer;

pub use csv_reader::CsvDatasetReader;
pub use csv_writer::CsvDatasetWriter;
