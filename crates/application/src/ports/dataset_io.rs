use pacrunch_domain::{Dataset, DomainError};

pub trait DatasetReader: Send + Sync {
    fn read(&self, source: &str) -> Result<Dataset, DomainError>;
}

pub trait DatasetWriter: Send + Sync {
    fn write(&self, dataset: &Dataset, destination: &str) -> Result<(), DomainError>;
}
