use super::pipeline::{PipelineReport, RunPipelineUseCase};
use crate::ports::{DatasetReader, DatasetWriter};
use pacrunch_domain::{Config, DomainError};
use std::sync::Arc;
use tracing::info;

/// Read the input file, run the pipeline, write the output file. Nothing is
/// written if any step fails.
pub struct CrunchLogUseCase {
    reader: Arc<dyn DatasetReader>,
    writer: Arc<dyn DatasetWriter>,
    pipeline: Arc<RunPipelineUseCase>,
}

impl CrunchLogUseCase {
    pub fn new(
        reader: Arc<dyn DatasetReader>,
        writer: Arc<dyn DatasetWriter>,
        pipeline: Arc<RunPipelineUseCase>,
    ) -> Self {
        Self {
            reader,
            writer,
            pipeline,
        }
    }

    pub async fn execute(&self, config: &Config) -> Result<PipelineReport, DomainError> {
        info!(input = %config.input, "Crunching log file");
        let dataset = self.reader.read(&config.input)?;
        info!(
            rows = dataset.len(),
            columns = dataset.columns().len(),
            "Log file loaded"
        );

        let (dataset, report) = self.pipeline.execute(dataset, config).await?;

        self.writer.write(&dataset, &config.output)?;
        info!(
            output = %config.output,
            rows = report.rows_out,
            columns = dataset.columns().len(),
            "Output file written"
        );

        Ok(report)
    }
}
