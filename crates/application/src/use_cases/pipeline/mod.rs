pub mod dedupe;
pub mod drop_columns;
pub mod drop_empty;
pub mod enrich;
pub mod report;
pub mod run_pipeline;

pub use enrich::EnrichmentStats;
pub use report::PipelineReport;
pub use run_pipeline::RunPipelineUseCase;
