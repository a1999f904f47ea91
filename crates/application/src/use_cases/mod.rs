pub mod crunch_log;
pub mod dns;
pub mod pipeline;

pub use crunch_log::CrunchLogUseCase;
pub use dns::{ConfigureResolverUseCase, ResolveHostnameUseCase, ResolverSetup};
pub use pipeline::{EnrichmentStats, PipelineReport, RunPipelineUseCase};
