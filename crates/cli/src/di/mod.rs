use pacrunch_application::use_cases::{
    ConfigureResolverUseCase, CrunchLogUseCase, ResolveHostnameUseCase, ResolverSetup,
    RunPipelineUseCase,
};
use pacrunch_domain::Config;
use pacrunch_infrastructure::dataset::{CsvDatasetReader, CsvDatasetWriter};
use pacrunch_infrastructure::dns::PtrHostnameResolver;
use pacrunch_infrastructure::system::SystemResolverInstaller;
use std::sync::Arc;

pub struct Services {
    pub resolver: ResolverSetup,
    pub crunch_log: Arc<CrunchLogUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> Self {
        let installer = Arc::new(SystemResolverInstaller::new());
        let resolver = ConfigureResolverUseCase::new(installer).execute(&config.dns_lookup.server);

        let hostname_resolver = Arc::new(PtrHostnameResolver::new(
            &resolver.active,
            config.dns_lookup.timeout_ms,
        ));
        let resolve_hostname = Arc::new(ResolveHostnameUseCase::new(hostname_resolver));
        let pipeline = Arc::new(RunPipelineUseCase::new(resolve_hostname));

        let crunch_log = Arc::new(CrunchLogUseCase::new(
            Arc::new(CsvDatasetReader::new()),
            Arc::new(CsvDatasetWriter::new()),
            pipeline,
        ));

        Self {
            resolver,
            crunch_log,
        }
    }
}
