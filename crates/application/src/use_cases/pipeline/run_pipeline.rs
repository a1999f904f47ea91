use super::dedupe::dedupe_rows;
use super::drop_columns::drop_columns;
use super::drop_empty::drop_empty_columns;
use super::enrich::enrich_hostnames;
use super::report::PipelineReport;
use crate::use_cases::dns::ResolveHostnameUseCase;
use pacrunch_domain::{Config, Dataset, DomainError};
use std::sync::Arc;
use tracing::{debug, info};

/// Applies the four stages in fixed order: empty-column drop, explicit
/// column drop, dedupe, DNS enrichment. Each stage sees the previous
/// stage's output.
pub struct RunPipelineUseCase {
    resolve_hostname: Arc<ResolveHostnameUseCase>,
}

impl RunPipelineUseCase {
    pub fn new(resolve_hostname: Arc<ResolveHostnameUseCase>) -> Self {
        Self { resolve_hostname }
    }

    pub async fn execute(
        &self,
        mut dataset: Dataset,
        config: &Config,
    ) -> Result<(Dataset, PipelineReport), DomainError> {
        config.dedupe.validate()?;
        config.dns_lookup.validate()?;

        let mut report = PipelineReport {
            rows_in: dataset.len(),
            ..Default::default()
        };

        if config.drop.empty_enabled {
            report.empty_columns_dropped = drop_empty_columns(&mut dataset);
            info!(
                dropped = report.empty_columns_dropped.len(),
                "Dropped empty columns"
            );
            debug!(columns = ?report.empty_columns_dropped, "Empty columns");
        } else {
            debug!("Empty column drop disabled");
        }

        if config.drop.columns_enabled {
            report.columns_dropped = drop_columns(&mut dataset, &config.drop.columns);
            info!(
                dropped = report.columns_dropped.len(),
                configured = config.drop.columns.len(),
                "Dropped configured columns"
            );
        } else {
            debug!("Column drop disabled");
        }

        if config.dedupe.enabled {
            report.duplicate_rows_removed = dedupe_rows(&mut dataset, &config.dedupe.column)?;
            info!(
                column = %config.dedupe.column,
                removed = report.duplicate_rows_removed,
                "Removed duplicate rows"
            );
        } else {
            debug!("Deduplication disabled");
        }

        if config.dns_lookup.enabled {
            info!(
                from = %config.dns_lookup.column_from,
                to = %config.dns_lookup.column_to,
                rows = dataset.len(),
                "Resolving hostnames"
            );
            let stats =
                enrich_hostnames(&mut dataset, &config.dns_lookup, &self.resolve_hostname).await?;
            info!(
                resolved = stats.resolved,
                unresolved = stats.unresolved,
                "Hostname lookup finished"
            );
            report.enrichment = Some(stats);
        } else {
            debug!("DNS hostname lookup disabled");
        }

        report.rows_out = dataset.len();
        Ok((dataset, report))
    }
}
