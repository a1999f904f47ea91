use crate::use_cases::dns::ResolveHostnameUseCase;
use pacrunch_domain::config::DnsLookupConfig;
use pacrunch_domain::{Dataset, DomainError, Resolution};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentStats {
    pub resolved: usize,
    pub unresolved: usize,
    /// Rows answered from the per-run memo instead of a fresh lookup.
    pub memo_hits: usize,
}

/// Resolve `column_from` row by row and write the display text into
/// `column_to`. One lookup per row unless `cache_results` is set.
pub async fn enrich_hostnames(
    dataset: &mut Dataset,
    config: &DnsLookupConfig,
    resolver: &ResolveHostnameUseCase,
) -> Result<EnrichmentStats, DomainError> {
    let inputs: Vec<String> = dataset
        .column_values(&config.column_from)
        .ok_or_else(|| DomainError::MissingColumn {
            stage: "dns_lookup",
            column: config.column_from.clone(),
        })?
        .map(|value| value.unwrap_or_default().to_string())
        .collect();

    let mut stats = EnrichmentStats::default();
    let mut memo: FxHashMap<String, Resolution> = FxHashMap::default();
    let mut outputs = Vec::with_capacity(inputs.len());

    for input in inputs {
        let cached = if config.cache_results {
            memo.get(&input).cloned()
        } else {
            None
        };

        let resolution = match cached {
            Some(resolution) => {
                stats.memo_hits += 1;
                resolution
            }
            None => {
                let resolution = resolver.execute(&input).await;
                if config.cache_results {
                    memo.insert(input, resolution.clone());
                }
                resolution
            }
        };

        if resolution.is_resolved() {
            stats.resolved += 1;
        } else {
            stats.unresolved += 1;
        }

        outputs.push(Some(resolution.display_value().to_string()));
    }

    dataset.set_column(&config.column_to, outputs);
    Ok(stats)
}
