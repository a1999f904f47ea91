use super::enrich::EnrichmentStats;

/// What each stage did, for the caller to log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    pub rows_in: usize,
    pub rows_out: usize,
    pub empty_columns_dropped: Vec<String>,
    pub columns_dropped: Vec<String>,
    pub duplicate_rows_removed: usize,
    pub enrichment: Option<EnrichmentStats>,
}

impl PipelineReport {
    pub fn columns_removed(&self) -> usize {
        self.empty_columns_dropped.len() + self.columns_dropped.len()
    }
}
