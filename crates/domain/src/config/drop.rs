use serde::{Deserialize, Serialize};

/// Column removal settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DropConfig {
    /// Drop every column that is empty in all rows.
    pub empty_enabled: bool,

    pub columns_enabled: bool,

    #[serde(default)]
    pub columns: Vec<String>,
}
