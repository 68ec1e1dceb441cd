//! Report configuration.

use derive_builder::Builder;

/// Configuration for duplicate reporting.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ReportConfig {
    /// Minimum members for a group to be reported.
    #[builder(default = "2")]
    pub min_group_size: usize,

    /// Maximum number of groups to report (0 = unlimited).
    #[builder(default = "0")]
    pub max_groups: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            min_group_size: 2,
            max_groups: 0,
        }
    }
}

impl ReportConfig {
    /// Create a new config builder.
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }
}
