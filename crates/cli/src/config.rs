//! CLI configuration loaded from the environment

use anyhow::{Context, Result};
use report_lib::Dimension;
use serde::Deserialize;

/// Credentials and spend thresholds, read from `KUBECOST_*` variables
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Basic-auth username for the cost API
    #[serde(default)]
    pub username: Option<String>,

    /// Basic-auth password for the cost API
    #[serde(default)]
    pub password: Option<String>,

    /// Overall spend ceiling drawn against the daily series
    #[serde(default = "default_execution_cost_max")]
    pub execution_cost_max: f64,

    /// Per-project spend ceiling for breakdown highlighting
    #[serde(default = "default_project_max_spend")]
    pub project_max_spend: f64,

    /// Per-organization spend ceiling for breakdown highlighting
    #[serde(default = "default_org_max_spend")]
    pub org_max_spend: f64,
}

fn default_execution_cost_max() -> f64 {
    300.0
}

fn default_project_max_spend() -> f64 {
    8.0
}

fn default_org_max_spend() -> f64 {
    20.0
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            execution_cost_max: default_execution_cost_max(),
            project_max_spend: default_project_max_spend(),
            org_max_spend: default_org_max_spend(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from `KUBECOST_*` environment variables
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("KUBECOST"))
            .build()
            .context("Failed to read environment configuration")?;

        Ok(config.try_deserialize().unwrap_or_default())
    }

    /// Spend threshold for a breakdown dimension, if one is configured
    pub fn spend_threshold(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::TopProjects => Some(self.project_max_spend),
            Dimension::Organization => Some(self.org_max_spend),
            Dimension::ExecutionType | Dimension::User => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.execution_cost_max, 300.0);
        assert_eq!(config.project_max_spend, 8.0);
        assert_eq!(config.org_max_spend, 20.0);
        assert!(config.username.is_none());
    }

    #[test]
    fn test_thresholds_only_for_project_and_org() {
        let config = ReportConfig::default();
        assert_eq!(config.spend_threshold(Dimension::TopProjects), Some(8.0));
        assert_eq!(config.spend_threshold(Dimension::Organization), Some(20.0));
        assert_eq!(config.spend_threshold(Dimension::User), None);
        assert_eq!(config.spend_threshold(Dimension::ExecutionType), None);
    }
}
