//! Query parameter construction for the cost-reporting API

use serde::{Deserialize, Serialize};

/// Label used for organization filtering
pub const ORGANIZATION_LABEL: &str = "dominodatalab_com_organization_name";

/// Labels forming the composite execution key, in aggregation order
pub const EXECUTION_LABELS: [&str; 4] = [
    "dominodatalab_com_workload_id",
    "dominodatalab_com_workload_type",
    "dominodatalab_com_starting_user_username",
    "dominodatalab_com_project_id",
];

/// Reporting window accepted by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Window {
    Last30Days,
    Last15Days,
    LastWeek,
    Today,
}

impl Window {
    /// Wire value of the `window` query parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            Window::Last30Days => "30d",
            Window::Last15Days => "15d",
            Window::LastWeek => "lastweek",
            Window::Today => "today",
        }
    }

    /// Whether the non-accumulated series for this window spans
    /// multiple calendar days and should be rolled up per day.
    /// `today` is the only sub-daily selection and keeps its
    /// per-window resolution.
    pub fn rolls_up_to_days(&self) -> bool {
        !matches!(self, Window::Today)
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Window::Last30Days => "Last 30 days",
            Window::Last15Days => "Last 15 days",
            Window::LastWeek => "Last week",
            Window::Today => "Today",
        };
        write!(f, "{}", name)
    }
}

/// Breakdown dimension, mapped to the Kubernetes label it aggregates by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    ExecutionType,
    TopProjects,
    User,
    Organization,
}

impl Dimension {
    /// The label the API groups by for this dimension
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::ExecutionType => "dominodatalab_com_workload_type",
            Dimension::TopProjects => "dominodatalab_com_project_name",
            Dimension::User => "dominodatalab_com_starting_user_username",
            Dimension::Organization => ORGANIZATION_LABEL,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Dimension::ExecutionType => "Execution Type",
            Dimension::TopProjects => "Top Projects",
            Dimension::User => "User",
            Dimension::Organization => "Organization",
        };
        write!(f, "{}", name)
    }
}

/// Aggregation requested from the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregate {
    /// Group by asset category (`aggregate=category`)
    Category,
    /// Group by one or more labels (`aggregate=label:a,label:b`)
    Labels(Vec<String>),
}

impl Aggregate {
    /// Group by a single breakdown dimension
    pub fn dimension(dimension: Dimension) -> Self {
        Aggregate::Labels(vec![dimension.label().to_string()])
    }

    /// Group by the composite execution key
    pub fn executions() -> Self {
        Aggregate::Labels(EXECUTION_LABELS.iter().map(|l| l.to_string()).collect())
    }

    fn as_param(&self) -> String {
        match self {
            Aggregate::Category => "category".to_string(),
            Aggregate::Labels(labels) => labels
                .iter()
                .map(|label| format!("label:{}", label))
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// Query parameters for an allocation or asset request
#[derive(Debug, Clone)]
pub struct QueryParams {
    pub window: Window,
    pub aggregate: Aggregate,
    pub accumulate: bool,
    /// Restrict results to one organization
    pub organization: Option<String>,
}

impl QueryParams {
    pub fn new(window: Window, aggregate: Aggregate) -> Self {
        Self {
            window,
            aggregate,
            accumulate: false,
            organization: None,
        }
    }

    pub fn accumulate(mut self) -> Self {
        self.accumulate = true;
        self
    }

    pub fn with_organization(mut self, organization: Option<String>) -> Self {
        self.organization = organization.filter(|org| !org.is_empty());
        self
    }

    /// Render as key/value pairs for the request query string
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("window".to_string(), self.window.as_param().to_string()),
            ("aggregate".to_string(), self.aggregate.as_param()),
        ];
        if self.accumulate {
            query.push(("accumulate".to_string(), "true".to_string()));
        }
        if let Some(org) = &self.organization {
            query.push((
                "filter".to_string(),
                format!("label[{}]:\"{}\"", ORGANIZATION_LABEL, org),
            ));
        }
        query
    }
}
