//! Organization listing

use anyhow::Result;
use colored::Colorize;
use tabled::Tabled;

use report_lib::aggregate::breakdown_by_dimension;
use report_lib::{Aggregate, Dimension, QueryParams, Window};

use crate::client::ApiClient;
use crate::output::{print_info, OutputFormat};

/// Row for the organizations table
#[derive(Tabled)]
struct OrganizationRow {
    #[tabled(rename = "Organization")]
    name: String,
}

/// List organizations with allocation data over the last 30 days.
///
/// This feeds the same names the dashboard offers in its organization
/// filter dropdown.
pub async fn list_organizations(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let params = QueryParams::new(
        Window::Last30Days,
        Aggregate::dimension(Dimension::Organization),
    )
    .accumulate();

    let response = client.allocation(&params).await?;
    let breakdown = breakdown_by_dimension(response.accumulated()?);
    let names: Vec<&String> = breakdown.costs.keys().collect();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
        OutputFormat::Table => {
            println!("{}", "Organizations".bold());
            println!("{}", "=".repeat(50));

            if names.is_empty() {
                print_info("No organizations found");
                return Ok(());
            }

            let rows: Vec<OrganizationRow> = names
                .iter()
                .map(|name| OrganizationRow {
                    name: name.to_string(),
                })
                .collect();
            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
        }
    }

    Ok(())
}
