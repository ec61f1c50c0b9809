//! Cost breakdown by a label dimension

use anyhow::Result;
use colored::Colorize;
use tabled::Tabled;

use report_lib::aggregate::breakdown_by_dimension;
use report_lib::{Aggregate, Dimension, QueryParams, Window};

use crate::client::ApiClient;
use crate::output::{color_cost, print_info, OutputFormat};

/// Row for the breakdown table
#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

/// Show the accumulated cost per value of one breakdown dimension.
///
/// Values exceeding the configured spend threshold for the dimension are
/// highlighted with their overflow amount.
pub async fn show_breakdown(
    client: &ApiClient,
    dimension: Dimension,
    window: Window,
    org: Option<String>,
    threshold: Option<f64>,
    format: OutputFormat,
) -> Result<()> {
    let params = QueryParams::new(window, Aggregate::dimension(dimension))
        .accumulate()
        .with_organization(org);

    let response = client.allocation(&params).await?;
    let breakdown = breakdown_by_dimension(response.accumulated()?);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        }
        OutputFormat::Table => {
            println!("{}", format!("Cost Usage - {}", dimension).bold());
            println!("{}", "=".repeat(50));
            println!("Window:                 {}", window.to_string().cyan());
            println!();

            if breakdown.is_empty() {
                print_info("No billable entries for this window");
                return Ok(());
            }

            let rows: Vec<BreakdownRow> = breakdown
                .costs
                .iter()
                .map(|(value, cost)| BreakdownRow {
                    value: value.clone(),
                    cost: color_cost(*cost, threshold),
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
