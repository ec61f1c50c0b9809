//! Overall cost per asset category

use anyhow::Result;
use colored::Colorize;
use tabled::Tabled;

use report_lib::aggregate::overall_cost;
use report_lib::{Aggregate, QueryParams, Window};

use crate::client::ApiClient;
use crate::output::{format_cost, OutputFormat};

/// Row for the category totals table
#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

/// Show the accumulated cost per asset category plus the grand total
pub async fn show_overall(
    client: &ApiClient,
    window: Window,
    org: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let params = QueryParams::new(window, Aggregate::Category)
        .accumulate()
        .with_organization(org);

    let response = client.assets(&params).await?;
    let overall = overall_cost(response.accumulated()?);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&overall)?);
        }
        OutputFormat::Table => {
            println!("{}", "Overall Cost".bold());
            println!("{}", "=".repeat(50));
            println!("Window:                 {}", window.to_string().cyan());
            println!(
                "{}  {}",
                "Total:".bold(),
                format_cost(overall.total()).bold()
            );
            println!();

            let rows: Vec<CategoryRow> = overall
                .costs
                .iter()
                .map(|(category, cost)| CategoryRow {
                    category: category.clone(),
                    cost: format_cost(*cost),
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
