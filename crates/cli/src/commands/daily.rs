//! Cumulative daily cost series

use anyhow::Result;
use colored::Colorize;
use tabled::builder::Builder;

use report_lib::aggregate::{cumulative_daily_cost, DailyPoint};
use report_lib::{Aggregate, QueryParams, Window};

use crate::client::ApiClient;
use crate::output::{format_cost, print_info, OutputFormat};

/// Show the cumulative cost-by-category series for the window.
///
/// Rows whose running total exceeds `cost_max` are highlighted, mirroring
/// the spend ceiling drawn on the dashboard chart.
pub async fn show_daily(
    client: &ApiClient,
    window: Window,
    org: Option<String>,
    cost_max: f64,
    format: OutputFormat,
) -> Result<()> {
    let params = QueryParams::new(window, Aggregate::Category).with_organization(org);

    let response = client.assets(&params).await?;
    let points = cumulative_daily_cost(&response.data, window)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&points)?);
        }
        OutputFormat::Table => {
            println!("{}", "Overall Cost (Cumulative)".bold());
            println!("{}", "=".repeat(50));
            println!("Window:                 {}", window.to_string().cyan());
            println!();

            if points.is_empty() {
                print_info("No cost data for this window");
                return Ok(());
            }

            println!("{}", render_table(&points, window, cost_max));
            println!(
                "Spend ceiling: {}",
                format_cost(cost_max).dimmed()
            );
        }
    }

    Ok(())
}

/// Render the series with one column per category.
///
/// The running-total map only grows, so the last point carries every
/// category seen over the window.
fn render_table(points: &[DailyPoint], window: Window, cost_max: f64) -> String {
    let categories: Vec<&String> = points
        .last()
        .map(|point| point.costs.keys().collect())
        .unwrap_or_default();

    let timestamp_format = if window.rolls_up_to_days() {
        "%Y-%m-%d"
    } else {
        "%Y-%m-%d %H:%M"
    };

    let mut builder = Builder::default();
    let mut header = vec!["Date".to_string()];
    header.extend(categories.iter().map(|category| category.to_string()));
    header.push("Total".to_string());
    builder.push_record(header);

    for point in points {
        let mut row = vec![point.start.format(timestamp_format).to_string()];
        let mut total = 0.0;
        for category in &categories {
            let cost = point.costs.get(*category).copied().unwrap_or(0.0);
            total += cost;
            row.push(format_cost(cost));
        }
        let total_cell = if total > cost_max {
            format_cost(total).red().bold().to_string()
        } else {
            format_cost(total)
        };
        row.push(total_cell);
        builder.push_record(row);
    }

    builder
        .build()
        .with(tabled::settings::Style::rounded())
        .to_string()
}
