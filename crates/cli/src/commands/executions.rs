//! Execution cost table

use anyhow::Result;
use colored::Colorize;
use tabled::Tabled;

use report_lib::aggregate::{execution_table, ExecutionRow};
use report_lib::{Aggregate, QueryParams, Window};

use crate::client::ApiClient;
use crate::output::{format_cost, print_info, print_warning, OutputFormat};

/// Row for the executions table, mirroring the dashboard columns
#[derive(Tabled)]
struct ExecutionTableRow {
    #[tabled(rename = "TYPE")]
    workload_type: String,
    #[tabled(rename = "USER")]
    user: String,
    #[tabled(rename = "START")]
    start: String,
    #[tabled(rename = "END")]
    end: String,
    #[tabled(rename = "CPU_COST")]
    cpu_cost: String,
    #[tabled(rename = "GPU_COST")]
    gpu_cost: String,
    #[tabled(rename = "COMPUTE_COST")]
    compute_cost: String,
    #[tabled(rename = "COMPUTE_WASTE")]
    compute_waste: String,
    #[tabled(rename = "STORAGE_COST")]
    storage_cost: String,
    #[tabled(rename = "WORKLOAD_ID")]
    workload_id: String,
    #[tabled(rename = "PROJECT_ID")]
    project_id: String,
}

impl From<&ExecutionRow> for ExecutionTableRow {
    fn from(row: &ExecutionRow) -> Self {
        Self {
            workload_type: row.workload_type.clone(),
            user: row.user.clone(),
            start: row.start.clone(),
            end: row.end.clone(),
            cpu_cost: format_cost(row.cpu_cost),
            gpu_cost: format_cost(row.gpu_cost),
            compute_cost: format_cost(row.compute_cost),
            compute_waste: row.compute_waste.clone(),
            storage_cost: format_cost(row.storage_cost),
            workload_id: row.workload_id.clone(),
            project_id: row.project_id.clone(),
        }
    }
}

/// Show the per-execution cost table for the window
pub async fn show_executions(
    client: &ApiClient,
    window: Window,
    org: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let params = QueryParams::new(window, Aggregate::executions())
        .accumulate()
        .with_organization(org);

    let response = client.allocation(&params).await?;
    let table = execution_table(response.accumulated()?)?;

    for error in &table.malformed {
        print_warning(&error.to_string());
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&table.rows)?);
        }
        OutputFormat::Table => {
            println!("{}", "Executions".bold());
            println!("{}", "=".repeat(50));
            println!("Window:                 {}", window.to_string().cyan());
            println!();

            if table.rows.is_empty() {
                print_info("No executions for this window");
                return Ok(());
            }

            let rows: Vec<ExecutionTableRow> =
                table.rows.iter().map(ExecutionTableRow::from).collect();
            let rendered = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", rendered);
        }
    }

    Ok(())
}
