// File: crates/dashboard-cli/src/cli.rs
// Summary: Command-line arguments for the chart-dashboard binary.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use dashboard_client::config::{BASE_URL_ENV, DEFAULT_BASE_URL};
use dashboard_core::ChartForm;

/// One chart to request, written `TYPE:X[:Y[:COLOR]]`, e.g. `bar:Region:Sales`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartArg(pub ChartForm);

impl FromStr for ChartArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(4, ':');
        let chart_type = parts.next().unwrap_or_default().trim();
        let x_column = parts.next().unwrap_or_default().trim();
        if chart_type.is_empty() || x_column.is_empty() {
            return Err(format!("expected TYPE:X[:Y[:COLOR]], got '{s}'"));
        }
        let y_column = parts.next().unwrap_or_default().trim();
        let color = parts.next().map(str::trim).filter(|c| !c.is_empty());
        Ok(ChartArg(ChartForm {
            chart_type: chart_type.to_string(),
            x_column: x_column.to_string(),
            y_column: y_column.to_string(),
            color_column: color.map(str::to_string),
        }))
    }
}

/// Generate charts for an uploaded data file and render them as PNG widgets.
#[derive(Parser, Debug)]
#[command(name = "chart-dashboard")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Chart backend origin
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Dashboard page path; its last segment names the data file
    #[arg(long, value_name = "PATH")]
    pub page: String,

    /// Chart to generate (repeatable): TYPE:X[:Y[:COLOR]]
    #[arg(long = "chart", value_name = "SPEC", required = true)]
    pub charts: Vec<ChartArg>,

    /// Directory for rendered widgets
    #[arg(long, short, default_value = "target/charts")]
    pub out: PathBuf,

    /// Color theme: light or dark
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}
