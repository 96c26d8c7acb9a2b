// File: crates/dashboard-core/src/title.rs
// Summary: Human-readable widget titles derived from a chart request.

use crate::chart::{ChartRequest, ChartType};

/// Derive the widget title. Pure function of the request.
pub fn chart_title(req: &ChartRequest) -> String {
    let x = req.x_column.as_str();
    let y = req.y_column.as_str();
    match &req.chart_type {
        ChartType::Bar => match req.y() {
            Some(y) => format!("{y} by {x}"),
            None => format!("Count of {x}"),
        },
        ChartType::Line => format!("{y} over {x}"),
        ChartType::Scatter => format!("{x} vs {y}"),
        ChartType::Pie | ChartType::Histogram => format!("Distribution of {x}"),
        ChartType::Other(_) => "Chart".to_string(),
    }
}
