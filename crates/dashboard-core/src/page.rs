// File: crates/dashboard-core/src/page.rs
// Summary: Page path helpers: target file name and endpoint path.

use crate::error::DashboardError;
use crate::types::GENERATE_CHART_PATH;

/// Final segment of the page path, e.g. `/dashboard/sales.csv` -> `sales.csv`.
/// Query strings and fragments are ignored.
pub fn file_name_from_path(path: &str) -> Result<&str, DashboardError> {
    let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(DashboardError::MissingFileName(path.to_string())),
    }
}

/// Endpoint path for generating a chart from `file_name`.
pub fn generate_chart_path(file_name: &str) -> String {
    format!("{GENERATE_CHART_PATH}/{file_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_segment() {
        assert_eq!(file_name_from_path("/dashboard/20240101_sales.csv").unwrap(), "20240101_sales.csv");
        assert_eq!(file_name_from_path("data.json").unwrap(), "data.json");
        assert_eq!(file_name_from_path("/dashboard/a.csv?tab=2#top").unwrap(), "a.csv");
    }

    #[test]
    fn empty_segment_is_rejected() {
        assert!(file_name_from_path("/").is_err());
        assert!(file_name_from_path("").is_err());
        assert!(file_name_from_path("/dashboard/").is_err());
    }

    #[test]
    fn endpoint() {
        assert_eq!(generate_chart_path("a.csv"), "/api/generate_chart/a.csv");
    }
}
