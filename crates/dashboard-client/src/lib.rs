// File: crates/dashboard-client/src/lib.rs
// Summary: Async side of the chart dashboard: backend client and page controller.

pub mod api;
pub mod config;
pub mod controller;

pub use api::{ApiError, ChartApi, HttpChartApi};
pub use config::ClientConfig;
pub use controller::{DashboardController, DrawOutcome, SubmitError};
