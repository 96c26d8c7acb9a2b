// File: crates/dashboard-core/src/types.rs
// Summary: Shared constants (timings, labels, messages).

use std::time::Duration;

/// Delay between mounting a widget and drawing into it.
pub const DRAW_DELAY: Duration = Duration::from_millis(100);
/// Lifetime of a notice before it is removed automatically.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Submit control label while idle.
pub const SUBMIT_LABEL: &str = "Generate Chart";
/// Submit control label while a request is in flight.
pub const LOADING_LABEL: &str = "Generating...";

pub const SUCCESS_MESSAGE: &str = "Chart generated successfully!";
pub const CLEAR_CONFIRM_PROMPT: &str = "Are you sure you want to clear all charts?";

/// Endpoint prefix; the target file name is appended as the last segment.
pub const GENERATE_CHART_PATH: &str = "/api/generate_chart";
