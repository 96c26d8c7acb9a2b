// File: crates/dashboard-core/src/form.rs
// Summary: Chart form fields, Y-column visibility rule, and submit control state.

use crate::chart::{ChartRequest, ChartType};
use crate::types::{LOADING_LABEL, SUBMIT_LABEL};

/// Raw form values keyed the way the page names its inputs
/// (`chartType`, `xColumn`, `yColumn`, `colorColumn`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartForm {
    pub chart_type: String,
    pub x_column: String,
    pub y_column: String,
    pub color_column: Option<String>,
}

impl ChartForm {
    /// Look up a field by its input name. Unknown names yield `None`.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "chartType" => Some(&self.chart_type),
            "xColumn" => Some(&self.x_column),
            "yColumn" => Some(&self.y_column),
            "colorColumn" => self.color_column.as_deref(),
            _ => None,
        }
    }

    /// Set a field by input name; returns false for names the form does not have.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        match name {
            "chartType" => self.chart_type = value,
            "xColumn" => self.x_column = value,
            "yColumn" => self.y_column = value,
            "colorColumn" => self.color_column = Some(value),
            _ => return false,
        }
        true
    }

    /// Serialize into a request. The Y column is carried even when the chart
    /// type ignores it.
    pub fn to_request(&self) -> ChartRequest {
        ChartRequest {
            chart_type: ChartType::from(self.chart_type.as_str()),
            x_column: self.x_column.clone(),
            y_column: self.y_column.clone(),
            color_column: self.color_column.clone().unwrap_or_default(),
        }
    }
}

/// Whether the Y-column input group should be shown for `chart_type`.
pub fn y_column_visible(chart_type: &ChartType) -> bool {
    chart_type.uses_y_column()
}

/// Display state of the form's optional inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormVisibility {
    pub y_column_group: bool,
}

impl Default for FormVisibility {
    fn default() -> Self {
        Self { y_column_group: true }
    }
}

impl FormVisibility {
    pub fn for_chart_type(chart_type: &ChartType) -> Self {
        Self { y_column_group: y_column_visible(chart_type) }
    }
}

/// Submit button model: label plus enabled flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self::idle(SUBMIT_LABEL)
    }
}

impl SubmitControl {
    pub fn idle(label: impl Into<String>) -> Self {
        Self { label: label.into(), disabled: false }
    }

    /// Switch to the loading state, returning the label to restore afterwards.
    pub fn begin_loading(&mut self) -> String {
        self.disabled = true;
        std::mem::replace(&mut self.label, LOADING_LABEL.to_string())
    }

    pub fn restore(&mut self, label: String) {
        self.label = label;
        self.disabled = false;
    }

    pub fn is_loading(&self) -> bool {
        self.disabled
    }
}
