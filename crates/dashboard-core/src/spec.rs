// File: crates/dashboard-core/src/spec.rs
// Summary: Opaque chart specification ({data, layout}) and response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DashboardError;

/// Chart specification handed to the renderer untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(default = "empty_array")]
    pub data: Value,
    #[serde(default = "empty_object")]
    pub layout: Value,
}

fn empty_array() -> Value {
    Value::Array(Vec::new())
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self { data: empty_array(), layout: empty_object() }
    }
}

impl ChartSpec {
    pub fn new(data: Value, layout: Value) -> Self {
        Self { data, layout }
    }

    /// Trace objects in `data`; empty when `data` is not an array.
    pub fn traces(&self) -> &[Value] {
        self.data.as_array().map(Vec::as_slice).unwrap_or(&[])
    }

    /// `layout.title`, either a plain string or `{text: ...}`.
    pub fn layout_title(&self) -> Option<&str> {
        match self.layout.get("title")? {
            Value::String(s) => Some(s),
            other => other.get("text")?.as_str(),
        }
    }

    /// Decode a figure that is either an object or a JSON string of one.
    pub fn from_figure(figure: Value) -> Result<Self, DashboardError> {
        let figure = match figure {
            Value::String(encoded) => serde_json::from_str(&encoded)?,
            other => other,
        };
        if !figure.is_object() {
            return Err(DashboardError::InvalidChart("figure is not an object".into()));
        }
        Ok(serde_json::from_value(figure)?)
    }
}

/// Success body: `{"chart": <figure>}`.
#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub chart: Value,
}

impl ChartEnvelope {
    pub fn into_spec(self) -> Result<ChartSpec, DashboardError> {
        ChartSpec::from_figure(self.chart)
    }
}

/// Failure body: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}
