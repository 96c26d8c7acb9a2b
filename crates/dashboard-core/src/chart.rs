// File: crates/dashboard-core/src/chart.rs
// Summary: Chart type enum and the request payload sent to the chart backend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Chart kinds the backend knows how to build.
///
/// Names match exactly. Anything else, including other casings, is kept
/// verbatim in `Other` and reaches the backend unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartType {
    Bar,
    Line,
    Scatter,
    Pie,
    Histogram,
    Other(String),
}

impl ChartType {
    pub fn as_str(&self) -> &str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::Scatter => "scatter",
            ChartType::Pie => "pie",
            ChartType::Histogram => "histogram",
            ChartType::Other(name) => name,
        }
    }

    /// Pie charts and histograms are built from the X column alone.
    pub fn uses_y_column(&self) -> bool {
        !matches!(self, ChartType::Pie | ChartType::Histogram)
    }
}

impl FromStr for ChartType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "bar" => ChartType::Bar,
            "line" => ChartType::Line,
            "scatter" => ChartType::Scatter,
            "pie" => ChartType::Pie,
            "histogram" => ChartType::Histogram,
            _ => ChartType::Other(s.to_string()),
        })
    }
}

impl From<String> for ChartType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(t) => t,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for ChartType {
    fn from(s: &str) -> Self {
        ChartType::from(s.to_string())
    }
}

impl From<ChartType> for String {
    fn from(t: ChartType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/generate_chart/{filename}`.
///
/// Empty optional columns go over the wire as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub chart_type: ChartType,
    pub x_column: String,
    #[serde(default, with = "empty_as_null")]
    pub y_column: String,
    #[serde(default, with = "empty_as_null")]
    pub color_column: String,
}

impl ChartRequest {
    pub fn new(chart_type: impl Into<ChartType>, x_column: impl Into<String>) -> Self {
        Self {
            chart_type: chart_type.into(),
            x_column: x_column.into(),
            y_column: String::new(),
            color_column: String::new(),
        }
    }

    pub fn with_y(mut self, y_column: impl Into<String>) -> Self {
        self.y_column = y_column.into();
        self
    }

    pub fn with_color(mut self, color_column: impl Into<String>) -> Self {
        self.color_column = color_column.into();
        self
    }

    pub fn y(&self) -> Option<&str> {
        non_empty(&self.y_column)
    }

    pub fn color(&self) -> Option<&str> {
        non_empty(&self.color_column)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

mod empty_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &str, s: S) -> Result<S::Ok, S::Error> {
        if value.is_empty() { s.serialize_none() } else { s.serialize_str(value) }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
    }
}
