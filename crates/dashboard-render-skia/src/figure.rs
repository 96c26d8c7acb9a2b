// File: crates/dashboard-render-skia/src/figure.rs
// Summary: Extracts drawable series from plotly-style chart specs ({data, layout}).
// Notes:
// - Only plain JSON arrays are read. Anything else (typed-array blobs, nested
//   objects) yields an empty series rather than an error.
// - Categorical X values are placed at their index; labels are kept.

use dashboard_core::ChartSpec;
use serde_json::Value;

/// Number of equal-width bins used for histogram traces.
pub const HISTOGRAM_BINS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceKind {
    Line,
    Markers,
    Bar,
    Pie,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    pub kind: TraceKind,
    pub name: Option<String>,
    /// (x, y) for XY kinds; (index, value) for pie slices.
    pub points: Vec<(f64, f64)>,
    /// Category labels, aligned with `points` when present.
    pub labels: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub traces: Vec<Trace>,
}

/// Plot bounds in data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Figure {
    /// Build a figure from a spec. `fallback_title` is used when the layout has none.
    pub fn from_spec(spec: &ChartSpec, fallback_title: &str) -> Self {
        let title = spec.layout_title().unwrap_or(fallback_title).to_string();
        Self {
            title,
            x_label: axis_title(&spec.layout, "xaxis"),
            y_label: axis_title(&spec.layout, "yaxis"),
            traces: spec.traces().iter().filter_map(parse_trace).collect(),
        }
    }

    pub fn is_pie(&self) -> bool {
        !self.traces.is_empty() && self.traces.iter().all(|t| t.kind == TraceKind::Pie)
    }

    /// Data bounds over all XY traces. Bars always include zero.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut it = self
            .traces
            .iter()
            .filter(|t| t.kind != TraceKind::Pie)
            .flat_map(|t| t.points.iter().map(move |p| (t.kind, *p)));
        let (kind, (x, y)) = it.next()?;
        let mut b = Bounds { x_min: x, x_max: x, y_min: y, y_max: y };
        let mut has_bars = kind == TraceKind::Bar;
        for (kind, (x, y)) in it {
            b.x_min = b.x_min.min(x);
            b.x_max = b.x_max.max(x);
            b.y_min = b.y_min.min(y);
            b.y_max = b.y_max.max(y);
            has_bars |= kind == TraceKind::Bar;
        }
        if has_bars {
            b.y_min = b.y_min.min(0.0);
            b.y_max = b.y_max.max(0.0);
            // leave half a slot either side so end bars are not clipped
            b.x_min -= 0.5;
            b.x_max += 0.5;
        }
        if b.x_max - b.x_min < 1e-9 {
            b.x_min -= 1.0;
            b.x_max += 1.0;
        }
        if b.y_max - b.y_min < 1e-9 {
            b.y_min -= 1.0;
            b.y_max += 1.0;
        }
        Some(b)
    }
}

fn axis_title(layout: &Value, axis: &str) -> String {
    let title = &layout[axis]["title"];
    title
        .as_str()
        .or_else(|| title["text"].as_str())
        .unwrap_or_default()
        .to_string()
}

fn parse_trace(trace: &Value) -> Option<Trace> {
    let kind = trace["type"].as_str().unwrap_or("scatter");
    let name = trace["name"].as_str().filter(|s| !s.is_empty()).map(str::to_string);
    let parsed = match kind {
        "scatter" | "scattergl" => {
            let mode = trace["mode"].as_str().unwrap_or("lines+markers");
            let kind = if mode.contains("lines") { TraceKind::Line } else { TraceKind::Markers };
            let (points, labels) = xy_points(&trace["x"], &trace["y"]);
            Trace { kind, name, points, labels }
        }
        "bar" => {
            let (points, labels) = xy_points(&trace["x"], &trace["y"]);
            Trace { kind: TraceKind::Bar, name, points, labels }
        }
        "histogram" => {
            let (points, labels) = histogram(&trace["x"]);
            Trace { kind: TraceKind::Bar, name, points, labels }
        }
        "pie" => {
            let (points, labels) = pie_slices(&trace["labels"], &trace["values"]);
            Trace { kind: TraceKind::Pie, name, points, labels }
        }
        _ => return None,
    };
    Some(parsed)
}

fn number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn label(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn array(v: &Value) -> &[Value] {
    v.as_array().map(Vec::as_slice).unwrap_or(&[])
}

/// Pair X and Y arrays. A missing X means index positions; non-numeric X
/// values switch the whole axis to index positions with labels.
fn xy_points(x: &Value, y: &Value) -> (Vec<(f64, f64)>, Vec<String>) {
    let xs = array(x);
    let ys = array(y);
    let numeric_x = !xs.is_empty() && xs.iter().all(|v| number(v).is_some());
    let labels = if numeric_x { Vec::new() } else { xs.iter().map(label).collect() };

    let points = ys
        .iter()
        .enumerate()
        .filter_map(|(i, yv)| {
            let y = number(yv)?;
            let x = if numeric_x { number(xs.get(i)?)? } else { i as f64 };
            Some((x, y))
        })
        .collect();
    (points, labels)
}

/// Bin numeric X into `HISTOGRAM_BINS` equal-width bins; categorical X is
/// counted per distinct value in first-seen order.
fn histogram(x: &Value) -> (Vec<(f64, f64)>, Vec<String>) {
    let xs = array(x);
    let numeric: Option<Vec<f64>> = xs.iter().map(number).collect();
    match numeric {
        Some(values) if !values.is_empty() => {
            let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let width = ((hi - lo) / HISTOGRAM_BINS as f64).max(1e-9);
            let mut counts = vec![0u32; HISTOGRAM_BINS];
            for v in values {
                let bin = (((v - lo) / width) as usize).min(HISTOGRAM_BINS - 1);
                counts[bin] += 1;
            }
            let points = counts.iter().enumerate().map(|(i, &c)| (i as f64, c as f64)).collect();
            let labels = (0..HISTOGRAM_BINS).map(|i| format!("{:.2}", lo + width * i as f64)).collect();
            (points, labels)
        }
        _ => count_categories(xs),
    }
}

fn pie_slices(labels: &Value, values: &Value) -> (Vec<(f64, f64)>, Vec<String>) {
    let names = array(labels);
    let vals = array(values);
    if vals.is_empty() {
        return count_categories(names);
    }
    let points = vals
        .iter()
        .enumerate()
        .filter_map(|(i, v)| number(v).filter(|n| *n > 0.0).map(|n| (i as f64, n)))
        .collect();
    (points, names.iter().map(label).collect())
}

fn count_categories(values: &[Value]) -> (Vec<(f64, f64)>, Vec<String>) {
    let mut labels: Vec<String> = Vec::new();
    let mut counts: Vec<f64> = Vec::new();
    for v in values {
        let name = label(v);
        match labels.iter().position(|l| *l == name) {
            Some(i) => counts[i] += 1.0,
            None => {
                labels.push(name);
                counts.push(1.0);
            }
        }
    }
    let points = counts.into_iter().enumerate().map(|(i, c)| (i as f64, c)).collect();
    (points, labels)
}
