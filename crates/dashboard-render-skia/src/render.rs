// File: crates/dashboard-render-skia/src/render.rs
// Summary: Headless PNG rendering of a Figure using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::figure::{Bounds, Figure, Trace, TraceKind};
use crate::theme::Theme;

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 480;

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Default for Insets {
    fn default() -> Self {
        Self { left: 72, right: 24, top: 48, bottom: 56 }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create {0}x{1} raster surface")]
    Surface(i32, i32),
    #[error("encode PNG failed")]
    Encode,
    #[error("widget '{0}' is not mounted")]
    NotMounted(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// Plot rectangle in pixels.
#[derive(Clone, Copy, Debug)]
struct Plot {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}

impl Plot {
    fn scale_x(&self, bounds: &Bounds, x: f64) -> f32 {
        let span = (bounds.x_max - bounds.x_min).max(1e-9);
        self.l + ((x - bounds.x_min) / span) as f32 * (self.r - self.l)
    }

    fn scale_y(&self, bounds: &Bounds, y: f64) -> f32 {
        let span = (bounds.y_max - bounds.y_min).max(1e-9);
        self.b - ((y - bounds.y_min) / span) as f32 * (self.b - self.t)
    }
}

/// Render `fig` to PNG bytes.
pub fn render_png(fig: &Figure, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or(RenderError::Surface(opts.width, opts.height))?;
    let canvas = surface.canvas();
    let theme = &opts.theme;

    canvas.clear(theme.background);

    let plot = Plot {
        l: opts.insets.left as f32,
        t: opts.insets.top as f32,
        r: (opts.width - opts.insets.right) as f32,
        b: (opts.height - opts.insets.bottom) as f32,
    };

    if opts.draw_labels {
        draw_text(canvas, &fig.title, (plot.l, plot.t - 18.0), 18.0, theme.title);
    }

    if fig.is_pie() {
        for trace in &fig.traces {
            draw_pie(canvas, &plot, trace, theme);
        }
    } else if let Some(bounds) = fig.bounds() {
        draw_grid(canvas, &plot, theme);
        draw_axes(canvas, &plot, fig, opts);
        let bar_traces = fig.traces.iter().filter(|t| t.kind == TraceKind::Bar).count().max(1);
        let mut bar_slot = 0;
        for (i, trace) in fig.traces.iter().enumerate() {
            let color = theme.color(i);
            match trace.kind {
                TraceKind::Line => draw_line(canvas, &plot, &bounds, trace, color),
                TraceKind::Markers => draw_markers(canvas, &plot, &bounds, trace, color),
                TraceKind::Bar => {
                    draw_bars(canvas, &plot, &bounds, trace, color, bar_slot, bar_traces);
                    bar_slot += 1;
                }
                TraceKind::Pie => {}
            }
        }
    } else {
        draw_grid(canvas, &plot, theme);
        draw_axes(canvas, &plot, fig, opts);
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(RenderError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

// ---- helpers ----------------------------------------------------------------

fn linspace(start: f32, end: f32, steps: usize) -> impl Iterator<Item = f32> {
    let step = (end - start) / (steps.max(2) as f32 - 1.0);
    (0..steps.max(2)).map(move |i| start + step * i as f32)
}

fn draw_text(canvas: &skia::Canvas, text: &str, at: (f32, f32), size: f32, color: skia::Color) {
    if text.is_empty() {
        return;
    }
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(size);
    canvas.draw_str(text, at, &font, &paint);
}

fn draw_grid(canvas: &skia::Canvas, plot: &Plot, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for x in linspace(plot.l, plot.r, 10) {
        canvas.draw_line((x, plot.t), (x, plot.b), &paint);
    }
    for y in linspace(plot.t, plot.b, 6) {
        canvas.draw_line((plot.l, y), (plot.r, y), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, plot: &Plot, fig: &Figure, opts: &RenderOptions) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(opts.theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    canvas.draw_line((plot.l, plot.b), (plot.r, plot.b), &axis_paint);
    canvas.draw_line((plot.l, plot.t), (plot.l, plot.b), &axis_paint);

    if opts.draw_labels {
        draw_text(canvas, &fig.x_label, (plot.r - 80.0, plot.b + 24.0), 14.0, opts.theme.axis_label);
        draw_text(canvas, &fig.y_label, (plot.l - 56.0, plot.t - 4.0), 14.0, opts.theme.axis_label);
    }
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn draw_line(canvas: &skia::Canvas, plot: &Plot, bounds: &Bounds, trace: &Trace, color: skia::Color) {
    let data = &trace.points;
    if data.len() < 2 {
        draw_markers(canvas, plot, bounds, trace, color);
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((plot.scale_x(bounds, x0), plot.scale_y(bounds, y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((plot.scale_x(bounds, x), plot.scale_y(bounds, y)));
    }
    canvas.draw_path(&path, &stroke(color, 2.0));
}

fn draw_markers(canvas: &skia::Canvas, plot: &Plot, bounds: &Bounds, trace: &Trace, color: skia::Color) {
    let paint = fill(color);
    for &(x, y) in &trace.points {
        canvas.draw_circle((plot.scale_x(bounds, x), plot.scale_y(bounds, y)), 3.5, &paint);
    }
}

/// Grouped bars: each bar trace takes one sub-slot of the unit slot around x.
fn draw_bars(
    canvas: &skia::Canvas,
    plot: &Plot,
    bounds: &Bounds,
    trace: &Trace,
    color: skia::Color,
    slot: usize,
    slots: usize,
) {
    let paint = fill(color);
    let unit_px = (plot.scale_x(bounds, 1.0) - plot.scale_x(bounds, 0.0)).abs();
    let group_px = (unit_px * 0.8).max(3.0);
    let bar_px = group_px / slots as f32;
    let zero = plot.scale_y(bounds, 0.0);

    for &(x, y) in &trace.points {
        let left = plot.scale_x(bounds, x) - group_px * 0.5 + bar_px * slot as f32;
        let top_y = plot.scale_y(bounds, y);
        let rect = skia::Rect::from_ltrb(left, top_y.min(zero), left + bar_px, top_y.max(zero).max(top_y.min(zero) + 1.0));
        canvas.draw_rect(rect, &paint);
    }
}

fn draw_pie(canvas: &skia::Canvas, plot: &Plot, trace: &Trace, theme: &Theme) {
    let total: f64 = trace.points.iter().map(|p| p.1).sum();
    if total <= 0.0 {
        return;
    }
    let cx = (plot.l + plot.r) * 0.5;
    let cy = (plot.t + plot.b) * 0.5;
    let radius = ((plot.r - plot.l).min(plot.b - plot.t) * 0.5).max(1.0);
    let oval = skia::Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);

    let mut start = -90.0f32;
    for &(idx, value) in &trace.points {
        let sweep = (value / total * 360.0) as f32;
        canvas.draw_arc(oval, start, sweep, true, &fill(theme.color(idx as usize)));
        start += sweep;
    }
    canvas.draw_circle((cx, cy), radius, &stroke(theme.background, 1.0));
}
