// File: crates/dashboard-render-skia/src/lib.rs
// Summary: Skia rendering backend for dashboard widgets (figure extraction, PNG raster, Document).

pub mod figure;
pub mod theme;
pub mod render;
pub mod document;

pub use figure::{Bounds, Figure, Trace, TraceKind};
pub use theme::Theme;
pub use render::{render_png, Insets, RenderError, RenderOptions};
pub use document::SkiaDocument;
