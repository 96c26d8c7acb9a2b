// File: crates/dashboard-render-skia/src/document.rs
// Summary: Document implementation that writes each widget to `<out_dir>/<id>.png`.
// Notes:
// - Form and submit-control state has no surface here; it is only traced.
// - Notices are emitted as log events.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use dashboard_core::{
    ChartSpec, Document, DrawOptions, FormVisibility, Notice, NoticeId, Severity, SubmitControl,
    WidgetDescription, WidgetId,
};
use tracing::{debug, info, warn};

use crate::figure::Figure;
use crate::render::{render_png, RenderError, RenderOptions};

pub struct SkiaDocument {
    out_dir: PathBuf,
    opts: RenderOptions,
    titles: HashMap<WidgetId, String>,
}

impl SkiaDocument {
    pub fn new(out_dir: impl Into<PathBuf>, opts: RenderOptions) -> Self {
        Self { out_dir: out_dir.into(), opts, titles: HashMap::new() }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Where the PNG for `id` lives once drawn.
    pub fn widget_path(&self, id: &WidgetId) -> PathBuf {
        self.out_dir.join(format!("{id}.png"))
    }

    /// Render options for one draw. A responsive draw fills the container
    /// (our configured size); otherwise the layout's own width/height win.
    fn options_for(&self, spec: &ChartSpec, draw: DrawOptions) -> RenderOptions {
        let mut opts = self.opts;
        if !draw.responsive {
            let dim = |key: &str| spec.layout[key].as_f64().filter(|v| *v >= 1.0).map(|v| v as i32);
            opts.width = dim("width").unwrap_or(opts.width);
            opts.height = dim("height").unwrap_or(opts.height);
        }
        opts
    }
}

impl Document for SkiaDocument {
    type Error = RenderError;

    fn mount_widget(&mut self, widget: &WidgetDescription) -> Result<(), Self::Error> {
        std::fs::create_dir_all(&self.out_dir)?;
        self.titles.insert(widget.id.clone(), widget.title.clone());
        debug!(id = %widget.id, title = %widget.title, "widget mounted");
        Ok(())
    }

    fn remove_widget(&mut self, id: &WidgetId) {
        if self.titles.remove(id).is_none() {
            return;
        }
        let path = self.widget_path(id);
        match std::fs::remove_file(&path) {
            Ok(()) => debug!(path = %path.display(), "widget image removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %path.display(), "could not remove widget image: {e}"),
        }
    }

    fn draw_chart(&mut self, id: &WidgetId, spec: &ChartSpec, draw: DrawOptions) -> Result<(), Self::Error> {
        let title = self.titles.get(id).ok_or_else(|| RenderError::NotMounted(id.to_string()))?;
        let fig = Figure::from_spec(spec, title);
        let bytes = render_png(&fig, &self.options_for(spec, draw))?;
        let path = self.widget_path(id);
        std::fs::write(&path, bytes)?;
        info!(%id, path = %path.display(), "chart written");
        Ok(())
    }

    fn set_form_visibility(&mut self, visibility: FormVisibility) {
        debug!(y_column = visibility.y_column_group, "form visibility");
    }

    fn set_submit_control(&mut self, control: &SubmitControl) {
        debug!(label = %control.label, disabled = control.disabled, "submit control");
    }

    fn show_notice(&mut self, notice: &Notice) {
        match notice.severity {
            Severity::Success => info!(notice = notice.id.get(), at = %notice.created_at, "{}", notice.message),
            Severity::Error => warn!(notice = notice.id.get(), at = %notice.created_at, "{}", notice.message),
        }
    }

    fn hide_notice(&mut self, id: NoticeId) {
        debug!(notice = id.get(), "notice hidden");
    }
}
