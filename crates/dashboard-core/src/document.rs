// File: crates/dashboard-core/src/document.rs
// Summary: Rendering adapter trait (the page) and an in-memory implementation.
// Notes:
// - The controller only talks to the page through `Document`. A browser
//   binding, a PNG writer and the in-memory model below all implement it.

use std::collections::BTreeMap;

use crate::form::{FormVisibility, SubmitControl};
use crate::notice::{Notice, NoticeId};
use crate::spec::ChartSpec;
use crate::widget::{WidgetDescription, WidgetId};

/// Options forwarded to the chart drawing call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawOptions {
    pub responsive: bool,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self { responsive: true }
    }
}

/// The page the controller renders into.
pub trait Document {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Append an (empty) widget container with its title and remove control.
    fn mount_widget(&mut self, widget: &WidgetDescription) -> Result<(), Self::Error>;
    /// Delete a widget's subtree. Unknown ids are ignored.
    fn remove_widget(&mut self, id: &WidgetId);
    /// Draw a chart into an already mounted container.
    fn draw_chart(&mut self, id: &WidgetId, spec: &ChartSpec, opts: DrawOptions) -> Result<(), Self::Error>;

    fn set_form_visibility(&mut self, visibility: FormVisibility);
    fn set_submit_control(&mut self, control: &SubmitControl);

    fn show_notice(&mut self, notice: &Notice);
    /// Remove a notice. Unknown ids are ignored.
    fn hide_notice(&mut self, id: NoticeId);
}

#[derive(Debug, thiserror::Error)]
pub enum MemoryDocumentError {
    #[error("widget container '{0}' is not mounted")]
    NotMounted(WidgetId),
    #[error("widget container '{0}' already exists")]
    Duplicate(WidgetId),
}

/// A mounted widget as the in-memory page sees it.
#[derive(Clone, Debug, PartialEq)]
pub struct MountedWidget {
    pub title: String,
    /// Spec and options of the last draw, `None` until drawn.
    pub drawn: Option<(ChartSpec, DrawOptions)>,
}

/// Plain data model of the page, used headless and in tests.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    widgets: BTreeMap<WidgetId, MountedWidget>,
    order: Vec<WidgetId>,
    notices: Vec<Notice>,
    pub visibility: FormVisibility,
    pub submit: SubmitControl,
    /// Every submit-control state ever applied, oldest first.
    pub submit_history: Vec<SubmitControl>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn widget(&self, id: &WidgetId) -> Option<&MountedWidget> {
        self.widgets.get(id)
    }

    /// Widget ids in page order.
    pub fn widget_ids(&self) -> &[WidgetId] {
        &self.order
    }

    pub fn widget_count(&self) -> usize {
        self.order.len()
    }

    /// Notices in page order (top first).
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

impl Document for MemoryDocument {
    type Error = MemoryDocumentError;

    fn mount_widget(&mut self, widget: &WidgetDescription) -> Result<(), Self::Error> {
        if self.widgets.contains_key(&widget.id) {
            return Err(MemoryDocumentError::Duplicate(widget.id.clone()));
        }
        self.widgets.insert(widget.id.clone(), MountedWidget { title: widget.title.clone(), drawn: None });
        self.order.push(widget.id.clone());
        Ok(())
    }

    fn remove_widget(&mut self, id: &WidgetId) {
        if self.widgets.remove(id).is_some() {
            self.order.retain(|w| w != id);
        }
    }

    fn draw_chart(&mut self, id: &WidgetId, spec: &ChartSpec, opts: DrawOptions) -> Result<(), Self::Error> {
        let slot = self.widgets.get_mut(id).ok_or_else(|| MemoryDocumentError::NotMounted(id.clone()))?;
        slot.drawn = Some((spec.clone(), opts));
        Ok(())
    }

    fn set_form_visibility(&mut self, visibility: FormVisibility) {
        self.visibility = visibility;
    }

    fn set_submit_control(&mut self, control: &SubmitControl) {
        self.submit = control.clone();
        self.submit_history.push(control.clone());
    }

    fn show_notice(&mut self, notice: &Notice) {
        self.notices.insert(0, notice.clone());
    }

    fn hide_notice(&mut self, id: NoticeId) {
        self.notices.retain(|n| n.id != id);
    }
}
