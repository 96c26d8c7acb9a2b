// File: crates/dashboard-client/src/controller.rs
// Summary: Dashboard controller: form visibility, chart submission, widget lifecycle, notices.
// Notes:
// - All page state sits behind one mutex that is never held across an await.
// - Draws and notice expiries run as detached tokio tasks.

use std::sync::Arc;
use std::time::Duration;

use dashboard_core::types::{CLEAR_CONFIRM_PROMPT, SUCCESS_MESSAGE};
use dashboard_core::{
    file_name_from_path, ChartForm, ChartType, Confirm, DashboardError, Document, DrawOptions,
    FormVisibility, Notice, NoticeBoard, NoticeId, Severity, SubmitControl, WidgetBoard,
    WidgetDescription, WidgetId,
};
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::{ApiError, ChartApi};
use crate::config::ClientConfig;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Page(#[from] DashboardError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("could not place widget: {0}")]
    Render(String),
}

struct PageState<D> {
    board: WidgetBoard,
    notices: NoticeBoard,
    submit: SubmitControl,
    visibility: FormVisibility,
    doc: D,
}

impl<D: Document> PageState<D> {
    fn post_notice(&mut self, severity: Severity, message: String) -> NoticeId {
        let notice = self.notices.push(severity, message).clone();
        self.doc.show_notice(&notice);
        notice.id
    }

    fn drop_notice(&mut self, id: NoticeId) -> Option<Notice> {
        let notice = self.notices.dismiss(id)?;
        self.doc.hide_notice(id);
        Some(notice)
    }

    fn apply_submit(&mut self) {
        self.doc.set_submit_control(&self.submit);
    }
}

type Shared<D> = Arc<Mutex<PageState<D>>>;

/// What became of one deferred draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn,
    /// The widget was removed before its draw came due.
    Skipped,
    Failed(String),
}

/// Puts the submit control back on drop, so every exit from `submit`
/// (including a dropped future) restores it.
struct SubmitGuard<D: Document> {
    state: Shared<D>,
    label: Option<String>,
}

impl<D: Document> SubmitGuard<D> {
    fn engage(state: &Shared<D>) -> Self {
        let mut page = state.lock();
        let label = page.submit.begin_loading();
        page.apply_submit();
        Self { state: Arc::clone(state), label: Some(label) }
    }
}

impl<D: Document> Drop for SubmitGuard<D> {
    fn drop(&mut self) {
        if let Some(label) = self.label.take() {
            let mut page = self.state.lock();
            page.submit.restore(label);
            page.apply_submit();
        }
    }
}

/// Drives one dashboard page.
///
/// Submissions and notices schedule work with `tokio::spawn`, so those calls
/// must be made from within a Tokio runtime.
pub struct DashboardController<A, D> {
    api: A,
    state: Shared<D>,
    draws: Mutex<Vec<(WidgetId, JoinHandle<DrawOutcome>)>>,
    draw_delay: Duration,
    notice_ttl: Duration,
}

impl<A, D> DashboardController<A, D>
where
    A: ChartApi,
    D: Document + Send + 'static,
{
    pub fn new(api: A, doc: D, config: &ClientConfig) -> Self {
        let state = PageState {
            board: WidgetBoard::new(),
            notices: NoticeBoard::new(),
            submit: SubmitControl::default(),
            visibility: FormVisibility::default(),
            doc,
        };
        Self {
            api,
            state: Arc::new(Mutex::new(state)),
            draws: Mutex::new(Vec::new()),
            draw_delay: config.draw_delay,
            notice_ttl: config.notice_ttl,
        }
    }

    /// Push initial state to the document, as if the chart type had just changed.
    pub fn init(&self, chart_type: &ChartType) {
        self.on_chart_type_change(chart_type);
        self.state.lock().apply_submit();
    }

    /// Show or hide the Y-column group for `chart_type`.
    pub fn on_chart_type_change(&self, chart_type: &ChartType) -> FormVisibility {
        let visibility = FormVisibility::for_chart_type(chart_type);
        let mut page = self.state.lock();
        page.visibility = visibility;
        page.doc.set_form_visibility(visibility);
        visibility
    }

    /// Submit the form for the file named by `page_path`.
    ///
    /// Failures are reported to the user as notices; the returned error is
    /// informational and leaves the page usable.
    pub async fn submit(&self, form: &ChartForm, page_path: &str) -> Result<WidgetId, SubmitError> {
        let file_name = match file_name_from_path(page_path) {
            Ok(name) => name,
            Err(err) => {
                warn!(page_path, "cannot submit chart: {err}");
                self.notify(Severity::Error, format!("Error: {err}"));
                return Err(err.into());
            }
        };
        let req = form.to_request();
        info!(file_name, chart_type = %req.chart_type, x = %req.x_column, "generating chart");

        let result = {
            let _guard = SubmitGuard::engage(&self.state);
            self.api.generate_chart(file_name, &req).await
        };

        match result {
            Ok(spec) => {
                let widget = {
                    let mut page = self.state.lock();
                    let added = page.board.add(&req, spec).clone();
                    added
                };
                if let Err(err) = self.mount(&widget) {
                    self.notify(Severity::Error, format!("Error: {err}"));
                    return Err(err);
                }
                info!(id = %widget.id, title = %widget.title, "chart widget added");
                self.notify(Severity::Success, SUCCESS_MESSAGE.to_string());
                Ok(widget.id)
            }
            Err(err) => {
                warn!(file_name, "chart request failed: {err}");
                self.notify(Severity::Error, err.notice_text());
                Err(err.into())
            }
        }
    }

    fn mount(&self, widget: &WidgetDescription) -> Result<(), SubmitError> {
        {
            let mut page = self.state.lock();
            if let Err(err) = page.doc.mount_widget(widget) {
                page.board.remove(&widget.id);
                return Err(SubmitError::Render(err.to_string()));
            }
        }

        let state = Arc::clone(&self.state);
        let id = widget.id.clone();
        let delay = self.draw_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut page = state.lock();
            let Some(spec) = page.board.get(&id).map(|w| w.spec.clone()) else {
                debug!(%id, "widget removed before draw; skipping");
                return DrawOutcome::Skipped;
            };
            match page.doc.draw_chart(&id, &spec, DrawOptions { responsive: true }) {
                Ok(()) => DrawOutcome::Drawn,
                Err(err) => {
                    warn!(%id, "chart draw failed: {err}");
                    DrawOutcome::Failed(err.to_string())
                }
            }
        });
        self.draws.lock().push((widget.id.clone(), handle));
        Ok(())
    }

    /// Wait for every draw scheduled so far and report how each ended,
    /// in submission order.
    pub async fn settle_draws(&self) -> Vec<(WidgetId, DrawOutcome)> {
        let pending = std::mem::take(&mut *self.draws.lock());
        let mut outcomes = Vec::with_capacity(pending.len());
        for (id, handle) in pending {
            let outcome = handle.await.unwrap_or_else(|err| DrawOutcome::Failed(err.to_string()));
            outcomes.push((id, outcome));
        }
        outcomes
    }

    /// Post a notice and schedule its removal.
    ///
    /// # Panics
    ///
    /// Outside a Tokio runtime.
    pub fn notify(&self, severity: Severity, message: String) -> NoticeId {
        let id = self.state.lock().post_notice(severity, message);
        let state = Arc::clone(&self.state);
        let ttl = self.notice_ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if let Some(notice) = state.lock().drop_notice(id) {
                debug!(notice = id.get(), shown_ms = notice.age().num_milliseconds(), "notice expired");
            }
        });
        id
    }

    /// Manually dismiss a notice. Returns false if it was already gone.
    pub fn dismiss_notice(&self, id: NoticeId) -> bool {
        self.state.lock().drop_notice(id).is_some()
    }

    /// Remove one widget immediately. Returns false for unknown ids.
    pub fn remove_widget(&self, id: &WidgetId) -> bool {
        let mut page = self.state.lock();
        match page.board.remove(id) {
            Some(widget) => {
                page.doc.remove_widget(&widget.id);
                debug!(%id, "widget removed");
                true
            }
            None => false,
        }
    }

    /// Ask for confirmation, then remove every widget and restart numbering.
    /// Returns the number of widgets removed, `None` when declined.
    ///
    /// `confirm` runs without the page lock held, so it may query the controller.
    pub fn clear_all(&self, confirm: &dyn Confirm) -> Option<usize> {
        if !confirm.confirm(CLEAR_CONFIRM_PROMPT) {
            return None;
        }
        let mut page = self.state.lock();
        let removed = page.board.take_all();
        for widget in &removed {
            page.doc.remove_widget(&widget.id);
        }
        info!(count = removed.len(), "cleared all widgets");
        Some(removed.len())
    }

    pub fn widgets(&self) -> Vec<WidgetDescription> {
        self.state.lock().board.widgets().to_vec()
    }

    pub fn widget_count(&self) -> usize {
        self.state.lock().board.len()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.state.lock().notices.notices().to_vec()
    }

    pub fn submit_control(&self) -> SubmitControl {
        self.state.lock().submit.clone()
    }

    pub fn visibility(&self) -> FormVisibility {
        self.state.lock().visibility
    }

    /// Inspect the document under the state lock.
    pub fn with_document<R>(&self, f: impl FnOnce(&D) -> R) -> R {
        f(&self.state.lock().doc)
    }
}
