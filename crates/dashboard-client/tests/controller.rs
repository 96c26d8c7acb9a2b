// File: crates/dashboard-client/tests/controller.rs
// Purpose: Controller behavior against a scripted backend and the in-memory document.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashboard_client::{ApiError, ChartApi, ClientConfig, DashboardController, DrawOutcome, SubmitError};
use dashboard_core::types::{LOADING_LABEL, SUBMIT_LABEL};
use dashboard_core::{ChartForm, ChartRequest, ChartSpec, ChartType, MemoryDocument, Severity, WidgetId};
use parking_lot::Mutex;
use serde_json::json;
use tokio::sync::Notify;

#[derive(Default)]
struct ScriptedApi {
    replies: Mutex<VecDeque<Result<ChartSpec, ApiError>>>,
    calls: Mutex<Vec<(String, ChartRequest)>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedApi {
    fn replying(replies: Vec<Result<ChartSpec, ApiError>>) -> Self {
        Self { replies: Mutex::new(replies.into()), ..Default::default() }
    }
}

#[async_trait]
impl ChartApi for ScriptedApi {
    async fn generate_chart(&self, file_name: &str, req: &ChartRequest) -> Result<ChartSpec, ApiError> {
        self.calls.lock().push((file_name.to_string(), req.clone()));
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.replies.lock().pop_front().unwrap_or_else(|| Ok(ChartSpec::default()))
    }
}

fn bar_spec() -> ChartSpec {
    ChartSpec::new(json!([{"type": "bar", "x": ["N", "S"], "y": [3, 5]}]), json!({"title": {"text": "Sales by Region"}}))
}

fn form(chart_type: &str, x: &str, y: &str) -> ChartForm {
    ChartForm { chart_type: chart_type.into(), x_column: x.into(), y_column: y.into(), color_column: None }
}

fn controller(api: ScriptedApi) -> DashboardController<ScriptedApi, MemoryDocument> {
    DashboardController::new(api, MemoryDocument::new(), &ClientConfig::new("http://unused"))
}

const PAGE: &str = "/dashboard/20240101_sales.csv";

#[tokio::test(start_paused = true)]
async fn init_applies_visibility() {
    let ctl = controller(ScriptedApi::default());
    ctl.init(&ChartType::Pie);
    assert!(!ctl.with_document(|d| d.visibility.y_column_group));
    assert!(ctl.on_chart_type_change(&ChartType::Line).y_column_group);
    assert!(ctl.with_document(|d| d.visibility.y_column_group));
    assert!(!ctl.on_chart_type_change(&ChartType::Histogram).y_column_group);
    assert_eq!(ctl.with_document(|d| d.submit.label.clone()), SUBMIT_LABEL);
}

#[tokio::test(start_paused = true)]
async fn successful_submission_adds_and_draws_widget() {
    let ctl = controller(ScriptedApi::replying(vec![Ok(bar_spec())]));

    let id = ctl.submit(&form("bar", "Region", "Sales"), PAGE).await.unwrap();
    assert_eq!(id.as_str(), "chart-1");
    assert_eq!(ctl.widget_count(), 1);
    assert_eq!(ctl.widgets()[0].title, "Sales by Region");

    // mounted immediately, drawn only after the delay
    assert!(ctl.with_document(|d| d.widget(&id).unwrap().drawn.is_none()));
    tokio::time::sleep(Duration::from_millis(150)).await;
    let drawn = ctl.with_document(|d| d.widget(&id).unwrap().drawn.clone()).unwrap();
    assert_eq!(drawn.0, bar_spec());
    assert!(drawn.1.responsive);

    let notices = ctl.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].severity, Severity::Success);
    assert_eq!(notices[0].message, "Chart generated successfully!");

    let history = ctl.with_document(|d| d.submit_history.clone());
    let labels: Vec<_> = history.iter().map(|c| (c.label.as_str(), c.disabled)).collect();
    assert_eq!(labels, [(LOADING_LABEL, true), (SUBMIT_LABEL, false)]);
}

#[tokio::test(start_paused = true)]
async fn request_uses_last_path_segment() {
    let ctl = controller(ScriptedApi::default());
    ctl.submit(&form("pie", "Category", "Sales"), PAGE).await.unwrap();
    ctl.submit(&form("scatter", "Age", "Income"), "/dashboard/other.json").await.unwrap();

    let ids: Vec<_> = ctl.widgets().into_iter().map(|w| w.id).collect();
    assert_eq!(ids, [WidgetId::from("chart-1"), WidgetId::from("chart-2")]);
    assert_eq!(ctl.widgets()[1].title, "Age vs Income");
}

#[tokio::test(start_paused = true)]
async fn request_carries_form_fields() {
    let api = Arc::new(ScriptedApi::default());
    let ctl = DashboardController::new(Arc::clone(&api), MemoryDocument::new(), &ClientConfig::new("http://unused"));
    let mut f = form("pie", "Category", "Sales");
    f.color_column = Some("Region".into());
    ctl.submit(&f, PAGE).await.unwrap();
    assert_eq!(ctl.widgets()[0].title, "Distribution of Category");

    let calls = api.calls.lock();
    assert_eq!(calls.len(), 1);
    let (file_name, req) = &calls[0];
    assert_eq!(file_name, "20240101_sales.csv");
    assert_eq!(req.chart_type, ChartType::Pie);
    assert_eq!(req.x_column, "Category");
    // hidden Y input is still submitted
    assert_eq!(req.y_column, "Sales");
    assert_eq!(req.color(), Some("Region"));
}

#[tokio::test(start_paused = true)]
async fn server_rejection_shows_error_and_restores_control() {
    let ctl = controller(ScriptedApi::replying(vec![Err(ApiError::Server {
        status: 500,
        message: "Column 'Sales' not found".into(),
    })]));

    let err = ctl.submit(&form("bar", "Region", "Sales"), PAGE).await.unwrap_err();
    assert!(matches!(err, SubmitError::Api(ApiError::Server { status: 500, .. })));
    assert_eq!(ctl.widget_count(), 0);
    assert_eq!(ctl.submit_control().label, SUBMIT_LABEL);
    assert!(!ctl.submit_control().disabled);

    let notices = ctl.notices();
    assert_eq!(notices[0].severity, Severity::Error);
    assert_eq!(notices[0].message, "Error: Column 'Sales' not found");
    assert_eq!(ctl.with_document(|d| d.notices()[0].severity.css_class()), "alert-danger");
}

#[tokio::test(start_paused = true)]
async fn undecodable_success_is_reported_as_network_error() {
    let ctl = controller(ScriptedApi::replying(vec![Err(ApiError::Decode("expected value".into()))]));
    ctl.submit(&form("line", "Date", "Revenue"), PAGE).await.unwrap_err();
    assert_eq!(ctl.notices()[0].message, "Network error: invalid response body: expected value");
    assert_eq!(ctl.submit_control().label, SUBMIT_LABEL);
}

#[tokio::test(start_paused = true)]
async fn page_without_file_name_never_calls_backend() {
    let ctl = controller(ScriptedApi::default());
    let err = ctl.submit(&form("bar", "Region", ""), "/dashboard/").await.unwrap_err();
    assert!(matches!(err, SubmitError::Page(_)));
    assert!(ctl.with_document(|d| d.submit_history.is_empty()));
    assert_eq!(ctl.notices()[0].severity, Severity::Error);
}

#[tokio::test(start_paused = true)]
async fn control_is_disabled_while_in_flight() {
    let gate = Arc::new(Notify::new());
    let api = ScriptedApi { gate: Some(Arc::clone(&gate)), ..Default::default() };
    let ctl = Arc::new(controller(api));

    let task = {
        let ctl = Arc::clone(&ctl);
        tokio::spawn(async move { ctl.submit(&form("bar", "Region", "Sales"), PAGE).await })
    };
    tokio::task::yield_now().await;

    let busy = ctl.submit_control();
    assert!(busy.disabled);
    assert_eq!(busy.label, LOADING_LABEL);

    gate.notify_one();
    task.await.unwrap().unwrap();
    assert!(!ctl.submit_control().disabled);
    assert_eq!(ctl.submit_control().label, SUBMIT_LABEL);
}

#[tokio::test(start_paused = true)]
async fn dropped_submission_still_restores_control() {
    let gate = Arc::new(Notify::new());
    let api = ScriptedApi { gate: Some(gate), ..Default::default() };
    let ctl = controller(api);

    let bar_form = form("bar", "Region", "Sales");
    let pending = ctl.submit(&bar_form, PAGE);
    let timed_out = tokio::time::timeout(Duration::from_secs(1), pending).await;
    assert!(timed_out.is_err());
    assert!(!ctl.submit_control().disabled);
    assert_eq!(ctl.widget_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn remove_one_leaves_the_rest() {
    let ctl = controller(ScriptedApi::default());
    for (x, y) in [("A", "B"), ("C", "D"), ("E", "F")] {
        ctl.submit(&form("bar", x, y), PAGE).await.unwrap();
    }
    assert!(ctl.remove_widget(&WidgetId::from("chart-2")));
    assert!(!ctl.remove_widget(&WidgetId::from("chart-2")));

    let widgets = ctl.widgets();
    assert_eq!(widgets.len(), 2);
    assert_eq!((widgets[0].id.as_str(), widgets[0].title.as_str()), ("chart-1", "B by A"));
    assert_eq!((widgets[1].id.as_str(), widgets[1].title.as_str()), ("chart-3", "F by E"));
    assert_eq!(ctl.with_document(|d| d.widget_count()), 2);

    let next = ctl.submit(&form("bar", "G", ""), PAGE).await.unwrap();
    assert_eq!(next.as_str(), "chart-4");
}

#[tokio::test(start_paused = true)]
async fn removed_before_draw_is_skipped() {
    let ctl = controller(ScriptedApi::default());
    let id = ctl.submit(&form("histogram", "Age", ""), PAGE).await.unwrap();
    assert!(ctl.remove_widget(&id));
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(ctl.with_document(|d| d.widget(&id).is_none()));
}

#[tokio::test(start_paused = true)]
async fn clear_all_requires_confirmation() {
    let ctl = controller(ScriptedApi::default());
    ctl.submit(&form("bar", "A", "B"), PAGE).await.unwrap();
    ctl.submit(&form("bar", "C", "D"), PAGE).await.unwrap();

    let asked = Mutex::new(Vec::new());
    let decline = |prompt: &str| {
        asked.lock().push(prompt.to_string());
        false
    };
    assert_eq!(ctl.clear_all(&decline), None);
    assert_eq!(ctl.widget_count(), 2);
    assert_eq!(asked.lock().as_slice(), ["Are you sure you want to clear all charts?"]);

    assert_eq!(ctl.clear_all(&|_: &str| true), Some(2));
    assert_eq!(ctl.widget_count(), 0);
    assert_eq!(ctl.with_document(|d| d.widget_count()), 0);

    let id = ctl.submit(&form("line", "Date", "Revenue"), PAGE).await.unwrap();
    assert_eq!(id.as_str(), "chart-1");
}

#[tokio::test(start_paused = true)]
async fn confirm_may_read_controller_state() {
    let ctl = Arc::new(controller(ScriptedApi::default()));
    ctl.submit(&form("bar", "A", "B"), PAGE).await.unwrap();

    let (tx, rx) = std::sync::mpsc::channel();
    let worker = {
        let ctl = Arc::clone(&ctl);
        std::thread::spawn(move || {
            let cleared = ctl.clear_all(&|_: &str| ctl.widget_count() == 1);
            tx.send(cleared).unwrap();
        })
    };
    let cleared = rx.recv_timeout(Duration::from_secs(2)).expect("clear_all blocked on its own lock");
    worker.join().unwrap();
    assert_eq!(cleared, Some(1));
    assert_eq!(ctl.widget_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn settle_draws_reports_each_widget() {
    let ctl = controller(ScriptedApi::default());
    let kept = ctl.submit(&form("bar", "A", "B"), PAGE).await.unwrap();
    let dropped = ctl.submit(&form("pie", "C", ""), PAGE).await.unwrap();
    assert!(ctl.remove_widget(&dropped));

    let outcomes = ctl.settle_draws().await;
    assert_eq!(outcomes, vec![(kept.clone(), DrawOutcome::Drawn), (dropped, DrawOutcome::Skipped)]);
    assert!(ctl.with_document(|d| d.widget(&kept).unwrap().drawn.is_some()));
    assert!(ctl.settle_draws().await.is_empty());
}

#[test]
#[should_panic]
fn notify_needs_a_runtime() {
    let ctl = controller(ScriptedApi::default());
    ctl.notify(Severity::Success, "saved".into());
}

#[tokio::test(start_paused = true)]
async fn notices_expire_after_ttl() {
    let ctl = controller(ScriptedApi::default());
    ctl.notify(Severity::Success, "saved".into());
    tokio::time::sleep(Duration::from_millis(4900)).await;
    assert_eq!(ctl.notices().len(), 1);
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(ctl.notices().is_empty());
    assert!(ctl.with_document(|d| d.notices().is_empty()));
}

#[tokio::test(start_paused = true)]
async fn manual_dismiss_then_expiry_is_noop() {
    let ctl = controller(ScriptedApi::default());
    let first = ctl.notify(Severity::Error, "first".into());
    let second = ctl.notify(Severity::Success, "second".into());
    assert!(ctl.dismiss_notice(first));
    assert!(!ctl.dismiss_notice(first));
    assert_eq!(ctl.notices()[0].id, second);

    tokio::time::sleep(Duration::from_secs(6)).await;
    assert!(ctl.notices().is_empty());
    assert!(!ctl.dismiss_notice(second));
}
