// File: crates/dashboard-core/src/lib.rs
// Summary: Core library entry point; exports the chart dashboard domain model.

pub mod chart;
pub mod title;
pub mod form;
pub mod spec;
pub mod widget;
pub mod notice;
pub mod page;
pub mod document;
pub mod error;
pub mod types;

pub use chart::{ChartRequest, ChartType};
pub use title::chart_title;
pub use form::{y_column_visible, ChartForm, FormVisibility, SubmitControl};
pub use spec::{ChartEnvelope, ChartSpec, ErrorEnvelope};
pub use widget::{Confirm, WidgetBoard, WidgetDescription, WidgetId, WidgetSequence};
pub use notice::{Notice, NoticeBoard, NoticeId, Severity};
pub use page::{file_name_from_path, generate_chart_path};
pub use document::{Document, DrawOptions, MemoryDocument, MemoryDocumentError, MountedWidget};
pub use error::DashboardError;
