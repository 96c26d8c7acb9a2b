// File: crates/dashboard-core/src/widget.rs
// Summary: Widget ids, the id sequence, widget descriptions, and the board that owns them.
// Notes:
// - Ids come from a counter starting at 1. Clearing the board resets the
//   counter, so "chart-1" can appear again after a clear.

use std::fmt;

use crate::chart::ChartRequest;
use crate::spec::ChartSpec;
use crate::title::chart_title;

/// Container id of a widget, formatted `chart-N`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn from_seq(n: u64) -> Self {
        Self(format!("chart-{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Monotonic widget counter.
#[derive(Clone, Debug, Default)]
pub struct WidgetSequence {
    last: u64,
}

impl WidgetSequence {
    pub fn next_id(&mut self) -> WidgetId {
        self.last += 1;
        WidgetId::from_seq(self.last)
    }

    /// Last value handed out; 0 before the first allocation.
    pub fn current(&self) -> u64 {
        self.last
    }

    pub fn reset(&mut self) {
        self.last = 0;
    }
}

/// Everything a document needs to materialize one widget.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetDescription {
    pub id: WidgetId,
    pub title: String,
    pub spec: ChartSpec,
}

/// Capability to ask the user a yes/no question.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Ordered list of live widgets plus the sequence that names them.
#[derive(Debug, Default)]
pub struct WidgetBoard {
    seq: WidgetSequence,
    widgets: Vec<WidgetDescription>,
}

impl WidgetBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Describe and append a widget for a successful response.
    pub fn add(&mut self, req: &ChartRequest, spec: ChartSpec) -> &WidgetDescription {
        let widget = WidgetDescription { id: self.seq.next_id(), title: chart_title(req), spec };
        self.widgets.push(widget);
        &self.widgets[self.widgets.len() - 1]
    }

    /// Remove one widget. Returns the removed description, `None` if unknown.
    pub fn remove(&mut self, id: &WidgetId) -> Option<WidgetDescription> {
        let idx = self.widgets.iter().position(|w| &w.id == id)?;
        Some(self.widgets.remove(idx))
    }

    /// Clear every widget after confirmation and restart numbering.
    /// Returns the removed widgets, or `None` when the user declined.
    pub fn clear_all(&mut self, confirm: &dyn Confirm, prompt: &str) -> Option<Vec<WidgetDescription>> {
        if !confirm.confirm(prompt) {
            return None;
        }
        Some(self.take_all())
    }

    /// Remove every widget and restart numbering, without asking.
    pub fn take_all(&mut self) -> Vec<WidgetDescription> {
        self.seq.reset();
        std::mem::take(&mut self.widgets)
    }

    pub fn get(&self, id: &WidgetId) -> Option<&WidgetDescription> {
        self.widgets.iter().find(|w| &w.id == id)
    }

    pub fn contains(&self, id: &WidgetId) -> bool {
        self.get(id).is_some()
    }

    pub fn widgets(&self) -> &[WidgetDescription] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn sequence(&self) -> &WidgetSequence {
        &self.seq
    }
}
