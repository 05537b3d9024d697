//! Surface double that records every callback as plain strings

use super::navigator::TreeNode;
use super::surface::Surface;
use super::types::{DayKey, EventRecord, NodePath};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Materialize(String, Vec<String>),
    Collapse(String),
    MarkActive(String, Option<String>),
    Render(String, Vec<String>),
    Detail(String, String),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub(crate) calls: Vec<Call>,
}

impl Surface for RecordingSurface {
    fn materialize(&mut self, parent: &NodePath, children: &[TreeNode]) {
        self.calls.push(Call::Materialize(
            parent.to_string(),
            children.iter().map(|c| c.path.to_string()).collect(),
        ));
    }

    fn collapse(&mut self, node: &NodePath) {
        self.calls.push(Call::Collapse(node.to_string()));
    }

    fn mark_active(&mut self, day: &DayKey, previous: Option<&DayKey>) {
        self.calls.push(Call::MarkActive(
            day.to_string(),
            previous.map(DayKey::to_string),
        ));
    }

    fn render_events(&mut self, day: &DayKey, events: &[EventRecord]) {
        self.calls.push(Call::Render(
            day.to_string(),
            events.iter().map(|e| e.title.clone()).collect(),
        ));
    }

    fn show_detail(&mut self, day: &DayKey, event: &EventRecord) {
        self.calls.push(Call::Detail(day.to_string(), event.title.clone()));
    }
}
