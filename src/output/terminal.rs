use crate::timeline::{DayKey, EventRecord, NodePath, Surface, TreeNode};

use super::events::{detail_json, events_json, render_detail, render_event_table};
use super::format::OutputOptions;

/// Surface that prints event lists and details to stdout.
///
/// Tree changes are only logged; the tree itself is printed on demand from
/// the navigator's visible rows.
pub(crate) struct TerminalSurface {
    options: OutputOptions,
    show_list: bool,
}

impl TerminalSurface {
    pub(crate) fn new(options: OutputOptions) -> Self {
        Self {
            options,
            show_list: true,
        }
    }

    /// Suppress event lists, e.g. when only a detail view is wanted
    pub(crate) fn without_event_list(mut self) -> Self {
        self.show_list = false;
        self
    }
}

impl Surface for TerminalSurface {
    fn materialize(&mut self, parent: &NodePath, children: &[TreeNode]) {
        log::debug!("{parent}: {} children", children.len());
    }

    fn collapse(&mut self, node: &NodePath) {
        log::debug!("{node}: collapsed");
    }

    fn mark_active(&mut self, day: &DayKey, previous: Option<&DayKey>) {
        match previous {
            Some(previous) => log::debug!("Active day {previous} -> {day}"),
            None => log::debug!("Active day {day}"),
        }
    }

    fn render_events(&mut self, day: &DayKey, events: &[EventRecord]) {
        if !self.show_list {
            return;
        }
        if self.options.json {
            println!("{}", events_json(day, events));
        } else {
            print!("{}", render_event_table(day, events, self.options));
        }
    }

    fn show_detail(&mut self, day: &DayKey, event: &EventRecord) {
        if self.options.json {
            println!("{}", detail_json(day, event));
        } else {
            println!("{}", render_detail(day, event, self.options.use_color));
        }
    }
}
