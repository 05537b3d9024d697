//! Per-session context tying index, navigator, loader and surface together

use crate::error::AppError;
use crate::events::EventLoader;
use crate::remote::HttpGet;

use super::index::TimelineIndex;
use super::navigator::{Navigator, Toggle, TreeNode};
use super::surface::Surface;
use super::types::{DayKey, EventRecord, NodePath};

/// A day load that has been requested but not applied yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingLoad {
    ticket: u64,
    pub(crate) day: DayKey,
    pub(crate) locator: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Selection {
    Rendered { day: DayKey, count: usize },
    /// A newer selection superseded this one before its result was applied
    Stale { day: DayKey },
}

pub(crate) struct Session<H, S> {
    index: TimelineIndex,
    navigator: Navigator,
    loader: EventLoader<H>,
    surface: S,
    ticket: u64,
    in_flight: Option<PendingLoad>,
}

impl<H: HttpGet, S: Surface> Session<H, S> {
    pub(crate) fn new(index: TimelineIndex, loader: EventLoader<H>, surface: S) -> Self {
        Self {
            index,
            navigator: Navigator::new(),
            loader,
            surface,
            ticket: 0,
            in_flight: None,
        }
    }

    pub(crate) fn index(&self) -> &TimelineIndex {
        &self.index
    }

    pub(crate) fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[cfg(test)]
    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }

    #[cfg(test)]
    pub(crate) fn loader(&self) -> &EventLoader<H> {
        &self.loader
    }

    fn notify(&mut self, parent: NodePath, toggle: &Toggle) {
        for node in &toggle.collapsed {
            self.surface.collapse(node);
        }
        if let Some(children) = &toggle.materialized {
            self.surface.materialize(&parent, children);
        }
    }

    pub(crate) fn toggle_year(&mut self, year: &str) -> Result<Toggle, AppError> {
        let toggle = self.navigator.toggle_year(&self.index, year)?;
        self.notify(NodePath::Year(year.to_string()), &toggle);
        Ok(toggle)
    }

    pub(crate) fn toggle_month(&mut self, year: &str, month: &str) -> Result<Toggle, AppError> {
        let toggle = self.navigator.toggle_month(&self.index, year, month)?;
        self.notify(NodePath::month(year, month), &toggle);
        Ok(toggle)
    }

    /// Open `year` unless it already is, returning its month nodes
    pub(crate) fn expand_year(&mut self, year: &str) -> Result<Vec<TreeNode>, AppError> {
        if self.navigator.expanded_year() == Some(year) {
            return Ok(self.navigator.month_children().to_vec());
        }
        let toggle = self.toggle_year(year)?;
        Ok(toggle.children().to_vec())
    }

    /// Open `year`/`month` unless it already is, returning its day nodes
    pub(crate) fn expand_month(
        &mut self,
        year: &str,
        month: &str,
    ) -> Result<Vec<TreeNode>, AppError> {
        if self.navigator.expanded_month() == Some((year, month)) {
            return Ok(self.navigator.day_children().to_vec());
        }
        let toggle = self.toggle_month(year, month)?;
        Ok(toggle.children().to_vec())
    }

    /// Mark `day` active, load its events (cache first) and render them
    pub(crate) fn select_day(&mut self, day: &DayKey) -> Result<Selection, AppError> {
        let pending = self.begin_select(day)?;
        let result = self.loader.load_events(&pending.locator);
        self.finish_select(pending, result)
    }

    /// First half of `select_day`: update the active mark and issue a ticket.
    /// Any earlier pending load becomes stale.
    pub(crate) fn begin_select(&mut self, day: &DayKey) -> Result<PendingLoad, AppError> {
        let Some(locator) = self.index.locator(day) else {
            return Err(AppError::UnknownDay {
                date: day.to_string(),
            });
        };
        let locator = locator.to_string();

        let previous = self.navigator.mark_active(day.clone());
        self.surface.mark_active(day, previous.as_ref());

        self.ticket += 1;
        let pending = PendingLoad {
            ticket: self.ticket,
            day: day.clone(),
            locator,
        };
        self.in_flight = Some(pending.clone());
        Ok(pending)
    }

    /// Second half of `select_day`: render `result` if `pending` is still the
    /// current selection, otherwise drop it.
    pub(crate) fn finish_select(
        &mut self,
        pending: PendingLoad,
        result: Result<Vec<EventRecord>, AppError>,
    ) -> Result<Selection, AppError> {
        if self.in_flight.as_ref() != Some(&pending) {
            log::debug!(
                "Discarding stale result for {} (ticket {}, current {})",
                pending.day,
                pending.ticket,
                self.ticket
            );
            return Ok(Selection::Stale { day: pending.day });
        }
        self.in_flight = None;

        let events = result?;
        self.surface.render_events(&pending.day, &events);
        Ok(Selection::Rendered {
            day: pending.day,
            count: events.len(),
        })
    }

    /// Show the `number`-th (1-based) event of the active day
    pub(crate) fn show_detail(&mut self, number: usize) -> Result<(), AppError> {
        let Some(day) = self.navigator.active().cloned() else {
            return Err(AppError::NoActiveDay);
        };
        let events = self
            .index
            .locator(&day)
            .and_then(|locator| self.loader.cached(locator))
            .unwrap_or_default();
        let event = number
            .checked_sub(1)
            .and_then(|i| events.get(i))
            .ok_or_else(|| AppError::EventOutOfRange {
                number,
                count: events.len(),
                date: day.to_string(),
            })?;
        self.surface.show_detail(&day, event);
        Ok(())
    }
}
