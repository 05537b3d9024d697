//! Lazy expand/collapse state over a `TimelineIndex`
//!
//! At most one year is open, and at most one month within it. Children are
//! created when their parent opens and dropped when it closes.

use crate::error::AppError;

use super::index::TimelineIndex;
use super::types::{DayKey, NodePath};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeState {
    Collapsed,
    Expanded,
}

/// A materialized child node
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TreeNode {
    pub(crate) path: NodePath,
    pub(crate) state: NodeState,
}

impl TreeNode {
    fn collapsed(path: NodePath) -> Self {
        Self {
            path,
            state: NodeState::Collapsed,
        }
    }
}

/// Outcome of a toggle.
///
/// `materialized` holds the children created by an expand; receiving it is the
/// signal that the next level can be navigated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Toggle {
    pub(crate) collapsed: Vec<NodePath>,
    pub(crate) materialized: Option<Vec<TreeNode>>,
}

impl Toggle {
    #[cfg(test)]
    pub(crate) fn is_expanded(&self) -> bool {
        self.materialized.is_some()
    }

    pub(crate) fn children(&self) -> &[TreeNode] {
        self.materialized.as_deref().unwrap_or_default()
    }
}

#[derive(Debug)]
struct OpenMonth {
    month: String,
    days: Vec<TreeNode>,
}

#[derive(Debug)]
struct OpenYear {
    year: String,
    months: Vec<TreeNode>,
    open_month: Option<OpenMonth>,
}

/// One line of the visible tree, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TreeRow {
    pub(crate) depth: usize,
    pub(crate) path: NodePath,
    /// `None` for day leaves
    pub(crate) state: Option<NodeState>,
    pub(crate) active: bool,
}

#[derive(Debug, Default)]
pub(crate) struct Navigator {
    open_year: Option<OpenYear>,
    active: Option<DayKey>,
}

impl Navigator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn toggle_year(
        &mut self,
        index: &TimelineIndex,
        year: &str,
    ) -> Result<Toggle, AppError> {
        let Some(months) = index.months(year) else {
            return Err(AppError::UnknownNode {
                path: NodePath::Year(year.to_string()).to_string(),
            });
        };

        let mut collapsed = Vec::new();
        if let Some(open) = self.open_year.take() {
            collapsed.push(NodePath::Year(open.year.clone()));
            if open.year == year {
                log::debug!("Collapsed {year}");
                return Ok(Toggle {
                    collapsed,
                    materialized: None,
                });
            }
        }

        let children: Vec<TreeNode> = months
            .into_iter()
            .map(|month| TreeNode::collapsed(NodePath::month(year, month)))
            .collect();
        log::debug!("Expanded {year} ({} months)", children.len());
        self.open_year = Some(OpenYear {
            year: year.to_string(),
            months: children.clone(),
            open_month: None,
        });
        Ok(Toggle {
            collapsed,
            materialized: Some(children),
        })
    }

    pub(crate) fn toggle_month(
        &mut self,
        index: &TimelineIndex,
        year: &str,
        month: &str,
    ) -> Result<Toggle, AppError> {
        let path = NodePath::month(year, month);
        let Some(days) = index.days(year, month) else {
            return Err(AppError::UnknownNode {
                path: path.to_string(),
            });
        };
        let open = match self.open_year.as_mut() {
            Some(open) if open.year == year => open,
            _ => {
                return Err(AppError::NodeNotMaterialized {
                    year: year.to_string(),
                    month: month.to_string(),
                });
            }
        };

        let mut collapsed = Vec::new();
        if let Some(previous) = open.open_month.take() {
            collapsed.push(NodePath::month(year, &previous.month));
            set_state(&mut open.months, &collapsed[0], NodeState::Collapsed);
            if previous.month == month {
                log::debug!("Collapsed {path}");
                return Ok(Toggle {
                    collapsed,
                    materialized: None,
                });
            }
        }

        let children: Vec<TreeNode> = days
            .into_iter()
            .map(|day| TreeNode::collapsed(NodePath::Day(DayKey::new(year, month, day))))
            .collect();
        log::debug!("Expanded {path} ({} days)", children.len());
        set_state(&mut open.months, &path, NodeState::Expanded);
        open.open_month = Some(OpenMonth {
            month: month.to_string(),
            days: children.clone(),
        });
        Ok(Toggle {
            collapsed,
            materialized: Some(children),
        })
    }

    /// Make `day` the only active day and return the one it replaces
    pub(crate) fn mark_active(&mut self, day: DayKey) -> Option<DayKey> {
        self.active.replace(day)
    }

    pub(crate) fn active(&self) -> Option<&DayKey> {
        self.active.as_ref()
    }

    pub(crate) fn expanded_year(&self) -> Option<&str> {
        self.open_year.as_ref().map(|open| open.year.as_str())
    }

    pub(crate) fn expanded_month(&self) -> Option<(&str, &str)> {
        let open = self.open_year.as_ref()?;
        let month = open.open_month.as_ref()?;
        Some((open.year.as_str(), month.month.as_str()))
    }

    /// Materialized months of the open year
    pub(crate) fn month_children(&self) -> &[TreeNode] {
        self.open_year
            .as_ref()
            .map(|open| open.months.as_slice())
            .unwrap_or_default()
    }

    /// Materialized days of the open month
    pub(crate) fn day_children(&self) -> &[TreeNode] {
        self.open_year
            .as_ref()
            .and_then(|open| open.open_month.as_ref())
            .map(|month| month.days.as_slice())
            .unwrap_or_default()
    }

    /// Flatten the visible tree: every year (newest first), plus the
    /// materialized children of the open branch.
    pub(crate) fn visible_rows(&self, index: &TimelineIndex) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        for year in index.years_desc() {
            let is_open = self.expanded_year() == Some(year);
            rows.push(TreeRow {
                depth: 0,
                path: NodePath::Year(year.to_string()),
                state: Some(if is_open {
                    NodeState::Expanded
                } else {
                    NodeState::Collapsed
                }),
                active: false,
            });
            if !is_open {
                continue;
            }
            for month in self.month_children() {
                rows.push(TreeRow {
                    depth: 1,
                    path: month.path.clone(),
                    state: Some(month.state),
                    active: false,
                });
                if month.state != NodeState::Expanded {
                    continue;
                }
                for day in self.day_children() {
                    let active = match &day.path {
                        NodePath::Day(key) => self.active.as_ref() == Some(key),
                        _ => false,
                    };
                    rows.push(TreeRow {
                        depth: 2,
                        path: day.path.clone(),
                        state: None,
                        active,
                    });
                }
            }
        }
        rows
    }
}

fn set_state(nodes: &mut [TreeNode], path: &NodePath, state: NodeState) {
    if let Some(node) = nodes.iter_mut().find(|node| &node.path == path) {
        node.state = state;
    }
}
