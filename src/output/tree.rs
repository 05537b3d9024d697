use crate::timeline::{NodeState, TreeRow};

use super::format::paint;

/// Render visible rows as an indented tree:
///
/// ```text
/// ▾ 2024
///   ▸ 01
///   ▾ 05
///     • 10
///     ● 22
/// ▸ 2023
/// ```
pub(crate) fn render_tree(rows: &[TreeRow], use_color: bool) -> String {
    let mut out = String::new();
    for row in rows {
        let indent = "  ".repeat(row.depth);
        let marker = match (row.state, row.active) {
            (Some(NodeState::Expanded), _) => "▾",
            (Some(NodeState::Collapsed), _) => "▸",
            (None, true) => "●",
            (None, false) => "•",
        };
        let label = row.path.label();
        let line = format!("{indent}{marker} {label}");
        if row.active {
            out.push_str(&paint(&line, "1;32", use_color));
        } else if row.state == Some(NodeState::Expanded) {
            out.push_str(&paint(&line, "1", use_color));
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::{DayKey, NodePath};

    fn row(depth: usize, path: NodePath, state: Option<NodeState>, active: bool) -> TreeRow {
        TreeRow {
            depth,
            path,
            state,
            active,
        }
    }

    #[test]
    fn renders_markers_and_indentation() {
        let rows = vec![
            row(0, NodePath::Year("2024".into()), Some(NodeState::Expanded), false),
            row(1, NodePath::month("2024", "05"), Some(NodeState::Expanded), false),
            row(2, NodePath::Day(DayKey::new("2024", "05", "10")), None, false),
            row(2, NodePath::Day(DayKey::new("2024", "05", "22")), None, true),
            row(0, NodePath::Year("2023".into()), Some(NodeState::Collapsed), false),
        ];
        assert_eq!(
            render_tree(&rows, false),
            "▾ 2024\n  ▾ 05\n    • 10\n    ● 22\n▸ 2023\n"
        );
    }

    #[test]
    fn active_day_is_highlighted_with_color() {
        let rows = vec![row(
            2,
            NodePath::Day(DayKey::new("2024", "05", "22")),
            None,
            true,
        )];
        assert_eq!(render_tree(&rows, true), "\x1b[1;32m    ● 22\x1b[0m\n");
    }
}
