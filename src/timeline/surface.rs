use super::navigator::TreeNode;
use super::types::{DayKey, EventRecord, NodePath};

/// Rendering collaborator driven by the session.
///
/// Callbacks fire after the navigator state has changed, so an implementation
/// may read the session's navigator at any point.
pub(crate) trait Surface {
    /// `parent` was expanded and `children` were created beneath it
    fn materialize(&mut self, parent: &NodePath, children: &[TreeNode]);

    /// `node` was collapsed and its subtree discarded
    fn collapse(&mut self, node: &NodePath);

    /// `day` became the active day, replacing `previous`
    fn mark_active(&mut self, day: &DayKey, previous: Option<&DayKey>);

    fn render_events(&mut self, day: &DayKey, events: &[EventRecord]);

    fn show_detail(&mut self, day: &DayKey, event: &EventRecord);
}
