//! Timeline index and navigation
//!
//! Listings are organized into a year → month → day index which a session
//! navigates lazily, loading day payloads on selection.

mod index;
mod latest;
mod navigator;
mod session;
mod surface;
#[cfg(test)]
pub(crate) mod testing;
mod types;

pub(crate) use index::TimelineIndex;
pub(crate) use latest::auto_load_latest;
pub(crate) use navigator::{NodeState, TreeNode, TreeRow};
pub(crate) use session::{Selection, Session};
pub(crate) use surface::Surface;
pub(crate) use types::{DayKey, DayPayload, EventRecord, NodePath};
