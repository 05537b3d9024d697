use crate::error::AppError;
use crate::remote::HttpGet;

use super::index::TimelineIndex;
use super::session::{Selection, Session};
use super::surface::Surface;
use super::types::{DayKey, NodePath};

/// Newest year, its newest month, and that month's newest day.
///
/// `None` as soon as any of those levels is empty; older branches are not
/// searched.
pub(crate) fn latest_day(index: &TimelineIndex) -> Option<DayKey> {
    let year = index.latest_year()?;
    let month = index.latest_month(year)?;
    let day = index.latest_day(year, month)?;
    Some(DayKey::new(year, month, day))
}

/// Open the newest year and month and select the newest day.
///
/// Each step locates its target among the children returned by the previous
/// expansion, so no step runs before the level it needs exists.
pub(crate) fn auto_load_latest<H: HttpGet, S: Surface>(
    session: &mut Session<H, S>,
) -> Result<Option<Selection>, AppError> {
    let index = session.index();
    let Some(target) = latest_day(index) else {
        match index.latest_year() {
            None => log::info!("Timeline has no entries, nothing to load"),
            Some(year) => match index.latest_month(year) {
                Some(month) => {
                    log::warn!("Newest month {year}-{month} has no days, nothing to load")
                }
                None => log::warn!("Newest year {year} has no months, nothing to load"),
            },
        }
        return Ok(None);
    };
    log::debug!("Latest entry is {target}");

    let months = session.expand_year(&target.year)?;
    let month_path = NodePath::month(&target.year, &target.month);
    if !months.iter().any(|node| node.path == month_path) {
        return Ok(None);
    }

    let days = session.expand_month(&target.year, &target.month)?;
    let day_path = NodePath::Day(target.clone());
    if !days.iter().any(|node| node.path == day_path) {
        return Ok(None);
    }

    session.select_day(&target).map(Some)
}
