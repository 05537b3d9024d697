//! Timeline data types shared by the index, navigator, loader and renderers

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A (year, month, day) triple as keyed in the index: "2024", "05", "22"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct DayKey {
    pub(crate) year: String,
    pub(crate) month: String,
    pub(crate) day: String,
}

impl DayKey {
    pub(crate) fn new(year: &str, month: &str, day: &str) -> Self {
        Self {
            year: year.to_string(),
            month: month.to_string(),
            day: day.to_string(),
        }
    }

    pub(crate) fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.format("%Y").to_string(),
            month: date.format("%m").to_string(),
            day: date.format("%d").to_string(),
        }
    }

    /// "2024 / 05 / 22"
    pub(crate) fn breadcrumb(&self) -> String {
        format!("{} / {} / {}", self.year, self.month, self.day)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

/// Structural address of a tree node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum NodePath {
    Year(String),
    Month { year: String, month: String },
    Day(DayKey),
}

impl NodePath {
    pub(crate) fn month(year: &str, month: &str) -> Self {
        NodePath::Month {
            year: year.to_string(),
            month: month.to_string(),
        }
    }

    /// Last path segment, as shown in the tree
    pub(crate) fn label(&self) -> &str {
        match self {
            NodePath::Year(year) => year,
            NodePath::Month { month, .. } => month,
            NodePath::Day(key) => &key.day,
        }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodePath::Year(year) => write!(f, "{year}"),
            NodePath::Month { year, month } => write!(f, "{year}/{month}"),
            NodePath::Day(key) => write!(f, "{}/{}/{}", key.year, key.month, key.day),
        }
    }
}

/// One event of a day payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct EventRecord {
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) time: Option<String>,
    /// Link to the original report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) source: Option<String>,
}

/// Body served at a day's locator
#[derive(Debug, Deserialize)]
pub(crate) struct DayPayload {
    pub(crate) events: Vec<EventRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_key_formats() {
        let key = DayKey::new("2024", "05", "22");
        assert_eq!(key.to_string(), "2024-05-22");
        assert_eq!(key.breadcrumb(), "2024 / 05 / 22");
    }

    #[test]
    fn day_key_from_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();
        assert_eq!(DayKey::from_date(date), DayKey::new("2024", "05", "07"));
    }

    #[test]
    fn node_path_labels() {
        assert_eq!(NodePath::Year("2024".into()).label(), "2024");
        assert_eq!(NodePath::month("2024", "05").label(), "05");
        assert_eq!(NodePath::month("2024", "05").to_string(), "2024/05");
        let day = NodePath::Day(DayKey::new("2024", "05", "22"));
        assert_eq!(day.label(), "22");
        assert_eq!(day.to_string(), "2024/05/22");
    }

    #[test]
    fn event_record_optional_fields() {
        let event: EventRecord = serde_json::from_str(
            r#"{"title": "Launch", "description": "Rocket launch", "tags": ["space"]}"#,
        )
        .unwrap();
        assert_eq!(event.time, None);
        assert_eq!(event.source, None);
        assert_eq!(event.tags, vec!["space".to_string()]);

        let minimal: EventRecord = serde_json::from_str(r#"{"title": "Only title"}"#).unwrap();
        assert!(minimal.description.is_empty());
        assert!(minimal.tags.is_empty());
    }

    #[test]
    fn payload_requires_events_field() {
        assert!(serde_json::from_str::<DayPayload>(r#"{"items": []}"#).is_err());
        let payload: DayPayload = serde_json::from_str(
            r#"{"events": [{"title": "A", "description": "", "tags": [], "time": "09:30", "source": "https://news.test/a"}]}"#,
        )
        .unwrap();
        assert_eq!(payload.events[0].time.as_deref(), Some("09:30"));
        assert_eq!(payload.events[0].source.as_deref(), Some("https://news.test/a"));
    }
}
