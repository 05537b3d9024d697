//! Year → month → day → locator index built from downloaded listings
//!
//! Keys are fixed-width digit strings, so lexical order is calendar order.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::consts::DATE_FORMAT;
use crate::error::ValidationError;
use crate::remote::{DayEntry, ListingFile};

use super::types::DayKey;

type DayMap = BTreeMap<String, String>;
type MonthMap = BTreeMap<String, DayMap>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(crate) struct TimelineIndex {
    years: BTreeMap<String, MonthMap>,
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Split "2024-05" into ("2024", "05")
fn split_identifier(identifier: &str) -> Result<(&str, &str), ValidationError> {
    let bad = || ValidationError::BadIdentifier {
        identifier: identifier.to_string(),
    };
    let (year, month) = identifier.split_once('-').ok_or_else(bad)?;
    if !is_digits(year, 4) || !is_digits(month, 2) {
        return Err(bad());
    }
    let valid = match (year.parse::<i32>(), month.parse::<u32>()) {
        (Ok(y), Ok(m)) => NaiveDate::from_ymd_opt(y, m, 1).is_some(),
        _ => false,
    };
    if !valid {
        return Err(bad());
    }
    Ok((year, month))
}

/// Validate one day-entry and return its (date, day component, locator)
fn check_entry<'a>(
    identifier: &str,
    entry: &'a DayEntry,
) -> Result<(&'a str, &'a str, &'a str), ValidationError> {
    let date = entry.date.as_deref().unwrap_or_default();
    let bad_date = || ValidationError::BadDate {
        identifier: identifier.to_string(),
        date: date.to_string(),
    };

    let parts: Vec<&str> = date.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(bad_date());
    };
    if !is_digits(year, 4) || !is_digits(month, 2) || !is_digits(day, 2) {
        return Err(bad_date());
    }
    if NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
        return Err(bad_date());
    }

    match entry.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => Ok((date, *day, url)),
        _ => Err(ValidationError::MissingLocator {
            identifier: identifier.to_string(),
            date: date.to_string(),
        }),
    }
}

impl TimelineIndex {
    /// Build the index from listings in the order given.
    ///
    /// Invalid listings and entries are logged, left out, and returned
    /// alongside the index. When two listings declare the same day, the
    /// later one wins.
    pub(crate) fn organize(listings: &[ListingFile]) -> (Self, Vec<ValidationError>) {
        let mut index = Self::default();
        let mut rejected = Vec::new();
        for listing in listings {
            index.insert_listing(listing, &mut rejected);
        }
        for err in &rejected {
            log::warn!("{err}");
        }
        log::debug!(
            "Indexed {} days across {} years ({} entries rejected)",
            index.day_count(),
            index.years.len(),
            rejected.len()
        );
        (index, rejected)
    }

    fn insert_listing(&mut self, listing: &ListingFile, rejected: &mut Vec<ValidationError>) {
        let (year, month) = match split_identifier(&listing.identifier) {
            Ok(parts) => parts,
            Err(err) => {
                rejected.push(err);
                return;
            }
        };

        // Intermediate levels exist even when no entry survives
        let days = self
            .years
            .entry(year.to_string())
            .or_default()
            .entry(month.to_string())
            .or_default();

        for entry in &listing.days {
            let (date, day, locator) = match check_entry(&listing.identifier, entry) {
                Ok(checked) => checked,
                Err(err) => {
                    rejected.push(err);
                    continue;
                }
            };
            if !date.starts_with(listing.identifier.as_str()) {
                log::warn!(
                    "Entry {date} is filed in listing {}, indexing it under {year}-{month}-{day}",
                    listing.identifier
                );
            }
            if let Some(previous) = days.insert(day.to_string(), locator.to_string()) {
                log::warn!(
                    "Duplicate entry for {year}-{month}-{day}: {locator} replaces {previous}"
                );
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub(crate) fn day_count(&self) -> usize {
        self.years
            .values()
            .flat_map(|months| months.values())
            .map(|days| days.len())
            .sum()
    }

    /// Years, newest first (sidebar order)
    pub(crate) fn years_desc(&self) -> Vec<&str> {
        self.years.keys().rev().map(String::as_str).collect()
    }

    /// Months of `year`, ascending
    pub(crate) fn months(&self, year: &str) -> Option<Vec<&str>> {
        let months = self.years.get(year)?;
        Some(months.keys().map(String::as_str).collect())
    }

    /// Days of `year`/`month`, ascending
    pub(crate) fn days(&self, year: &str, month: &str) -> Option<Vec<&str>> {
        let days = self.years.get(year)?.get(month)?;
        Some(days.keys().map(String::as_str).collect())
    }

    pub(crate) fn locator(&self, key: &DayKey) -> Option<&str> {
        self.years
            .get(&key.year)?
            .get(&key.month)?
            .get(&key.day)
            .map(String::as_str)
    }

    pub(crate) fn latest_year(&self) -> Option<&str> {
        self.years.keys().next_back().map(String::as_str)
    }

    pub(crate) fn latest_month(&self, year: &str) -> Option<&str> {
        self.years.get(year)?.keys().next_back().map(String::as_str)
    }

    pub(crate) fn latest_day(&self, year: &str, month: &str) -> Option<&str> {
        self.years
            .get(year)?
            .get(month)?
            .keys()
            .next_back()
            .map(String::as_str)
    }
}

#[cfg(test)]
pub(crate) fn index_from(entries: &[(&str, &[(&str, &str)])]) -> TimelineIndex {
    let listings: Vec<ListingFile> = entries
        .iter()
        .map(|(identifier, days)| ListingFile {
            identifier: identifier.to_string(),
            days: days
                .iter()
                .map(|(date, url)| DayEntry::new(date, url))
                .collect(),
        })
        .collect();
    let (index, rejected) = TimelineIndex::organize(&listings);
    assert!(rejected.is_empty(), "unexpected rejections: {rejected:?}");
    index
}
