use thiserror::Error;

/// Failure of a single HTTP round trip
#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("invalid JSON: {0}")]
    Decode(String),
}

impl FetchError {
    /// HTTP status code, when the server answered at all
    pub(crate) fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status(status) => Some(*status),
            _ => None,
        }
    }
}

/// A listing or day-entry that cannot be placed in the timeline index
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub(crate) enum ValidationError {
    #[error("Invalid listing identifier \"{identifier}\" (expected YYYY-MM)")]
    BadIdentifier { identifier: String },

    #[error("Invalid date \"{date}\" in listing {identifier} (expected YYYY-MM-DD)")]
    BadDate { identifier: String, date: String },

    #[error("Entry \"{date}\" in listing {identifier} has no locator")]
    MissingLocator { identifier: String, date: String },
}

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to list timeline files at {url}: {source}")]
    ListingFetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("Failed to fetch listing {name}: {source}")]
    FileFetch {
        name: String,
        #[source]
        source: FetchError,
    },

    #[error("Failed to load events from {locator}: {source}")]
    EventFetch {
        locator: String,
        #[source]
        source: FetchError,
    },

    #[error("{0}")]
    IndexValidation(#[from] ValidationError),

    #[error("No such node in timeline: {path}")]
    UnknownNode { path: String },

    #[error("Month {month} of {year} is not visible; expand {year} first")]
    NodeNotMaterialized { year: String, month: String },

    #[error("No events indexed for {date}")]
    UnknownDay { date: String },

    #[error("No day is selected")]
    NoActiveDay,

    #[error("Event #{number} does not exist ({count} events on {date})")]
    EventOutOfRange {
        number: usize,
        count: usize,
        date: String,
    },

    #[error("Invalid date \"{input}\" (expected YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Timeline is empty")]
    EmptyTimeline,
}

impl AppError {
    /// Status code of the underlying HTTP failure, if any
    pub(crate) fn http_status(&self) -> Option<u16> {
        match self {
            AppError::ListingFetch { source, .. }
            | AppError::FileFetch { source, .. }
            | AppError::EventFetch { source, .. } => source.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_fetch_names_url_and_status() {
        let e = AppError::ListingFetch {
            url: "https://api.github.com/repos/o/r/contents/data".to_string(),
            source: FetchError::Status(403),
        };
        assert_eq!(
            e.to_string(),
            "Failed to list timeline files at https://api.github.com/repos/o/r/contents/data: HTTP status 403"
        );
        assert_eq!(e.http_status(), Some(403));
    }

    #[test]
    fn event_fetch_display() {
        let e = AppError::EventFetch {
            locator: "https://example.com/day.json".to_string(),
            source: FetchError::Status(404),
        };
        assert_eq!(
            e.to_string(),
            "Failed to load events from https://example.com/day.json: HTTP status 404"
        );
    }

    #[test]
    fn transport_errors_carry_no_status() {
        let e = AppError::FileFetch {
            name: "2024-05".to_string(),
            source: FetchError::Transport("connection refused".to_string()),
        };
        assert_eq!(e.http_status(), None);
        assert_eq!(
            e.to_string(),
            "Failed to fetch listing 2024-05: request failed: connection refused"
        );
    }

    #[test]
    fn validation_error_converts() {
        let v = ValidationError::BadIdentifier {
            identifier: "2024".to_string(),
        };
        let app: AppError = v.into();
        assert_eq!(
            app.to_string(),
            r#"Invalid listing identifier "2024" (expected YYYY-MM)"#
        );
    }

    #[test]
    fn out_of_range_display() {
        let e = AppError::EventOutOfRange {
            number: 4,
            count: 2,
            date: "2024-05-22".to_string(),
        };
        assert_eq!(e.to_string(), "Event #4 does not exist (2 events on 2024-05-22)");
    }
}
