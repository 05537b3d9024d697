/// Day-entry date format used by listings: "2024-05-22"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Only directory entries with this suffix are treated as listings
pub(crate) const LISTING_SUFFIX: &str = ".json";

pub(crate) const DEFAULT_API_BASE: &str = "https://api.github.com";
pub(crate) const DEFAULT_OWNER: &str = "faruk-ahmad";
pub(crate) const DEFAULT_REPO: &str = "ttm";
pub(crate) const DEFAULT_LISTINGS_PATH: &str = "data/listings";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Descriptions in the event list are cut after this many words
pub(crate) const DESCRIPTION_WORD_LIMIT: usize = 20;

/// Shown in the detail view when an event carries no time
pub(crate) const UNKNOWN_TIME: &str = "Unknown Time";
