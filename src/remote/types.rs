use serde::Deserialize;

/// One entry of a contents API directory listing
#[derive(Debug, Clone, Deserialize)]
pub(super) struct RemoteFile {
    pub(super) name: String,
    /// `null` for directories and submodules
    #[serde(default)]
    pub(super) download_url: Option<String>,
}

/// One day of a listing file. Both fields are checked by the index builder,
/// so a partially broken file still yields its valid days.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub(crate) struct DayEntry {
    #[serde(default)]
    pub(crate) date: Option<String>,
    #[serde(default)]
    pub(crate) url: Option<String>,
}

impl DayEntry {
    #[cfg(test)]
    pub(crate) fn new(date: &str, url: &str) -> Self {
        Self {
            date: Some(date.to_string()),
            url: Some(url.to_string()),
        }
    }
}

/// A downloaded `YYYY-MM.json` listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListingFile {
    /// File name without the `.json` suffix
    pub(crate) identifier: String,
    pub(crate) days: Vec<DayEntry>,
}
