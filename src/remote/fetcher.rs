use std::time::Instant;

use rayon::prelude::*;

use crate::consts::LISTING_SUFFIX;
use crate::error::AppError;

use super::client::HttpGet;
use super::types::{DayEntry, ListingFile, RemoteFile};

/// Location of the listings directory on the contents API
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RemoteRepo {
    pub(crate) api_base: String,
    pub(crate) owner: String,
    pub(crate) repo: String,
    pub(crate) listings_path: String,
}

impl RemoteRepo {
    pub(crate) fn listing_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.listings_path.trim_matches('/')
        )
    }
}

/// Keep `.json` files that can be downloaded, paired with their identifier
fn listing_candidates(files: Vec<RemoteFile>) -> Vec<(String, String)> {
    files
        .into_iter()
        .filter_map(|file| {
            let identifier = file.name.strip_suffix(LISTING_SUFFIX)?.to_string();
            match file.download_url {
                Some(url) => Some((identifier, url)),
                None => {
                    log::debug!("{} has no download URL, skipping", file.name);
                    None
                }
            }
        })
        .collect()
}

/// Download every listing file in the configured directory.
///
/// The directory request is fatal on failure. Individual files that fail are
/// logged and left out; the rest keep the order of the directory listing.
pub(crate) fn fetch_listings<H: HttpGet>(
    http: &H,
    repo: &RemoteRepo,
) -> Result<Vec<ListingFile>, AppError> {
    let start = Instant::now();
    let url = repo.listing_url();
    let files: Vec<RemoteFile> = http.get_json(&url).map_err(|source| AppError::ListingFetch {
        url: url.clone(),
        source,
    })?;

    let candidates = listing_candidates(files);
    log::debug!(
        "Found {} listing files in {}/{}",
        candidates.len(),
        repo.owner,
        repo.repo
    );

    let listings: Vec<ListingFile> = candidates
        .par_iter()
        .filter_map(
            |(identifier, download_url)| match http.get_json::<Vec<DayEntry>>(download_url) {
                Ok(days) => Some(ListingFile {
                    identifier: identifier.clone(),
                    days,
                }),
                Err(source) => {
                    let err = AppError::FileFetch {
                        name: identifier.clone(),
                        source,
                    };
                    log::warn!("{err}, skipping");
                    None
                }
            },
        )
        .collect();

    log::info!(
        "Fetched {} of {} listings ({:.2}ms)",
        listings.len(),
        candidates.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(listings)
}
