//! Remote content API access
//!
//! Discovers listing files in a repository directory and downloads them.

mod client;
mod fetcher;
#[cfg(test)]
pub(crate) mod testing;
mod types;

pub(crate) use client::{HttpGet, UreqClient};
pub(crate) use fetcher::{RemoteRepo, fetch_listings};
pub(crate) use types::{DayEntry, ListingFile};
