//! In-memory `HttpGet` double for unit tests

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::FetchError;

use super::HttpGet;

enum Canned {
    Body(String),
    Status(u16),
}

/// Serves canned bodies by exact URL and counts every request.
/// Unknown URLs answer 404.
#[derive(Default)]
pub(crate) struct StaticHttp {
    routes: HashMap<String, Canned>,
    hits: Mutex<HashMap<String, usize>>,
}

impl StaticHttp {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_body(mut self, url: &str, body: &str) -> Self {
        self.routes.insert(url.to_string(), Canned::Body(body.to_string()));
        self
    }

    pub(crate) fn with_status(mut self, url: &str, status: u16) -> Self {
        self.routes.insert(url.to_string(), Canned::Status(status));
        self
    }

    pub(crate) fn hits(&self, url: &str) -> usize {
        self.hits
            .lock()
            .map(|hits| hits.get(url).copied().unwrap_or(0))
            .unwrap_or(0)
    }
}

impl HttpGet for StaticHttp {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        if let Ok(mut hits) = self.hits.lock() {
            *hits.entry(url.to_string()).or_default() += 1;
        }
        match self.routes.get(url) {
            Some(Canned::Body(body)) => Ok(body.clone()),
            Some(Canned::Status(status)) => Err(FetchError::Status(*status)),
            None => Err(FetchError::Status(404)),
        }
    }
}
