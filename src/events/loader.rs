use std::collections::HashMap;
use std::time::Instant;

use crate::error::AppError;
use crate::remote::HttpGet;
use crate::timeline::{DayPayload, EventRecord};

/// Fetches day payloads by locator and keeps every successful result for the
/// rest of the session. Failures are never cached, so asking again retries.
pub(crate) struct EventLoader<H> {
    http: H,
    cache: HashMap<String, Vec<EventRecord>>,
}

impl<H: HttpGet> EventLoader<H> {
    pub(crate) fn new(http: H) -> Self {
        Self {
            http,
            cache: HashMap::new(),
        }
    }

    pub(crate) fn load_events(&mut self, locator: &str) -> Result<Vec<EventRecord>, AppError> {
        if let Some(events) = self.cache.get(locator) {
            log::debug!("Cache hit for {locator} ({} events)", events.len());
            return Ok(events.clone());
        }

        let start = Instant::now();
        let payload: DayPayload =
            self.http.get_json(locator).map_err(|source| AppError::EventFetch {
                    locator: locator.to_string(),
                    source,
                })?;
        log::debug!(
            "Fetched {} events from {locator} ({:.2}ms)",
            payload.events.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        self.cache.insert(locator.to_string(), payload.events.clone());
        Ok(payload.events)
    }

    /// Events already fetched for `locator`, without touching the network
    pub(crate) fn cached(&self, locator: &str) -> Option<&[EventRecord]> {
        self.cache.get(locator).map(Vec::as_slice)
    }

    #[cfg(test)]
    pub(crate) fn http(&self) -> &H {
        &self.http
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::testing::StaticHttp;

    const DAY: &str = "https://raw.test/2024/05/22.json";

    fn payload() -> &'static str {
        r#"{"events": [
            {"title": "Launch", "description": "Rocket launch", "tags": ["space"], "time": "09:30"},
            {"title": "Vote", "description": "Parliament vote", "tags": []}
        ]}"#
    }

    #[test]
    fn second_load_is_served_from_cache() {
        let mut loader = EventLoader::new(StaticHttp::new().with_body(DAY, payload()));

        let first = loader.load_events(DAY).unwrap();
        let second = loader.load_events(DAY).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].title, "Launch");
        assert_eq!(loader.http().hits(DAY), 1);
    }

    #[test]
    fn not_found_is_an_event_fetch_error_and_not_cached() {
        let mut loader = EventLoader::new(StaticHttp::new().with_status(DAY, 404));

        let err = loader.load_events(DAY).unwrap_err();
        assert!(matches!(err, AppError::EventFetch { .. }));
        assert_eq!(err.http_status(), Some(404));
        assert!(loader.cached(DAY).is_none());

        // no negative caching: the next call goes back to the network
        let _ = loader.load_events(DAY);
        assert_eq!(loader.http().hits(DAY), 2);
    }

    #[test]
    fn payload_without_events_field_fails() {
        let mut loader = EventLoader::new(StaticHttp::new().with_body(DAY, r#"{"items": []}"#));

        let err = loader.load_events(DAY).unwrap_err();
        assert!(matches!(err, AppError::EventFetch { .. }));
        assert!(loader.cached(DAY).is_none());
    }

    #[test]
    fn cache_is_keyed_by_locator() {
        let other = "https://raw.test/2024/05/10.json";
        let mut loader = EventLoader::new(
            StaticHttp::new()
                .with_body(DAY, payload())
                .with_body(other, r#"{"events": []}"#),
        );

        loader.load_events(DAY).unwrap();
        loader.load_events(other).unwrap();
        assert_eq!(loader.cached(DAY).map(<[EventRecord]>::len), Some(2));
        assert_eq!(loader.cached(other).map(<[EventRecord]>::len), Some(0));
    }
}
