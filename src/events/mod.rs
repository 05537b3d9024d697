//! Day payload loading with a session-scoped cache

mod loader;

pub(crate) use loader::EventLoader;
