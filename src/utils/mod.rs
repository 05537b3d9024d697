pub(crate) mod date;
pub(crate) mod logging;

pub(crate) use date::parse_day_key;
pub(crate) use logging::init_logging;
