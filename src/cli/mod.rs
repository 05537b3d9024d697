pub(crate) mod args;
pub(crate) mod commands;

pub(crate) use args::{Cli, ColorMode};
pub(crate) use commands::Commands;
