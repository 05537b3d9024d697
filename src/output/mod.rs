mod events;
mod format;
mod terminal;
mod tree;

pub(crate) use format::OutputOptions;
pub(crate) use terminal::TerminalSurface;
pub(crate) use tree::render_tree;
