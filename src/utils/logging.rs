use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Install the stderr logger with level prefixes colored only when `use_color`
pub(crate) fn init_logging(use_color: bool, debug: bool, quiet: bool) {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    // Fails only when a logger is already installed
    if let Err(e) = TermLogger::init(
        LevelFilter::Debug,
        config,
        TerminalMode::Stderr,
        color_choice(use_color),
    ) {
        eprintln!("Warning: logging unavailable: {e}");
    }
    log::set_max_level(verbosity(debug, quiet));
}

fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    }
}

pub(crate) fn verbosity(debug: bool, quiet: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}
