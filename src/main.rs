mod app;
mod cli;
mod config;
mod consts;
mod error;
mod events;
mod output;
mod remote;
mod timeline;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::init_logging;

fn main() {
    let loaded = Config::load();
    let cli = Cli::parse().with_config(&loaded.config);
    init_logging(cli.use_stderr_color(), cli.debug, cli.quiet);
    loaded.report();

    if let Err(e) = app::run(&cli) {
        log::error!("{e}");
        if e.http_status() == Some(404) {
            log::info!("Check the --owner, --repo and --path settings");
        }
        std::process::exit(1);
    }
}
