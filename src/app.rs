use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::error::AppError;
use crate::events::EventLoader;
use crate::output::{OutputOptions, TerminalSurface, render_tree};
use crate::remote::{UreqClient, fetch_listings};
use crate::timeline::{DayKey, NodeState, Selection, Session, TimelineIndex, auto_load_latest};
use crate::utils::parse_day_key;

type TerminalSession = Session<UreqClient, TerminalSurface>;

/// Fetch every listing and organize it. Runs once per invocation; nothing is
/// rendered before the index is complete.
fn build_index(cli: &Cli, http: &UreqClient) -> Result<TimelineIndex, AppError> {
    let repo = cli.remote_repo();
    log::info!(
        "Loading timeline from {}/{} ({})",
        repo.owner,
        repo.repo,
        repo.listings_path
    );
    let listings = fetch_listings(http, &repo)?;

    let start = Instant::now();
    let (index, rejected) = TimelineIndex::organize(&listings);
    if !rejected.is_empty() {
        log::warn!("{} entries could not be indexed", rejected.len());
    }
    if index.is_empty() {
        log::warn!("No listings found under {}", repo.listings_path);
    }
    let days = index.day_count();
    log::info!(
        "Indexed {days} {} ({:.2}ms)",
        if days == 1 { "day" } else { "days" },
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(index)
}

fn open_session(cli: &Cli, surface: TerminalSurface) -> Result<TerminalSession, AppError> {
    let http = UreqClient::new(cli.timeout());
    let index = build_index(cli, &http)?;
    Ok(Session::new(index, EventLoader::new(http), surface))
}

fn print_tree(session: &TerminalSession, options: OutputOptions) {
    print!(
        "{}",
        render_tree(
            &session.navigator().visible_rows(session.index()),
            options.use_color
        )
    );
}

fn handle_latest(cli: &Cli) -> Result<(), AppError> {
    let options = cli.output_options();
    let mut session = open_session(cli, TerminalSurface::new(options))?;
    match auto_load_latest(&mut session)? {
        Some(Selection::Rendered { day, count }) => {
            log::debug!("Showing {count} events for {day}");
            Ok(())
        }
        Some(Selection::Stale { day }) => {
            log::debug!("Result for {day} was superseded");
            Ok(())
        }
        None if session.index().day_count() == 0 => Err(AppError::EmptyTimeline),
        None => Ok(()),
    }
}

fn handle_tree(cli: &Cli, year: Option<&str>, month: Option<&str>) -> Result<(), AppError> {
    let options = cli.output_options();
    let mut session = open_session(cli, TerminalSurface::new(options))?;
    if let Some(year) = year {
        session.toggle_year(year)?;
        if let Some(month) = month {
            session.toggle_month(year, month)?;
        }
    }

    if options.json {
        let rows: Vec<serde_json::Value> = session
            .navigator()
            .visible_rows(session.index())
            .iter()
            .map(|row| {
                serde_json::json!({
                    "depth": row.depth,
                    "path": row.path.to_string(),
                    "expanded": row.state == Some(NodeState::Expanded),
                })
            })
            .collect();
        print_json(&serde_json::Value::Array(rows));
    } else {
        print_tree(&session, options);
    }
    Ok(())
}

/// Drive the navigator down to `day` the same way a user would
fn navigate_to(session: &mut TerminalSession, day: &DayKey) -> Result<(), AppError> {
    if session.index().locator(day).is_none() {
        return Err(AppError::UnknownDay {
            date: day.to_string(),
        });
    }
    session.expand_year(&day.year)?;
    session.expand_month(&day.year, &day.month)?;
    session.select_day(day)?;
    Ok(())
}

fn handle_show(cli: &Cli, date: &str, event: Option<usize>) -> Result<(), AppError> {
    let day = parse_day_key(date)?;
    let options = cli.output_options();
    let surface = match event {
        Some(_) => TerminalSurface::new(options).without_event_list(),
        None => TerminalSurface::new(options),
    };
    let mut session = open_session(cli, surface)?;
    navigate_to(&mut session, &day)?;
    if let Some(number) = event {
        session.show_detail(number)?;
    }
    Ok(())
}

fn handle_index(cli: &Cli) -> Result<(), AppError> {
    let http = UreqClient::new(cli.timeout());
    let index = build_index(cli, &http)?;
    print_json(&index);
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize JSON output: {e}"),
    }
}

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    match Commands::or_default(cli.command.clone()) {
        Commands::Latest => handle_latest(cli),
        Commands::Tree { year, month } => handle_tree(cli, year.as_deref(), month.as_deref()),
        Commands::Show { date, event } => handle_show(cli, &date, event),
        Commands::Index => handle_index(cli),
    }
}
