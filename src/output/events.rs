use comfy_table::{CellAlignment, Color};

use crate::consts::{DESCRIPTION_WORD_LIMIT, UNKNOWN_TIME};
use crate::timeline::{DayKey, EventRecord};

use super::format::{OutputOptions, create_styled_table, header_cell, paint, styled_cell};

/// Breadcrumb line followed by one table row per event
pub(crate) fn render_event_table(
    day: &DayKey,
    events: &[EventRecord],
    options: OutputOptions,
) -> String {
    let c = options.use_color;
    let breadcrumb = paint(&day.breadcrumb(), "1", c);
    if events.is_empty() {
        return format!("\n  {breadcrumb}\n\n  No events recorded for this day.\n");
    }

    let mut table = create_styled_table();
    let mut header = vec![header_cell("#", c), header_cell("Title", c)];
    if !options.compact {
        header.push(header_cell("Description", c));
    }
    header.push(header_cell("Tags", c));
    table.set_header(header);

    for (i, event) in events.iter().enumerate() {
        let mut row = vec![
            styled_cell(&(i + 1).to_string(), None, false).set_alignment(CellAlignment::Right),
            styled_cell(&event.title, c.then_some(Color::White), true),
        ];
        if !options.compact {
            row.push(styled_cell(
                &truncate_description(&event.description),
                None,
                false,
            ));
        }
        row.push(styled_cell(
            &event.tags.join(", "),
            c.then_some(Color::Yellow),
            false,
        ));
        table.add_row(row);
    }

    let noun = if events.len() == 1 { "event" } else { "events" };
    format!(
        "\n  {breadcrumb}\n\n{table}\n\n  {} {noun} | ttm show {day} --event <N> for details\n",
        events.len()
    )
}

fn truncate_description(description: &str) -> String {
    super::format::truncate_words(description, DESCRIPTION_WORD_LIMIT)
}

pub(crate) fn events_json(day: &DayKey, events: &[EventRecord]) -> String {
    let output = serde_json::json!({
        "date": day.to_string(),
        "events": events,
    });
    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        log::error!("Failed to serialize JSON output: {e}");
        "{}".to_string()
    })
}

/// Full view of a single event with its date context
pub(crate) fn render_detail(day: &DayKey, event: &EventRecord, use_color: bool) -> String {
    let mut lines = vec![
        String::new(),
        format!("  {}", paint(&event.title, "1", use_color)),
        format!(
            "  🕒 {} | 📅 {day}",
            event.time.as_deref().unwrap_or(UNKNOWN_TIME)
        ),
        String::new(),
    ];
    for line in event.description.lines() {
        lines.push(format!("  {line}"));
    }
    if !event.tags.is_empty() {
        lines.push(String::new());
        let tags: Vec<String> = event
            .tags
            .iter()
            .map(|tag| paint(&format!("#{tag}"), "33", use_color))
            .collect();
        lines.push(format!("  {}", tags.join(" ")));
    }
    if let Some(source) = &event.source {
        lines.push(String::new());
        lines.push(format!("  🔗 Source: {source}"));
    }
    lines.push(String::new());
    lines.join("\n")
}

pub(crate) fn detail_json(day: &DayKey, event: &EventRecord) -> String {
    let output = serde_json::json!({
        "date": day.to_string(),
        "event": event,
    });
    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        log::error!("Failed to serialize JSON output: {e}");
        "{}".to_string()
    })
}
