use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

/// Presentation switches shared by every renderer
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct OutputOptions {
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
    pub(crate) json: bool,
}

/// Keep the first `limit` space-separated words, marking the cut with "..."
pub(super) fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    if words.len() <= limit {
        return text.to_string();
    }
    format!("{}...", words[..limit].join(" "))
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// Wrap `text` in an ANSI color when enabled
pub(super) fn paint(text: &str, code: &str, use_color: bool) -> String {
    if use_color {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_words("one two three", 3), "one two three");
        assert_eq!(truncate_words("", 20), "");
    }

    #[test]
    fn long_text_is_cut_at_word_limit() {
        assert_eq!(truncate_words("one two three four", 2), "one two...");
        let long: Vec<String> = (1..=25).map(|i| format!("w{i}")).collect();
        let cut = truncate_words(&long.join(" "), 20);
        assert!(cut.ends_with("w20..."));
        assert!(!cut.contains("w21"));
    }

    #[test]
    fn paint_is_plain_without_color() {
        assert_eq!(paint("x", "1;32", false), "x");
        assert_eq!(paint("x", "1;32", true), "\x1b[1;32mx\x1b[0m");
    }
}
