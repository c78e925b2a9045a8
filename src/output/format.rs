use std::time::Duration;

use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

/// "genus" for exactly one, "genera" otherwise
pub(super) fn taxon_word(count: u32) -> &'static str {
    if count == 1 { "genus" } else { "genera" }
}

/// Seconds with two decimals, e.g. "10.53"
pub(super) fn format_secs(d: Duration) -> String {
    format!("{:.2}", d.as_secs_f64())
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
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
    fn taxon_word_singular_and_plural() {
        assert_eq!(taxon_word(0), "genera");
        assert_eq!(taxon_word(1), "genus");
        assert_eq!(taxon_word(2), "genera");
    }

    #[test]
    fn format_secs_two_decimals() {
        assert_eq!(format_secs(Duration::from_millis(10_534)), "10.53");
        assert_eq!(format_secs(Duration::ZERO), "0.00");
    }
}
