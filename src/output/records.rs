use std::path::Path;

use comfy_table::Color;

use crate::records::PersonalRecord;

use super::format::{create_styled_table, header_cell, right_cell, taxon_word};

/// Render personal bests as a table with a total row
pub(crate) fn records_table(records: &[PersonalRecord], dir: &Path, use_color: bool) -> String {
    if records.is_empty() {
        return format!("No personal records yet in {}.", dir.display());
    }

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Family", use_color),
        header_cell("Best", use_color),
    ]);

    let mut total = 0u32;
    for record in records {
        total = total.saturating_add(record.best);
        table.add_row(vec![
            comfy_table::Cell::new(&record.category),
            right_cell(&record.best.to_string(), None, false),
        ]);
    }

    let total_color = use_color.then_some(Color::Yellow);
    table.add_row(vec![
        comfy_table::Cell::new("TOTAL").add_attribute(comfy_table::Attribute::Bold),
        right_cell(&total.to_string(), total_color, true),
    ]);

    format!(
        "\n  Current personal records\n\n{table}\n\n  {total} {} total\n",
        taxon_word(total)
    )
}
