// ===== quadcrack/src/reports.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use quadcrack::cipher::SubstKey;
use quadcrack::consts::ALPHABET;

/// Prints a key as a two-row mapping table, e.g. Cipher over Plain for a
/// cracked key, or Plain over Cipher for a freshly drawn one.
pub fn print_key_table(from_label: &str, to_label: &str, key: &SubstKey) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let alphabet: String = ALPHABET.iter().map(|&b| b as char).collect();

    table.add_row(vec![
        Cell::new(from_label).add_attribute(Attribute::Bold),
        Cell::new(alphabet),
    ]);
    table.add_row(vec![
        Cell::new(to_label).add_attribute(Attribute::Bold),
        Cell::new(key.to_string()).fg(Color::Cyan),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Center);
    }

    println!("{}", table);
}

/// Prints per-restart results, best first, marking the winner.
pub fn print_restart_table(mut results: Vec<(usize, f32)>, best_restart: usize) {
    results.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Restart").add_attribute(Attribute::Bold),
        Cell::new("Fitness").add_attribute(Attribute::Bold),
    ]);

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (restart, score) in results {
        let name_cell = if restart == best_restart {
            Cell::new(format!("#{} 🏆", restart))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(format!("#{}", restart))
        };
        table.add_row(vec![name_cell, Cell::new(format!("{:.2}", score))]);
    }

    println!("\n{}", table);
}
