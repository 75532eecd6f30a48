use comfy_table::{Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{config::Catalog, core::Projection, quantity::cost::Cost};

#[must_use]
pub fn build_projection_table(projection: &Projection) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Horizon", "Savings"]);
    for (horizon, savings) in [
        ("Monthly", projection.monthly),
        ("Annual", projection.annual),
        ("10 years", projection.ten_year),
        ("15 years", projection.fifteen_year),
    ] {
        table.add_row(vec![
            Cell::new(horizon),
            Cell::new(savings.round_to_cents())
                .set_alignment(CellAlignment::Right)
                .fg(if savings > Cost::ZERO { Color::Green } else { Color::DarkYellow }),
        ]);
    }
    if let Some(shortfall) = projection.shortfall() {
        table.add_row(vec![
            Cell::new("Uncovered peak"),
            Cell::new(shortfall).set_alignment(CellAlignment::Right).fg(Color::Red),
        ]);
    }
    table
}

#[must_use]
pub fn build_provider_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Provider", "Peak", "Off-peak"]);
    for (name, schedule) in &catalog.providers {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(schedule.peak).set_alignment(CellAlignment::Right).fg(Color::Red),
            Cell::new(schedule.off_peak).set_alignment(CellAlignment::Right).fg(Color::Green),
        ]);
    }
    table
}

#[must_use]
pub fn build_battery_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Model", "Storage", "Power"]);
    for (name, profile) in &catalog.batteries {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(profile.storage).set_alignment(CellAlignment::Right),
            Cell::new(profile.power).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
