use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{core::peak::Peak, quantity::energy::KilowattHours};

#[must_use]
pub fn build_hourly_table(
    date: NaiveDate,
    hourly: &BTreeMap<u32, KilowattHours>,
    is_daylight_saving: bool,
) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Hour", "Energy", "Class"]);
    let (mut on_peak, mut off_peak) = (KilowattHours::zero(), KilowattHours::zero());
    for (hour, energy) in hourly {
        let peak = Peak::classify(date.weekday(), *hour, is_daylight_saving);
        match peak {
            Peak::On => on_peak += *energy,
            Peak::Off => off_peak += *energy,
        }
        table.add_row(vec![
            Cell::new(format!("{hour:02}:00")),
            Cell::new(energy)
                .set_alignment(CellAlignment::Right)
                .fg(if energy.is_zero() { Color::DarkGrey } else { Color::Reset }),
            Cell::new(peak).fg(match peak {
                Peak::On => Color::Red,
                Peak::Off => Color::Green,
            }),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(on_peak).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
        Cell::new(Peak::On).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(off_peak).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
        Cell::new(Peak::Off).add_attribute(Attribute::Bold),
    ]);
    table
}

#[must_use]
pub fn build_daily_total_table(date: NaiveDate, total: KilowattHours) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Energy"]);
    table.add_row(vec![
        Cell::new(date.format("%m/%d/%Y")),
        Cell::new(total).set_alignment(CellAlignment::Right),
    ]);
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}
