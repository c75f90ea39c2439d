// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of grid snapshots.

use chrono::Weekday;
use rota_core::view::RowView;
use rota_core::{GridView, Shift, Worker};

use crate::colors;

const MIN_NAME_WIDTH: usize = 6;
const MAX_NAME_WIDTH: usize = 20;
const CELL_WIDTH: usize = 3;

const STATS_COLUMNS: [&str; 5] = ["Day", "Night", "Off", "Holiday", "Total"];

fn name_width(view: &GridView) -> usize {
    view.rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(MIN_NAME_WIDTH, MAX_NAME_WIDTH)
}

fn fit(name: &str, width: usize) -> String {
    let count = name.chars().count();
    if count <= width {
        format!("{}{}", name, " ".repeat(width - count))
    } else {
        let mut cut: String = name.chars().take(width - 1).collect();
        cut.push('~');
        cut
    }
}

/// Title line, e.g. `April 2024 (view only)`.
pub fn format_title(view: &GridView) -> String {
    let title = view.month.first_day().format("%B %Y").to_string();
    if view.mode.is_view_only() {
        format!("{} (view only)", title)
    } else {
        title
    }
}

/// Month grid with day and weekday header rows. Saturday and Sunday
/// columns are colored apart when `color` is set.
pub fn format_grid(view: &GridView, color: bool) -> Vec<String> {
    let width = name_width(view);
    let mut lines = Vec::with_capacity(view.rows.len() + 3);

    let title = format_title(view);
    lines.push(if color { colors::header(&title) } else { title });

    let mut days = " ".repeat(width);
    let mut weekdays = " ".repeat(width);
    for column in &view.header {
        let day = format!("{:>CELL_WIDTH$}", column.day);
        let label: String = column.weekday.chars().take(2).collect();
        let label = format!("{:>CELL_WIDTH$}", label);
        match (color, column.weekday.parse::<Weekday>()) {
            (true, Ok(weekday)) => {
                days.push_str(&colors::weekday(weekday, &day));
                weekdays.push_str(&colors::weekday(weekday, &label));
            }
            _ => {
                days.push_str(&day);
                weekdays.push_str(&label);
            }
        }
    }
    lines.push(days);
    lines.push(weekdays);

    for row in &view.rows {
        lines.push(format_row(row, width, color));
    }
    lines
}

fn format_row(row: &RowView, width: usize, color: bool) -> String {
    let mut line = fit(&row.name, width);
    for cell in &row.cells {
        let text = format!("{:>CELL_WIDTH$}", cell.shift.code());
        if color {
            line.push_str(&colors::shift(cell.shift, &text));
        } else {
            line.push_str(&text);
        }
    }
    line
}

/// Per-worker counts table.
pub fn format_stats(view: &GridView) -> Vec<String> {
    let width = name_width(view);
    let mut header = fit("Worker", width);
    for column in STATS_COLUMNS {
        header.push_str(&format!("  {:>7}", column));
    }

    let mut lines = vec![header];
    for row in &view.rows {
        let stats = &row.stats;
        let mut line = fit(&row.name, width);
        for count in [
            stats.day,
            stats.night,
            stats.off,
            stats.holiday,
            stats.total,
        ] {
            line.push_str(&format!("  {:>7}", count));
        }
        lines.push(line);
    }
    lines
}

/// One-line key for the cell codes.
pub fn format_legend() -> String {
    Shift::CYCLE
        .iter()
        .map(|shift| format!("{} {}", shift.code(), shift.as_str().to_lowercase()))
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn format_workers(workers: &[Worker]) -> Vec<String> {
    workers
        .iter()
        .map(|w| format!("{:>4}  {}", w.id.0, w.name))
        .collect()
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
