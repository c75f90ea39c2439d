// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for grid output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use chrono::Weekday;
use rota_core::Shift;

/// ANSI 256-color codes.
pub mod codes {
    /// Titles and column headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Hints and empty cells: medium grey
    pub const CONTEXT: u8 = 245;
    pub const SATURDAY: u8 = 111;
    pub const SUNDAY: u8 = 210;
    pub const DAY: u8 = 222;
    pub const NIGHT: u8 = 141;
    pub const OFF: u8 = 250;
    pub const HOLIDAY: u8 = 114;

    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// Wraps `text` in a foreground color.
pub fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, codes::RESET)
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Saturday and Sunday get their own colors; weekdays use the header color.
pub fn weekday(day: Weekday, text: &str) -> String {
    match day {
        Weekday::Sat => paint(codes::SATURDAY, text),
        Weekday::Sun => paint(codes::SUNDAY, text),
        _ => header(text),
    }
}

pub fn shift_code(shift: Shift) -> Option<u8> {
    match shift {
        Shift::Empty => None,
        Shift::Holiday => Some(codes::HOLIDAY),
        Shift::Off => Some(codes::OFF),
        Shift::Day => Some(codes::DAY),
        Shift::Night => Some(codes::NIGHT),
    }
}

pub fn shift(shift: Shift, text: &str) -> String {
    match shift_code(shift) {
        Some(code) => paint(code, text),
        None => context(text),
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
