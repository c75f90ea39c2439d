// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar arithmetic for roster columns.
//!
//! Months are 1-indexed everywhere in this crate. Day counts come from
//! "day 0 of the next month": the day before the first of the following
//! month is the last day of this one.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Returns the number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    Ok(last_day(year, month)?.day())
}

fn last_day(year: i32, month: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidMonth(month));
    }
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1).ok_or(Error::InvalidYear(year))?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .ok_or(Error::InvalidYear(year))
}

/// Short weekday name for a header column. Presentation only.
pub fn weekday_label(year: i32, month: u32, day: u32) -> Result<&'static str> {
    let date = Month::new(year, month)?.date(day)?;
    Ok(short_name(date.weekday()))
}

fn short_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// A (year, month) pair that is known to be valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Creates a month, validating both fields.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        // Validates the month number and that the whole month is representable.
        last_day(year, month)?;
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(Error::InvalidYear(year))?;
        Ok(Month { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Month {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-indexed month number.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of days, which is also the grid column count.
    pub fn days(&self) -> u32 {
        self.last_day().day()
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        last_day(self.year, self.month).unwrap_or(NaiveDate::MIN)
    }

    /// The date of `day` within this month.
    pub fn date(&self, day: u32) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day).ok_or_else(|| Error::DayOutOfRange {
            month: self.to_string(),
            day,
            days: self.days(),
        })
    }

    /// Returns true if `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// One header column per day, in order.
    pub fn columns(&self) -> Vec<Column> {
        self.first_day()
            .iter_days()
            .take_while(|date| self.contains(*date))
            .map(Column::new)
            .collect()
    }

    /// The following month.
    pub fn succ(&self) -> Result<Self> {
        if self.month == 12 {
            Month::new(self.year.checked_add(1).ok_or(Error::InvalidYear(self.year))?, 1)
        } else {
            Month::new(self.year, self.month + 1)
        }
    }

    /// The preceding month.
    pub fn pred(&self) -> Result<Self> {
        if self.month == 1 {
            Month::new(self.year.checked_sub(1).ok_or(Error::InvalidYear(self.year))?, 12)
        } else {
            Month::new(self.year, self.month - 1)
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidMonthSpec(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Month::new(year, month)
    }
}

impl TryFrom<String> for Month {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Month> for String {
    fn from(month: Month) -> String {
        month.to_string()
    }
}

/// A single day column of the grid header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Day of month, starting at 1.
    pub day: u32,
    pub date: NaiveDate,
    pub weekday: Weekday,
}

impl Column {
    fn new(date: NaiveDate) -> Self {
        Column {
            day: date.day(),
            date,
            weekday: date.weekday(),
        }
    }

    /// Short weekday name for the header.
    pub fn label(&self) -> &'static str {
        short_name(self.weekday)
    }

    /// Saturday or Sunday. Used for emphasis only.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday, Weekday::Sat | Weekday::Sun)
    }
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod tests;
