// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[test]
fn record_wire_field_names() {
    let date = NaiveDate::from_ymd_opt(2024, 4, 10).unwrap();
    let record = ScheduleRecord::new(WorkerId(3), date, Shift::Night);
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "employee_id": 3,
            "date": "2024-04-10",
            "shift_type": "Night",
        })
    );
}

#[test]
fn record_tolerates_unknown_fields_and_shifts() {
    let record: ScheduleRecord = serde_json::from_str(
        r#"{"id": 99, "employee_id": 1, "date": "2024-04-01", "shift_type": "Evening"}"#,
    )
    .unwrap();
    assert_eq!(record.worker_id, WorkerId(1));
    assert_eq!(record.parsed_shift(), None);
    assert_eq!(
        record.parsed_date(),
        Some(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap())
    );
}

#[parameterized(
    garbage = { "not-a-date" },
    impossible = { "2023-02-29" },
    slashed = { "2024/04/01" },
)]
fn record_bad_dates_do_not_parse(date: &str) {
    let record = ScheduleRecord {
        worker_id: WorkerId(1),
        date: date.to_string(),
        shift: "Day".to_string(),
    };
    assert_eq!(record.parsed_date(), None);
}

#[test]
fn month_range_is_inclusive() {
    let range = DateRange::month(Month::new(2024, 2).unwrap());
    assert_eq!(range.start.to_string(), "2024-02-01");
    assert_eq!(range.end.to_string(), "2024-02-29");
    assert!(range.contains(range.start));
    assert!(range.contains(range.end));
    assert!(!range.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
}
