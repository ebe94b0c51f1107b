//! Chronological sort key for detection records.
//!
//! The backend reports `date` and `time` as separate strings; combined they
//! form the record's chronological key. Records whose key does not parse
//! sort before every parseable key ascending (after it descending), and the
//! caller's stable sort keeps ties in snapshot order.

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;

use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::net::types::PlateRecord;
use crate::state::plates::SortDirection;

/// Parse the ISO-style concatenation of a record's `date` and `time` fields.
///
/// Accepts times with and without a seconds component. Returns `None` when
/// the combination is not a valid timestamp.
pub fn timestamp_key(date: &str, time: &str) -> Option<NaiveDateTime> {
    let joined = format!("{date}T{time}");
    NaiveDateTime::parse_from_str(&joined, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(&joined, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Compare two records by their chronological key in the given direction.
pub fn compare_records(a: &PlateRecord, b: &PlateRecord, direction: SortDirection) -> Ordering {
    let key_a = timestamp_key(&a.date, &a.time);
    let key_b = timestamp_key(&b.date, &b.time);
    match direction {
        SortDirection::Asc => key_a.cmp(&key_b),
        SortDirection::Desc => key_b.cmp(&key_a),
    }
}
