//! Shared wire-schema DTOs for the backend REST boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the backend's JSON payloads so serde
//! round-trips stay lossless and the list endpoint can be decoded directly
//! into the view state's snapshot.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One license-plate detection as returned by the backend list endpoint.
///
/// The backend owns these records; the client holds a transient cached copy
/// that is replaced wholesale on every successful fetch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateRecord {
    /// Unique identifier, stable across polls.
    pub id: i64,
    /// Calendar date of the detection (`YYYY-MM-DD`).
    pub date: String,
    /// Time of day of the detection (`HH:MM` or `HH:MM:SS`).
    pub time: String,
    /// Recognized plate text; the only field mutable through this client.
    pub plate: String,
    /// Filename of the cropped plate image, resolved under `/plates/`.
    pub plate_image: String,
    /// Filename of the full camera frame, resolved under `/original_images/`.
    pub original_image: String,
}
