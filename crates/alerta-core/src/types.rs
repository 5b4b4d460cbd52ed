//! Shared type definitions used across Alerta crates.

use serde::{Deserialize, Serialize};

/// Unique identifier for an alert within one session.
///
/// Ids are allocated in creation order and never reused, so comparing two
/// ids also tells which alert was created first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(u64);

impl AlertId {
    /// Wrap a raw id (used when decoding ids from a map widget).
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric id.
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for AlertId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A latitude/longitude pair in decimal degrees.
///
/// No range validation is applied: the map widget is the authority on what
/// it can tap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true if both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// An active alert placed on the map.
///
/// Records are created by [`AlertSession`](crate::AlertSession) and never
/// mutated afterwards; the description is a snapshot taken at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    /// Session-unique id
    pub id: AlertId,
    /// Category identifier the user selected
    pub alert_type: String,
    /// Display title (catalog label, or the raw type for unknown categories)
    pub title: String,
    /// Resolved description text
    pub description: String,
    /// Where the alert was placed
    pub coordinate: Coordinate,
    /// Local creation time, formatted `HH:MM:SS`
    pub created_at: String,
}

/// Current local time formatted the way alert records display it.
pub fn display_time_now() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
