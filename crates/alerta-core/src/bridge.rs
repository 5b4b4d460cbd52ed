//! Typed bridge between an alert session and a map widget.
//!
//! A map widget reports taps and popup actions as [`MapMessage`]s and is
//! driven by [`WidgetCommand`]s. Widgets that talk through string channels
//! (embedded web maps) use the JSON encoding defined here; in-process
//! adapters implement [`MapAdapter`] and are kept in step with [`sync`].
//!
//! ## Wire format
//!
//! ```text
//! inbound:  {"type":"mapClick","latitude":4.71,"longitude":-74.07}
//!           {"type":"removeAlert","id":3}
//! outbound: {"type":"setMarkers","markers":[{"id":1,"latitude":..,...}]}
//!           {"type":"changeLayer","layer":"dark"}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{AlertaError, Result};
use crate::types::{AlertId, AlertRecord, Coordinate};

/// A tap or click on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapTapEvent {
    pub latitude: f64,
    pub longitude: f64,
}

impl MapTapEvent {
    /// Create a tap event.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The tapped location.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl From<Coordinate> for MapTapEvent {
    fn from(coord: Coordinate) -> Self {
        Self::new(coord.latitude, coord.longitude)
    }
}

/// Everything a widget needs to place one marker and its popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDescriptor {
    pub id: AlertId,
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub title: String,
    pub description: String,
    pub created_at: String,
}

impl From<&AlertRecord> for MarkerDescriptor {
    fn from(record: &AlertRecord) -> Self {
        Self {
            id: record.id,
            coordinate: record.coordinate,
            title: record.title.clone(),
            description: record.description.clone(),
            created_at: record.created_at.clone(),
        }
    }
}

/// Ordered snapshot of all markers that should be on the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkerSet {
    pub markers: Vec<MarkerDescriptor>,
}

impl From<&[AlertRecord]> for MarkerSet {
    fn from(records: &[AlertRecord]) -> Self {
        Self {
            markers: records.iter().map(MarkerDescriptor::from).collect(),
        }
    }
}

impl MarkerSet {
    /// Number of markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Returns true if there are no markers.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Look up a marker by alert id.
    pub fn get(&self, id: AlertId) -> Option<&MarkerDescriptor> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// Compute what changed since `previous` was rendered.
    ///
    /// Records are immutable, so a marker present in both sets is unchanged.
    pub fn diff(&self, previous: &MarkerSet) -> MarkerDiff {
        let removed = previous
            .markers
            .iter()
            .filter(|old| self.get(old.id).is_none())
            .map(|old| old.id)
            .collect();
        let added = self
            .markers
            .iter()
            .filter(|new| previous.get(new.id).is_none())
            .cloned()
            .collect();
        MarkerDiff { added, removed }
    }
}

/// Changes between two marker snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerDiff {
    /// Markers to place, in creation order
    pub added: Vec<MarkerDescriptor>,
    /// Ids of markers to take off the map
    pub removed: Vec<AlertId>,
}

impl MarkerDiff {
    /// Returns true if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// A map widget that can place and remove markers by id.
pub trait MapAdapter {
    /// Place a marker (and its popup) on the map.
    fn place(&mut self, marker: &MarkerDescriptor);

    /// Remove the marker for an alert.
    fn remove(&mut self, id: AlertId);
}

/// Bring an adapter from `previous` to `next`: removals first, then placements.
///
/// Returns the applied diff so callers can log or count it.
pub fn sync<A: MapAdapter + ?Sized>(adapter: &mut A, previous: &MarkerSet, next: &MarkerSet) -> MarkerDiff {
    let diff = next.diff(previous);
    for id in &diff.removed {
        adapter.remove(*id);
    }
    for marker in &diff.added {
        adapter.place(marker);
    }
    if !diff.is_empty() {
        tracing::debug!(
            added = diff.added.len(),
            removed = diff.removed.len(),
            "map markers synced"
        );
    }
    diff
}

/// Messages a map widget sends to the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MapMessage {
    /// The user tapped the map
    MapClick { latitude: f64, longitude: f64 },
    /// The user asked to dismiss an alert from its popup
    RemoveAlert { id: AlertId },
}

impl MapMessage {
    /// Decode a JSON message from a widget bridge.
    pub fn decode(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| AlertaError::json_parse("map message", e))
    }

    /// Encode as JSON (used by widget-side test harnesses).
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| AlertaError::json_parse("map message", e))
    }
}

impl From<MapTapEvent> for MapMessage {
    fn from(tap: MapTapEvent) -> Self {
        Self::MapClick {
            latitude: tap.latitude,
            longitude: tap.longitude,
        }
    }
}

/// Commands the application sends to a map widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WidgetCommand {
    /// Replace the rendered markers with this set
    SetMarkers { markers: Vec<MarkerDescriptor> },
    /// Switch the base layer ("light", "dark", "satellite")
    ChangeLayer { layer: String },
}

impl WidgetCommand {
    /// Encode as JSON for a widget bridge.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| AlertaError::json_parse("widget command", e))
    }

    /// Decode a JSON command.
    pub fn decode(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| AlertaError::json_parse("widget command", e))
    }
}

impl From<MarkerSet> for WidgetCommand {
    fn from(set: MarkerSet) -> Self {
        Self::SetMarkers {
            markers: set.markers,
        }
    }
}
