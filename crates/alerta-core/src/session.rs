//! Active alert session.
//!
//! [`AlertSession`] owns the ordered collection of active alerts for one run
//! of the application. It is the only place records are created or removed.
//!
//! ## Invariants
//!
//! - Records are kept in insertion order.
//! - Ids come from a per-session counter starting at 1 and are never reused,
//!   even after the record holding them is removed.
//! - Records are immutable once created; removal is terminal.

use std::borrow::Cow;

use crate::bridge::MarkerSet;
use crate::catalog::AlertCatalog;
use crate::log_alert_event;
use crate::types::{AlertId, AlertRecord, Coordinate, display_time_now};

/// In-memory collection of active alerts.
#[derive(Debug, Clone)]
pub struct AlertSession {
    catalog: Cow<'static, AlertCatalog>,
    alerts: Vec<AlertRecord>,
    next_id: u64,
}

impl Default for AlertSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertSession {
    /// Create an empty session backed by the built-in catalog.
    pub fn new() -> Self {
        Self {
            catalog: Cow::Borrowed(AlertCatalog::builtin()),
            alerts: Vec::new(),
            next_id: 1,
        }
    }

    /// Create an empty session backed by a custom catalog.
    pub fn with_catalog(catalog: AlertCatalog) -> Self {
        Self {
            catalog: Cow::Owned(catalog),
            alerts: Vec::new(),
            next_id: 1,
        }
    }

    /// The catalog this session resolves descriptions from.
    pub fn catalog(&self) -> &AlertCatalog {
        &self.catalog
    }

    /// Create an alert, resolving its description from the catalog.
    ///
    /// The caller is responsible for making sure a category was selected;
    /// an empty `type_id` is accepted and resolved like any unknown one.
    pub fn create(&mut self, type_id: &str, coordinate: Coordinate) -> AlertRecord {
        let description = self.catalog.describe(type_id);
        self.create_with_description(type_id, coordinate, description)
    }

    /// Create an alert with a description resolved by the caller.
    ///
    /// Used when an external source (e.g. a remote text generator) supplies
    /// the text, or its fallback, before the alert is placed.
    pub fn create_with_description(
        &mut self,
        type_id: &str,
        coordinate: Coordinate,
        description: impl Into<String>,
    ) -> AlertRecord {
        let id = AlertId::new(self.next_id);
        self.next_id += 1;

        let record = AlertRecord {
            id,
            alert_type: type_id.to_string(),
            title: self.catalog.label(type_id).to_string(),
            description: description.into(),
            coordinate,
            created_at: display_time_now(),
        };

        log_alert_event!(
            id.get(),
            "created",
            alert_type = %record.alert_type,
            latitude = coordinate.latitude,
            longitude = coordinate.longitude
        );

        self.alerts.push(record.clone());
        record
    }

    /// All active alerts in creation order.
    pub fn list(&self) -> &[AlertRecord] {
        &self.alerts
    }

    /// Look up an active alert by id.
    pub fn get(&self, id: AlertId) -> Option<&AlertRecord> {
        self.alerts.iter().find(|a| a.id == id)
    }

    /// Remove an alert by id.
    ///
    /// Returns false if no active alert has that id; this is not an error.
    pub fn remove(&mut self, id: AlertId) -> bool {
        match self.alerts.iter().position(|a| a.id == id) {
            Some(index) => {
                let removed = self.alerts.remove(index);
                log_alert_event!(id.get(), "removed", alert_type = %removed.alert_type);
                true
            }
            None => {
                log_alert_event!(id.get(), "remove_missed", found = false);
                false
            }
        }
    }

    /// Number of active alerts.
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    /// Returns true if there are no active alerts.
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Snapshot of the session as map markers.
    pub fn markers(&self) -> MarkerSet {
        MarkerSet::from(self.list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AlertTypeDefinition;

    fn bogota() -> Coordinate {
        Coordinate::new(4.71, -74.07)
    }

    #[test]
    fn test_create_resolves_catalog_description() {
        let mut session = AlertSession::new();
        let record = session.create("Frío y Seco", bogota());

        assert_eq!(record.id, AlertId::new(1));
        assert_eq!(record.alert_type, "Frío y Seco");
        assert_eq!(record.title, "Frío y Seco");
        assert_eq!(
            record.description,
            "Se ha detectado una emergencia de Frío y Seco en la zona. Las temperaturas han descendido significativamente con baja humedad. Tome las precauciones necesarias."
        );
        assert_eq!(record.coordinate, bogota());
        assert_eq!(session.list(), &[record]);
    }

    #[test]
    fn test_create_unknown_type_uses_fallback() {
        let mut session = AlertSession::new();
        let record = session.create("Unknown X", bogota());
        assert_eq!(
            record.description,
            "Se ha detectado una emergencia de Unknown X en la zona. Tome las precauciones necesarias."
        );
        assert_eq!(record.title, "Unknown X");
    }

    #[test]
    fn test_title_uses_catalog_label() {
        let mut session = AlertSession::new();
        let record = session.create("Baja Presión", bogota());
        assert_eq!(record.title, "Condiciones de Baja Presión (Posible Lluvia)");
        assert_eq!(record.alert_type, "Baja Presión");
    }

    #[test]
    fn test_create_with_description_keeps_caller_text() {
        let mut session = AlertSession::new();
        let record = session.create_with_description("Granizo", bogota(), "Granizo intenso.");
        assert_eq!(record.description, "Granizo intenso.");
        assert_eq!(session.get(record.id), Some(&record));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut session = AlertSession::new();
        let first = session.create("Frío y Seco", bogota());
        assert!(session.remove(first.id));
        let second = session.create("Frío y Seco", bogota());
        assert_ne!(first.id, second.id);
        assert!(second.id > first.id);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut session = AlertSession::new();
        session.create("Frío y Seco", bogota());
        let before = session.list().to_vec();

        assert!(!session.remove(AlertId::new(99)));
        assert_eq!(session.list(), before.as_slice());
    }

    #[test]
    fn test_description_snapshot_survives_catalog_swap() {
        let mut session = AlertSession::with_catalog(AlertCatalog::new([AlertTypeDefinition::new(
            "x", "X", "old text",
        )]));
        let record = session.create("x", bogota());

        // A new session with a different table does not touch existing records
        let other = AlertSession::with_catalog(AlertCatalog::new([AlertTypeDefinition::new(
            "x", "X", "new text",
        )]));
        assert_eq!(other.catalog().describe("x"), "new text");
        assert_eq!(session.get(record.id).map(|r| r.description.as_str()), Some("old text"));
    }

    #[test]
    fn test_markers_follow_list_order() {
        let mut session = AlertSession::new();
        let a = session.create("Frío y Seco", bogota());
        let b = session.create("Alta Presión", Coordinate::new(4.6, -74.1));

        let ids: Vec<_> = session.markers().markers.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut session = AlertSession::default();
        assert!(session.is_empty());
        let record = session.create("Cálido y Seco", bogota());
        assert_eq!(session.len(), 1);
        session.remove(record.id);
        assert!(session.is_empty());
    }
}
