//! Glue between user input, the map bridge and the alert session.
//!
//! The session accepts any category; making sure the user actually picked
//! one before tapping is the front-end's job, and it happens here.

use alerta_core::{AlertId, AlertRecord, AlertSession, MapMessage, MapTapEvent, Result};

/// Prompt shown when the map is tapped without a category.
pub const MISSING_SELECTION_PROMPT: &str = "Por favor, selecciona un tipo de alerta primero.";

/// Confirmation shown after an alert is placed.
pub const CREATED_MESSAGE: &str = "¡Alerta creada exitosamente!";

/// What a handled map message did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A new alert was placed
    Created(AlertRecord),
    /// The tap was ignored because no category is selected
    MissingSelection,
    /// An alert was resolved
    Removed(AlertId),
    /// The alert to resolve no longer exists
    NotFound(AlertId),
}

impl Outcome {
    /// Status line text for the user.
    pub fn message(&self) -> String {
        match self {
            Outcome::Created(_) => CREATED_MESSAGE.to_string(),
            Outcome::MissingSelection => MISSING_SELECTION_PROMPT.to_string(),
            Outcome::Removed(id) => format!("Alerta {id} resuelta"),
            Outcome::NotFound(id) => format!("La alerta {id} ya no existe"),
        }
    }
}

/// Owns the session and the current category selection.
#[derive(Debug, Clone, Default)]
pub struct AlertController {
    session: AlertSession,
    selection: Option<String>,
}

impl AlertController {
    /// Create a controller around a session.
    pub fn new(session: AlertSession) -> Self {
        Self {
            session,
            selection: None,
        }
    }

    /// The session (read-only; mutate through the controller).
    pub fn session(&self) -> &AlertSession {
        &self.session
    }

    /// The selected category id, if any.
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Select a category. An empty id clears the selection.
    ///
    /// Ids outside the catalog are still accepted and fall back to the
    /// generic description. Returns whether the id is a catalog category.
    pub fn select(&mut self, type_id: impl Into<String>) -> bool {
        let type_id = type_id.into();
        let known = self.session.catalog().is_known(&type_id);
        if !known && !type_id.is_empty() {
            tracing::warn!(alert_type = %type_id, "selected category is not in the catalog");
        }
        self.selection = (!type_id.is_empty()).then_some(type_id);
        known
    }

    /// Clear the category selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Handle a tap on the map.
    ///
    /// On success the selection is cleared, so every alert is a deliberate
    /// pick-then-tap.
    pub fn tap(&mut self, tap: MapTapEvent) -> Outcome {
        let Some(type_id) = self.selection.take() else {
            tracing::debug!(latitude = tap.latitude, longitude = tap.longitude, "tap without selection");
            return Outcome::MissingSelection;
        };
        let record = self.session.create(&type_id, tap.coordinate());
        tracing::info!(alert_id = record.id.get(), alert_type = %record.alert_type, "alert placed");
        Outcome::Created(record)
    }

    /// Resolve an alert. Shared by the list view and map popups.
    pub fn remove(&mut self, id: AlertId) -> Outcome {
        if self.session.remove(id) {
            tracing::info!(alert_id = id.get(), "alert resolved");
            Outcome::Removed(id)
        } else {
            Outcome::NotFound(id)
        }
    }

    /// Handle a typed message from a map widget.
    pub fn handle(&mut self, message: MapMessage) -> Outcome {
        match message {
            MapMessage::MapClick {
                latitude,
                longitude,
            } => self.tap(MapTapEvent::new(latitude, longitude)),
            MapMessage::RemoveAlert { id } => self.remove(id),
        }
    }

    /// Decode and handle a JSON message from a string-based widget bridge.
    pub fn handle_raw(&mut self, raw: &str) -> Result<Outcome> {
        let message = MapMessage::decode(raw).inspect_err(|e| {
            tracing::warn!(error = %e, "ignoring malformed map message");
        })?;
        Ok(self.handle(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap() -> MapTapEvent {
        MapTapEvent::new(4.71, -74.07)
    }

    #[test]
    fn test_tap_without_selection_creates_nothing() {
        let mut controller = AlertController::default();
        assert_eq!(controller.tap(tap()), Outcome::MissingSelection);
        assert!(controller.session().is_empty());
    }

    #[test]
    fn test_empty_selection_counts_as_none() {
        let mut controller = AlertController::default();
        controller.select("");
        assert_eq!(controller.selection(), None);
        assert_eq!(controller.tap(tap()), Outcome::MissingSelection);
    }

    #[test]
    fn test_tap_with_selection_creates_and_clears() {
        let mut controller = AlertController::default();
        controller.select("Frío y Seco");

        let Outcome::Created(record) = controller.tap(tap()) else {
            panic!("expected an alert to be created");
        };
        assert_eq!(record.alert_type, "Frío y Seco");
        assert_eq!(controller.selection(), None);
        assert_eq!(controller.session().len(), 1);
    }

    #[test]
    fn test_select_reports_unknown_category() {
        let mut controller = AlertController::default();
        assert!(controller.select("Frío y Seco"));
        assert!(!controller.select("Granizo"));
        assert_eq!(controller.selection(), Some("Granizo"));

        let Outcome::Created(record) = controller.tap(tap()) else {
            panic!("expected an alert to be created");
        };
        assert_eq!(record.alert_type, "Granizo");
        assert_eq!(record.title, "Granizo");
    }

    #[test]
    fn test_remove_reports_not_found_second_time() {
        let mut controller = AlertController::default();
        controller.select("Alta Presión");
        let Outcome::Created(record) = controller.tap(tap()) else {
            panic!("expected an alert to be created");
        };

        assert_eq!(controller.remove(record.id), Outcome::Removed(record.id));
        assert_eq!(controller.remove(record.id), Outcome::NotFound(record.id));
    }

    #[test]
    fn test_handle_raw_messages() {
        let mut controller = AlertController::default();
        controller.select("Muy Húmedo");

        let created = controller
            .handle_raw(r#"{"type":"mapClick","latitude":4.6,"longitude":-74.1}"#)
            .unwrap();
        let Outcome::Created(record) = created else {
            panic!("expected an alert to be created");
        };

        let raw = format!(r#"{{"type":"removeAlert","id":{}}}"#, record.id.get());
        assert_eq!(controller.handle_raw(&raw).unwrap(), Outcome::Removed(record.id));
        assert!(controller.handle_raw("{").is_err());
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::MissingSelection.message(), MISSING_SELECTION_PROMPT);
        assert_eq!(
            Outcome::Removed(AlertId::new(2)).message(),
            "Alerta #2 resuelta"
        );
    }
}
