//! End-to-end scenarios for the alert session.
//!
//! These exercise the public API the way a map front-end does: taps come in
//! as bridge messages, records are created and removed, and the marker
//! snapshot is re-read after every change.

use std::collections::HashSet;

use alerta_core::{AlertCatalog, AlertId, AlertSession, Coordinate, MapMessage, MapTapEvent};

fn coord(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng)
}

#[test]
fn scenario_known_category_gets_canned_description() {
    let mut session = AlertSession::new();
    let record = session.create("Frío y Seco", coord(4.71, -74.07));

    assert_eq!(
        record.description,
        "Se ha detectado una emergencia de Frío y Seco en la zona. Las temperaturas han descendido significativamente con baja humedad. Tome las precauciones necesarias."
    );
    assert_eq!(record.coordinate, coord(4.71, -74.07));
}

#[test]
fn scenario_unknown_category_gets_fallback() {
    let mut session = AlertSession::new();
    let record = session.create("Unknown X", coord(0.0, 0.0));

    assert_eq!(
        record.description,
        "Se ha detectado una emergencia de Unknown X en la zona. Tome las precauciones necesarias."
    );
}

#[test]
fn scenario_remove_middle_keeps_relative_order() {
    let mut session = AlertSession::new();
    let first = session.create("Frío y Seco", coord(1.0, 1.0));
    let middle = session.create("Templado y Húmedo", coord(2.0, 2.0));
    let third = session.create("Extremadamente Caliente", coord(3.0, 3.0));

    assert!(session.remove(middle.id));

    let ids: Vec<AlertId> = session.list().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);
}

#[test]
fn creates_preserve_insertion_order_with_unique_ids() {
    let mut session = AlertSession::new();
    let types: Vec<&str> = AlertCatalog::builtin()
        .entries()
        .iter()
        .map(|e| e.id.as_str())
        .chain(["Unknown X", ""])
        .collect();

    let created: Vec<_> = types
        .iter()
        .enumerate()
        .map(|(i, t)| session.create(t, coord(i as f64, -(i as f64))))
        .collect();

    assert_eq!(session.list(), created.as_slice());

    let unique: HashSet<AlertId> = created.iter().map(|r| r.id).collect();
    assert_eq!(unique.len(), created.len());

    let listed_types: Vec<&str> = session.list().iter().map(|r| r.alert_type.as_str()).collect();
    assert_eq!(listed_types, types);
}

#[test]
fn remove_takes_exactly_one_and_second_remove_is_not_found() {
    let mut session = AlertSession::new();
    let a = session.create("Cálido y Húmedo", coord(1.0, 1.0));
    let b = session.create("Cálido y Seco", coord(2.0, 2.0));
    let c = session.create("Alta Presión", coord(3.0, 3.0));

    assert!(session.remove(b.id));
    assert_eq!(session.len(), 2);
    assert!(session.get(a.id).is_some());
    assert!(session.get(c.id).is_some());

    let snapshot = session.list().to_vec();
    assert!(!session.remove(b.id));
    assert_eq!(session.list(), snapshot.as_slice());
}

#[test]
fn list_is_idempotent() {
    let mut session = AlertSession::new();
    session.create("Frío y Húmedo", coord(1.0, 1.0));
    session.create("Baja Presión", coord(2.0, 2.0));

    let first = session.list().to_vec();
    let second = session.list().to_vec();
    assert_eq!(first, second);
    assert_eq!(session.markers(), session.markers());
}

#[test]
fn unvalidated_coordinates_are_accepted() {
    let mut session = AlertSession::new();
    let record = session.create("Muy Húmedo", coord(123.0, -500.0));
    assert_eq!(record.coordinate, coord(123.0, -500.0));
}

#[test]
fn bridge_tap_round_trip_creates_marker() {
    let mut session = AlertSession::new();
    let raw = MapMessage::from(MapTapEvent::new(4.65, -74.1)).encode().unwrap();

    let MapMessage::MapClick { latitude, longitude } = MapMessage::decode(&raw).unwrap() else {
        panic!("expected a map click");
    };
    let record = session.create("Baja Presión", coord(latitude, longitude));

    let markers = session.markers();
    assert_eq!(markers.len(), 1);
    let marker = markers.get(record.id).unwrap();
    assert_eq!(marker.title, "Condiciones de Baja Presión (Posible Lluvia)");
    assert_eq!(marker.coordinate, coord(4.65, -74.1));
}
