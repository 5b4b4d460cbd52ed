//! Alert category catalog.
//!
//! The catalog is a fixed table mapping a category identifier to its display
//! label and canned description. Every presentation layer reads the same
//! [`AlertCatalog::builtin`] table.
//!
//! ## Lookup rules
//!
//! - A known identifier resolves to its fixed description.
//! - A label is accepted as an alias of its identifier, so both
//!   `"Muy Húmedo"` and `"Muy Húmedo (Clima de Selva)"` resolve.
//! - Anything else resolves to [`fallback_description`], which embeds the
//!   identifier verbatim. Unknown categories are never an error.

use std::sync::LazyLock;

/// One category in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertTypeDefinition {
    /// Selector value (e.g. "Baja Presión")
    pub id: String,
    /// Display label (e.g. "Condiciones de Baja Presión (Posible Lluvia)")
    pub label: String,
    /// Canned description shown in the marker popup
    pub description: String,
}

impl AlertTypeDefinition {
    /// Create a catalog entry.
    pub fn new(id: impl Into<String>, label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Built-in table: (id, label, description).
const BUILTIN_ENTRIES: [(&str, &str, &str); 10] = [
    (
        "Frío y Seco",
        "Frío y Seco",
        "Se ha detectado una emergencia de Frío y Seco en la zona. Las temperaturas han descendido significativamente con baja humedad. Tome las precauciones necesarias.",
    ),
    (
        "Frío y Húmedo",
        "Frío y Húmedo",
        "Se ha detectado una emergencia de Frío y Húmedo en la zona. Las condiciones climáticas presentan bajas temperaturas con alta humedad. Tome las precauciones necesarias.",
    ),
    (
        "Templado y Seco",
        "Templado y Seco",
        "Se ha detectado una emergencia de Templado y Seco en la zona. Las condiciones climáticas son moderadas con baja humedad. Tome las precauciones necesarias.",
    ),
    (
        "Templado y Húmedo",
        "Templado y Húmedo",
        "Se ha detectado una emergencia de Templado y Húmedo en la zona. Las condiciones climáticas son moderadas con alta humedad. Tome las precauciones necesarias.",
    ),
    (
        "Cálido y Seco",
        "Cálido y Seco",
        "Se ha detectado una emergencia de Cálido y Seco en la zona. Las temperaturas son elevadas con baja humedad. Tome las precauciones necesarias.",
    ),
    (
        "Cálido y Húmedo",
        "Cálido y Húmedo",
        "Se ha detectado una emergencia de Cálido y Húmedo en la zona. Las condiciones climáticas presentan altas temperaturas con alta humedad. Tome las precauciones necesarias.",
    ),
    (
        "Muy Húmedo",
        "Muy Húmedo (Clima de Selva)",
        "Se ha detectado una emergencia de Muy Húmedo (Clima de Selva) en la zona. La humedad es extremadamente alta. Tome las precauciones necesarias.",
    ),
    (
        "Baja Presión",
        "Condiciones de Baja Presión (Posible Lluvia)",
        "Se ha detectado una emergencia de Condiciones de Baja Presión (Posible Lluvia) en la zona. Hay probabilidad de precipitaciones. Tome las precauciones necesarias.",
    ),
    (
        "Alta Presión",
        "Condiciones de Alta Presión (Cielo Despejado)",
        "Se ha detectado una emergencia de Condiciones de Alta Presión (Cielo Despejado) en la zona. Las condiciones son estables. Tome las precauciones necesarias.",
    ),
    (
        "Extremadamente Caliente",
        "Extremadamente Caliente",
        "Se ha detectado una emergencia de Extremadamente Caliente en la zona. Las temperaturas son peligrosamente altas. Tome las precauciones necesarias.",
    ),
];

static BUILTIN: LazyLock<AlertCatalog> = LazyLock::new(|| {
    AlertCatalog::new(
        BUILTIN_ENTRIES
            .iter()
            .map(|(id, label, description)| AlertTypeDefinition::new(*id, *label, *description)),
    )
});

/// Generic description for categories the catalog does not know.
pub fn fallback_description(type_id: &str) -> String {
    format!("Se ha detectado una emergencia de {type_id} en la zona. Tome las precauciones necesarias.")
}

/// Static table of alert categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertCatalog {
    entries: Vec<AlertTypeDefinition>,
}

impl AlertCatalog {
    /// Build a catalog from entries, keeping their order.
    ///
    /// Later entries with an id already present are dropped.
    pub fn new(entries: impl IntoIterator<Item = AlertTypeDefinition>) -> Self {
        let mut unique: Vec<AlertTypeDefinition> = Vec::new();
        for entry in entries {
            if unique.iter().any(|e| e.id == entry.id) {
                tracing::warn!(alert_type = %entry.id, "duplicate catalog entry ignored");
                continue;
            }
            unique.push(entry);
        }
        Self { entries: unique }
    }

    /// The canonical built-in catalog.
    pub fn builtin() -> &'static AlertCatalog {
        &BUILTIN
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[AlertTypeDefinition] {
        &self.entries
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no categories.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a category by id, falling back to a label match.
    pub fn get(&self, type_id: &str) -> Option<&AlertTypeDefinition> {
        self.entries
            .iter()
            .find(|e| e.id == type_id)
            .or_else(|| self.entries.iter().find(|e| e.label == type_id))
    }

    /// Returns true if the id (or label) names a catalog category.
    pub fn is_known(&self, type_id: &str) -> bool {
        self.get(type_id).is_some()
    }

    /// Display label for a category, or the id itself when unknown.
    pub fn label<'a>(&'a self, type_id: &'a str) -> &'a str {
        self.get(type_id).map_or(type_id, |e| e.label.as_str())
    }

    /// Resolve the description for a category.
    pub fn describe(&self, type_id: &str) -> String {
        match self.get(type_id) {
            Some(entry) => entry.description.clone(),
            None => fallback_description(type_id),
        }
    }
}

impl Default for AlertCatalog {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_ten_unique_entries() {
        let catalog = AlertCatalog::builtin();
        assert_eq!(catalog.len(), 10);
        assert!(!catalog.is_empty());

        let mut ids: Vec<_> = catalog.entries().iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_describe_golden_values() {
        let catalog = AlertCatalog::builtin();
        for (id, _, description) in BUILTIN_ENTRIES {
            assert_eq!(catalog.describe(id), description, "description for {id}");
        }
    }

    #[test]
    fn test_describe_frio_y_seco() {
        assert_eq!(
            AlertCatalog::builtin().describe("Frío y Seco"),
            "Se ha detectado una emergencia de Frío y Seco en la zona. Las temperaturas han descendido significativamente con baja humedad. Tome las precauciones necesarias."
        );
    }

    #[test]
    fn test_label_is_alias_of_id() {
        let catalog = AlertCatalog::builtin();
        assert_eq!(
            catalog.describe("Muy Húmedo (Clima de Selva)"),
            catalog.describe("Muy Húmedo")
        );
        assert_eq!(catalog.label("Baja Presión"), "Condiciones de Baja Presión (Posible Lluvia)");
        assert_eq!(
            catalog.get("Condiciones de Alta Presión (Cielo Despejado)").map(|e| e.id.as_str()),
            Some("Alta Presión")
        );
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let catalog = AlertCatalog::builtin();
        assert!(!catalog.is_known("Unknown X"));
        assert_eq!(
            catalog.describe("Unknown X"),
            "Se ha detectado una emergencia de Unknown X en la zona. Tome las precauciones necesarias."
        );
        assert_eq!(catalog.label("Unknown X"), "Unknown X");
    }

    #[test]
    fn test_fallback_contains_id_verbatim() {
        for id in ["", "tornado", "Granizo <b>", "frío y seco"] {
            assert!(fallback_description(id).contains(id));
            assert_eq!(AlertCatalog::builtin().describe(id), fallback_description(id));
        }
    }

    #[test]
    fn test_custom_catalog_drops_duplicate_ids() {
        let catalog = AlertCatalog::new([
            AlertTypeDefinition::new("a", "A", "first"),
            AlertTypeDefinition::new("a", "A2", "second"),
            AlertTypeDefinition::new("b", "B", "third"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.describe("a"), "first");
        assert_eq!(catalog.describe("B"), "third");
    }
}
