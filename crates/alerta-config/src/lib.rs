//! Configuration management for Alerta Temprana.
//!
//! Configuration lives in `~/.alerta/config.yaml`. Every field has a default,
//! so a missing default file simply yields [`AlertaConfig::default`]; an
//! explicitly requested file must exist.
//!
//! ```yaml
//! map:
//!   center: { latitude: 4.7110, longitude: -74.0721 }
//!   latitude_delta: 0.0922
//!   longitude_delta: 0.0421
//!   layer: light
//! ui:
//!   start_view: map
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use alerta_core::logging::alerta_home;
use alerta_core::{AlertaError, Coordinate, Result};
use serde::{Deserialize, Serialize};

/// Default map center: Bogotá, Colombia.
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(4.7110, -74.0721);

/// Default latitude span of the visible map, in degrees.
pub const DEFAULT_LATITUDE_DELTA: f64 = 0.0922;

/// Default longitude span of the visible map, in degrees.
pub const DEFAULT_LONGITUDE_DELTA: f64 = 0.0421;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertaConfig {
    /// Map viewport and base layer
    pub map: MapConfig,
    /// Terminal UI preferences
    pub ui: UiConfig,
}

/// Map viewport configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    /// Center of the initial viewport (also the "home" location)
    pub center: Coordinate,
    /// Latitude span of the viewport
    pub latitude_delta: f64,
    /// Longitude span of the viewport
    pub longitude_delta: f64,
    /// Initial base layer
    pub layer: MapLayer,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            latitude_delta: DEFAULT_LATITUDE_DELTA,
            longitude_delta: DEFAULT_LONGITUDE_DELTA,
            layer: MapLayer::default(),
        }
    }
}

/// Terminal UI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// View shown at startup
    pub start_view: StartView,
}

/// View shown when the UI starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartView {
    #[default]
    Map,
    List,
}

/// Base layer of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapLayer {
    #[default]
    Light,
    Dark,
    Satellite,
}

impl MapLayer {
    /// All layers in cycle order.
    pub const ALL: [MapLayer; 3] = [MapLayer::Light, MapLayer::Dark, MapLayer::Satellite];

    /// Next layer in the cycle.
    pub fn next(&self) -> MapLayer {
        let idx = Self::ALL.iter().position(|l| l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Wire name, as sent to map widgets.
    pub fn as_str(&self) -> &'static str {
        match self {
            MapLayer::Light => "light",
            MapLayer::Dark => "dark",
            MapLayer::Satellite => "satellite",
        }
    }

    /// Label shown on the layer buttons.
    pub fn display_name(&self) -> &'static str {
        match self {
            MapLayer::Light => "Claro",
            MapLayer::Dark => "Oscuro",
            MapLayer::Satellite => "Satélite",
        }
    }
}

impl fmt::Display for MapLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path of the default configuration file, `~/.alerta/config.yaml`.
pub fn default_config_path() -> Result<PathBuf> {
    Ok(alerta_home()?.join("config.yaml"))
}

impl AlertaConfig {
    /// Load configuration.
    ///
    /// With an explicit `path` the file must exist. Without one, the default
    /// path is tried and defaults are used if it does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_file(path)?,
            None => {
                let default_path = default_config_path()?;
                if default_path.exists() {
                    Self::load_file(&default_path)?
                } else {
                    tracing::debug!(path = %default_path.display(), "no config file, using defaults");
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file without validating it.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AlertaError::config_not_found_with_source(path, e)
            } else {
                AlertaError::io("reading config", path, e)
            }
        })?;
        let config = Self::from_yaml_str(&content, path)?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse configuration from YAML text; `origin` is used in errors.
    pub fn from_yaml_str(content: &str, origin: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AlertaError::ConfigInvalid {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Check values serde cannot: finite center, positive deltas.
    pub fn validate(&self) -> Result<()> {
        let map = &self.map;
        if !map.center.is_finite() {
            return Err(AlertaError::config_validation(format!(
                "map.center must be finite, got ({}, {})",
                map.center.latitude, map.center.longitude
            )));
        }
        for (name, value) in [
            ("map.latitude_delta", map.latitude_delta),
            ("map.longitude_delta", map.longitude_delta),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AlertaError::config_validation(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Serialize the configuration as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| AlertaError::yaml("config", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Result<AlertaConfig> {
        AlertaConfig::from_yaml_str(yaml, Path::new("test.yaml"))
    }

    #[test]
    fn test_defaults_center_on_bogota() {
        let config = AlertaConfig::default();
        assert_eq!(config.map.center, Coordinate::new(4.7110, -74.0721));
        assert_eq!(config.map.layer, MapLayer::Light);
        assert_eq!(config.ui.start_view, StartView::Map);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = parse("map:\n  layer: dark\n").unwrap();
        assert_eq!(config.map.layer, MapLayer::Dark);
        assert_eq!(config.map.latitude_delta, DEFAULT_LATITUDE_DELTA);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(parse("  \n").unwrap(), AlertaConfig::default());
    }

    #[test]
    fn test_unknown_field_is_invalid() {
        let err = parse("map:\n  zoom: 3\n").unwrap_err();
        assert!(matches!(err, AlertaError::ConfigInvalid { .. }));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_bad_layer_is_invalid() {
        assert!(parse("map:\n  layer: hybrid\n").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_deltas() {
        let mut config = AlertaConfig::default();
        config.map.latitude_delta = 0.0;
        assert!(matches!(
            config.validate(),
            Err(AlertaError::ConfigValidation { .. })
        ));

        let mut config = AlertaConfig::default();
        config.map.longitude_delta = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = AlertaConfig::default();
        config.map.center = Coordinate::new(f64::INFINITY, 0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = AlertaConfig::default();
        config.map.layer = MapLayer::Satellite;
        config.ui.start_view = StartView::List;

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("satellite"));
        assert_eq!(parse(&yaml).unwrap(), config);
    }

    #[test]
    fn test_map_layer_cycle_and_names() {
        assert_eq!(MapLayer::Light.next(), MapLayer::Dark);
        assert_eq!(MapLayer::Dark.next(), MapLayer::Satellite);
        assert_eq!(MapLayer::Satellite.next(), MapLayer::Light);
        assert_eq!(MapLayer::Satellite.display_name(), "Satélite");
        assert_eq!(MapLayer::Dark.to_string(), "dark");
    }
}
