//! # alerta-core
//!
//! Core types, errors, and the alert engine for Alerta Temprana.
//!
//! This crate provides:
//! - [`AlertaError`] - Error types for configuration, logging and bridge I/O
//! - [`logging`] - Tracing setup and log management utilities
//! - [`types`] - Coordinates, alert ids and records shared across crates
//! - [`catalog`] - The canonical alert category table
//! - [`session`] - The in-memory collection of active alerts
//! - [`bridge`] - Typed messages between the session and a map widget
//!
//! ## Example
//!
//! ```
//! use alerta_core::{AlertSession, Coordinate};
//!
//! let mut session = AlertSession::new();
//! let record = session.create("Frío y Seco", Coordinate::new(4.71, -74.07));
//!
//! assert_eq!(session.list().len(), 1);
//! assert!(session.remove(record.id));
//! assert!(!session.remove(record.id));
//! ```

pub mod bridge;
pub mod catalog;
pub mod error;
pub mod logging;
pub mod session;
pub mod types;

// Re-export main types for convenience
pub use bridge::{MapAdapter, MapMessage, MapTapEvent, MarkerDescriptor, MarkerDiff, MarkerSet, WidgetCommand};
pub use catalog::{AlertCatalog, AlertTypeDefinition};
pub use error::{AlertaError, Result};
pub use logging::{LogGuard, init_logging};
pub use session::AlertSession;
pub use types::{AlertId, AlertRecord, Coordinate};
