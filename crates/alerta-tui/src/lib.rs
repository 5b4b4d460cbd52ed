//! Terminal UI for Alerta Temprana.
//!
//! This crate provides the Ratatui-based front-end: a latitude/longitude grid
//! standing in for the map widget, a category picker and a list of active
//! alerts.
//!
//! ## Hotkeys
//!
//! - `m` - Map view
//! - `a` - Active alerts list
//! - `Tab` - Toggle views
//! - Arrows / `hjkl` - Move the map cursor or the list selection
//! - `Enter` - Place an alert at the cursor (map) or resolve it (list)
//! - `x` - Remove the alert under the cursor or selected in the list
//! - `1`-`9`, `0`, `[`, `]` - Pick an alert category
//! - `Esc` - Clear the category selection
//! - `L` - Cycle the map layer
//! - `c` - Recenter the cursor
//! - `?` - Help
//! - `q` - Quit

pub mod app;
pub mod controller;
pub mod event;
pub mod map;
pub mod theme;
pub mod view;

pub use app::{restore_terminal, App, AppResult};
pub use controller::{AlertController, Outcome};
pub use view::View;
