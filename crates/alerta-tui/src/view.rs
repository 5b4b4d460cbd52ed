//! View types and navigation for the Alerta TUI.

use std::fmt;

use alerta_config::StartView;

/// Available views.
///
/// The map is where alerts are placed; the list is where they are reviewed
/// and resolved. Both read the same session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Map grid with the category picker
    #[default]
    Map,
    /// List of active alerts
    List,
}

impl View {
    /// Returns the hotkey character for this view.
    pub fn hotkey(&self) -> char {
        match self {
            View::Map => 'm',
            View::List => 'a',
        }
    }

    /// Returns the display title for this view.
    pub fn title(&self) -> &'static str {
        match self {
            View::Map => "Mapa",
            View::List => "Alertas",
        }
    }

    /// Returns the hotkey hint for status bar display.
    pub fn hotkey_hint(&self) -> String {
        format!("[{}] {}", self.hotkey(), self.title())
    }

    /// The other view (Tab toggles between the two).
    pub fn toggle(&self) -> View {
        match self {
            View::Map => View::List,
            View::List => View::Map,
        }
    }

    /// Try to parse a view from a hotkey character.
    pub fn from_hotkey(key: char) -> Option<View> {
        match key.to_ascii_lowercase() {
            'm' => Some(View::Map),
            'a' => Some(View::List),
            _ => None,
        }
    }
}

impl From<StartView> for View {
    fn from(start: StartView) -> Self {
        match start {
            StartView::Map => View::Map,
            StartView::List => View::List,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Layout mode based on terminal width.
///
/// Wide terminals show the category picker beside the map; narrow ones
/// stack it underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 100+ columns: map and side panel
    Wide,
    /// Below 100 columns: stacked
    Narrow,
}

impl LayoutMode {
    /// Determine the layout mode based on terminal width.
    pub fn from_width(width: u16) -> Self {
        if width >= 100 {
            LayoutMode::Wide
        } else {
            LayoutMode::Narrow
        }
    }
}
