//! Event handling for the Alerta TUI.
//!
//! Converts key presses into [`AppEvent`]s. The handler is view-agnostic:
//! the app decides what "navigate up" or "select" means in the current view.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::view::View;

/// Application-level events that can trigger state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Switch to a specific view
    SwitchView(View),
    /// Toggle between map and list
    ToggleView,
    /// Show help overlay
    ShowHelp,
    /// Request application quit
    Quit,
    /// Force quit (Ctrl+C)
    ForceQuit,
    /// Cancel: close overlays or clear the category selection
    Cancel,
    /// Move up (cursor on the map, selection in the list)
    NavigateUp,
    /// Move down
    NavigateDown,
    /// Move left (map only)
    NavigateLeft,
    /// Move right (map only)
    NavigateRight,
    /// Tap the map at the cursor, or resolve the selected list entry
    Select,
    /// Remove the alert under the cursor or selected in the list
    Remove,
    /// Pick a category by its position in the catalog
    PickType(usize),
    /// Pick the next category
    NextType,
    /// Pick the previous category
    PrevType,
    /// Cycle the map base layer
    CycleLayer,
    /// Move the map cursor back to the configured center
    Recenter,
    /// No action needed
    None,
}

/// Input handler for converting key events to app events.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Create a new input handler.
    pub fn new() -> Self {
        Self
    }

    /// Handle a key event and return the corresponding app event.
    pub fn handle_key(&mut self, key: KeyEvent) -> AppEvent {
        // Ctrl+C always force quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppEvent::ForceQuit;
        }

        // View hotkeys come from the views themselves
        if let KeyCode::Char(c) = key.code {
            if let Some(view) = View::from_hotkey(c) {
                return AppEvent::SwitchView(view);
            }
        }

        match key.code {
            KeyCode::Esc => AppEvent::Cancel,
            KeyCode::Char('q') | KeyCode::Char('Q') => AppEvent::Quit,
            KeyCode::Char('?') => AppEvent::ShowHelp,

            KeyCode::Tab | KeyCode::BackTab => AppEvent::ToggleView,

            KeyCode::Up | KeyCode::Char('k') => AppEvent::NavigateUp,
            KeyCode::Down | KeyCode::Char('j') => AppEvent::NavigateDown,
            KeyCode::Left | KeyCode::Char('h') => AppEvent::NavigateLeft,
            KeyCode::Right | KeyCode::Char('l') => AppEvent::NavigateRight,

            KeyCode::Enter | KeyCode::Char(' ') => AppEvent::Select,
            KeyCode::Char('x') | KeyCode::Char('r') | KeyCode::Delete => AppEvent::Remove,

            // Digits 1-9 pick the first nine categories, 0 picks the tenth
            KeyCode::Char(c @ '1'..='9') => AppEvent::PickType(c as usize - '1' as usize),
            KeyCode::Char('0') => AppEvent::PickType(9),
            KeyCode::Char(']') => AppEvent::NextType,
            KeyCode::Char('[') => AppEvent::PrevType,

            KeyCode::Char('L') => AppEvent::CycleLayer,
            KeyCode::Char('c') | KeyCode::Char('C') => AppEvent::Recenter,

            _ => AppEvent::None,
        }
    }
}
