//! Main application state and logic for the Alerta TUI.
//!
//! The `App` struct owns the alert controller, the terminal map adapter and
//! all presentation state (view, cursor, layer, overlays).

use std::io::{self, Write};
use std::time::{Duration, Instant};

use alerta_config::{AlertaConfig, MapLayer};
use alerta_core::types::display_time_now;
use alerta_core::{AlertaError, AlertCatalog, AlertSession, Coordinate, MapTapEvent};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::controller::{AlertController, Outcome};
use crate::event::{AppEvent, InputHandler};
use crate::map::{MapGrid, MarkerLayer, Viewport, DEFAULT_GRID};
use crate::theme::Theme;
use crate::view::{LayoutMode, View};

/// Result type for app operations.
pub type AppResult<T> = anyhow::Result<T>;

/// Target frame rate.
const TARGET_FPS: u64 = 30;
const FRAME_DURATION: Duration = Duration::from_millis(1000 / TARGET_FPS);

/// Header clock cache duration.
const TIMESTAMP_CACHE_DURATION: Duration = Duration::from_secs(1);

/// Main application state.
pub struct App {
    /// Current active view
    current_view: View,
    /// Input handler for key events
    input_handler: InputHandler,
    /// Whether the app should quit
    should_quit: bool,
    /// Whether to show the help overlay
    show_help: bool,
    /// Blocking prompt; any key dismisses it
    prompt: Option<&'static str>,
    /// Status message to display in the footer
    status_message: Option<String>,
    /// Session and category selection
    controller: AlertController,
    /// Markers currently drawn on the map
    marker_layer: MarkerLayer,
    /// Visible map area
    viewport: Viewport,
    /// Map cursor, always on a cell center once moved
    cursor: Coordinate,
    /// Map grid size from the last frame
    map_grid: (u16, u16),
    /// Active base layer and its palette
    theme: Theme,
    /// Selection in the alert list
    list_state: ListState,
    /// Dirty flag - whether UI needs redraw
    dirty: bool,
    /// Cached timestamp for header (updated every second)
    cached_timestamp: Option<String>,
    last_timestamp_update: Instant,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AlertaConfig::default())
    }
}

impl App {
    /// Create a new app from configuration.
    pub fn new(config: AlertaConfig) -> Self {
        Self::with_session(config, AlertSession::new())
    }

    /// Create an app around an existing session.
    pub fn with_session(config: AlertaConfig, session: AlertSession) -> Self {
        let viewport = Viewport::from_config(&config.map);
        let mut app = Self {
            current_view: View::from(config.ui.start_view),
            input_handler: InputHandler::new(),
            should_quit: false,
            show_help: false,
            prompt: None,
            status_message: None,
            controller: AlertController::new(session),
            marker_layer: MarkerLayer::default(),
            viewport,
            cursor: viewport.center,
            map_grid: DEFAULT_GRID,
            theme: Theme::for_layer(config.map.layer),
            list_state: ListState::default(),
            dirty: true,
            cached_timestamp: None,
            last_timestamp_update: Instant::now(),
        };
        app.refresh_markers();
        app
    }

    /// Returns the current view.
    pub fn current_view(&self) -> View {
        self.current_view
    }

    /// Returns whether the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns whether help overlay is visible.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// The blocking prompt, if one is showing.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt
    }

    /// The footer status message, if any.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// The alert controller.
    pub fn controller(&self) -> &AlertController {
        &self.controller
    }

    /// Markers currently drawn on the map.
    pub fn marker_layer(&self) -> &MarkerLayer {
        &self.marker_layer
    }

    /// The map cursor position.
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// The active base layer.
    pub fn layer(&self) -> MapLayer {
        self.theme.layer
    }

    /// Index of the highlighted alert in the list view.
    pub fn list_selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Mark the UI as dirty (needs redraw).
    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Check if UI needs redraw and clear the dirty flag.
    fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Get cached timestamp or update if expired.
    fn get_cached_timestamp(&mut self) -> String {
        if self.cached_timestamp.is_none() || self.last_timestamp_update.elapsed() >= TIMESTAMP_CACHE_DURATION {
            self.cached_timestamp = Some(display_time_now());
            self.last_timestamp_update = Instant::now();
        }
        self.cached_timestamp.clone().unwrap_or_default()
    }

    fn catalog(&self) -> &AlertCatalog {
        self.controller.session().catalog()
    }

    /// Position of the selected category in the catalog.
    fn selected_type_index(&self) -> Option<usize> {
        let selected = self.controller.selection()?;
        self.catalog().entries().iter().position(|entry| entry.id == selected)
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.mark_dirty();
    }

    /// Switch to a different view.
    pub fn switch_view(&mut self, view: View) {
        if self.current_view != view {
            tracing::debug!(from = %self.current_view, to = %view, "switching view");
            self.current_view = view;
            self.clamp_list_selection();
            self.mark_dirty();
        }
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let event = self.input_handler.handle_key(key);
        self.handle_app_event(event);
    }

    /// Handle an application event.
    pub fn handle_app_event(&mut self, event: AppEvent) {
        if event == AppEvent::ForceQuit {
            self.should_quit = true;
            return;
        }

        // Overlays swallow the key that closes them
        if self.prompt.is_some() {
            self.prompt = None;
            self.mark_dirty();
            return;
        }
        if self.show_help {
            self.show_help = false;
            self.mark_dirty();
            return;
        }

        match event {
            AppEvent::SwitchView(view) => self.switch_view(view),
            AppEvent::ToggleView => self.switch_view(self.current_view.toggle()),
            AppEvent::ShowHelp => {
                self.show_help = true;
                self.mark_dirty();
            }
            AppEvent::Quit | AppEvent::ForceQuit => self.should_quit = true,
            AppEvent::Cancel => {
                if self.controller.selection().is_some() {
                    self.controller.clear_selection();
                    self.set_status("Selección borrada");
                }
            }
            AppEvent::NavigateUp => self.navigate(0, -1),
            AppEvent::NavigateDown => self.navigate(0, 1),
            AppEvent::NavigateLeft => self.navigate(-1, 0),
            AppEvent::NavigateRight => self.navigate(1, 0),
            AppEvent::Select => match self.current_view {
                View::Map => self.tap_cursor(),
                View::List => self.resolve_selected(),
            },
            AppEvent::Remove => match self.current_view {
                View::Map => self.remove_under_cursor(),
                View::List => self.resolve_selected(),
            },
            AppEvent::PickType(index) => self.pick_type(index),
            AppEvent::NextType => {
                let len = self.catalog().len();
                let next = self.selected_type_index().map_or(0, |i| (i + 1) % len.max(1));
                self.pick_type(next);
            }
            AppEvent::PrevType => {
                let len = self.catalog().len();
                let prev = self
                    .selected_type_index()
                    .map_or(len.saturating_sub(1), |i| (i + len - 1) % len.max(1));
                self.pick_type(prev);
            }
            AppEvent::CycleLayer => {
                self.theme = Theme::for_layer(self.theme.layer.next());
                tracing::debug!(layer = %self.theme.layer, "map layer changed");
                self.set_status(format!("Capa: {}", self.theme.layer.display_name()));
            }
            AppEvent::Recenter => {
                self.cursor = self.viewport.home_cell(self.map_grid);
                self.mark_dirty();
            }
            AppEvent::None => {}
        }
    }

    fn navigate(&mut self, d_col: i32, d_row: i32) {
        match self.current_view {
            View::Map => {
                self.cursor = self.viewport.step(self.cursor, d_col, d_row, self.map_grid);
                self.mark_dirty();
            }
            View::List => {
                let len = self.controller.session().len();
                if len == 0 || d_row == 0 {
                    return;
                }
                let current = self.list_state.selected().unwrap_or(0);
                let next = if d_row < 0 {
                    current.saturating_sub(1)
                } else {
                    (current + 1).min(len - 1)
                };
                self.list_state.select(Some(next));
                self.mark_dirty();
            }
        }
    }

    fn pick_type(&mut self, index: usize) {
        let Some(entry) = self.catalog().entries().get(index) else {
            return;
        };
        let (id, label) = (entry.id.clone(), entry.label.clone());
        self.controller.select(id);
        self.set_status(format!("Tipo seleccionado: {label}"));
    }

    /// Tap the map at the cursor.
    fn tap_cursor(&mut self) {
        let outcome = self.controller.tap(MapTapEvent::from(self.cursor));
        self.apply_outcome(outcome);
    }

    /// Remove the marker drawn under the cursor.
    fn remove_under_cursor(&mut self) {
        let Some(id) = self
            .marker_layer
            .at(&self.viewport, self.cursor, self.map_grid)
            .map(|marker| marker.id)
        else {
            self.set_status("No hay alerta en esta posición");
            return;
        };
        let outcome = self.controller.remove(id);
        self.apply_outcome(outcome);
    }

    /// Resolve the highlighted list entry.
    fn resolve_selected(&mut self) {
        let Some(id) = self
            .list_state
            .selected()
            .and_then(|i| self.controller.session().list().get(i))
            .map(|record| record.id)
        else {
            return;
        };
        let outcome = self.controller.remove(id);
        self.apply_outcome(outcome);
    }

    fn apply_outcome(&mut self, outcome: Outcome) {
        match &outcome {
            Outcome::MissingSelection => {
                self.prompt = Some(crate::controller::MISSING_SELECTION_PROMPT);
                self.mark_dirty();
                return;
            }
            Outcome::Created(_) | Outcome::Removed(_) => self.refresh_markers(),
            Outcome::NotFound(_) => {}
        }
        self.set_status(outcome.message());
    }

    /// Re-sync the map adapter with the session.
    fn refresh_markers(&mut self) {
        let diff = self.marker_layer.refresh(self.controller.session().markers());
        if !diff.is_empty() {
            tracing::debug!(added = diff.added.len(), removed = diff.removed.len(), "markers synced");
        }
        self.clamp_list_selection();
        self.mark_dirty();
    }

    fn clamp_list_selection(&mut self) {
        let len = self.controller.session().len();
        let selected = match (len, self.list_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.list_state.select(selected);
    }

    /// Run the main application loop.
    pub fn run(&mut self) -> AppResult<()> {
        crossterm::terminal::enable_raw_mode().map_err(|e| AlertaError::TerminalInit { message: e.to_string() })?;
        let mut stdout = io::stdout();
        crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)
            .map_err(|e| AlertaError::TerminalInit { message: e.to_string() })?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        tracing::info!(view = %self.current_view, layer = %self.theme.layer, "terminal ready");
        let result = self.run_loop(&mut terminal);

        restore_terminal()?;
        terminal.show_cursor()?;

        result
    }

    /// The inner event loop with frame-rate limiting.
    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> AppResult<()> {
        while !self.should_quit {
            let frame_start = Instant::now();

            let needs_redraw = self.take_dirty() || self.last_timestamp_update.elapsed() >= TIMESTAMP_CACHE_DURATION;
            if needs_redraw {
                terminal.draw(|frame| self.draw(frame))?;
            }

            let elapsed = frame_start.elapsed();
            let event_timeout = FRAME_DURATION.saturating_sub(elapsed).max(Duration::from_millis(10));

            if event::poll(event_timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
                    Event::Resize(..) => self.mark_dirty(),
                    _ => {}
                }
            }
        }
        tracing::info!(active_alerts = self.controller.session().len(), "leaving terminal");
        Ok(())
    }

    /// Draw the UI.
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(8),    // Content
                Constraint::Length(2), // Footer
            ])
            .split(area);

        self.draw_header(frame, chunks[0]);
        match self.current_view {
            View::Map => self.draw_map_view(frame, chunks[1]),
            View::List => self.draw_list_view(frame, chunks[1]),
        }
        self.draw_footer(frame, chunks[2]);

        if let Some(prompt) = self.prompt {
            self.draw_prompt(frame, area, prompt);
        }
        if self.show_help {
            self.draw_help_overlay(frame, area);
        }
    }

    /// Draw the header bar: title, clock, active alert count and layer.
    fn draw_header(&mut self, frame: &mut Frame, area: Rect) {
        let now = self.get_cached_timestamp();
        let colors = &self.theme.colors;
        let title = format!(" Alerta Temprana - {} ", self.current_view.title());
        let count = match self.controller.session().len() {
            1 => "[1 alerta activa]".to_string(),
            n => format!("[{n} alertas activas]"),
        };
        let layer = format!("Capa: {}", self.theme.layer.display_name());

        let right_len = now.chars().count() + 2 + count.chars().count() + 2 + layer.chars().count();
        let spacing = area
            .width
            .saturating_sub((title.chars().count() + right_len + 2) as u16) as usize;

        let header = Paragraph::new(Line::from(vec![
            Span::styled(title, Style::default().fg(colors.header).add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(spacing)),
            Span::styled(now, Style::default().fg(colors.text_dim)),
            Span::raw("  "),
            Span::styled(count, Style::default().fg(colors.marker)),
            Span::raw("  "),
            Span::styled(layer, Style::default().fg(colors.text_dim)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border_dim)),
        );

        frame.render_widget(header, area);
    }

    /// Draw the map with the category picker and cursor popup.
    ///
    /// The picker always gets one row per category. Wide terminals stack
    /// picker and popup beside the map; narrow ones put them side by side
    /// under it.
    fn draw_map_view(&mut self, frame: &mut Frame, area: Rect) {
        let picker_height = self.catalog().len() as u16 + 2;
        let picker_width = self.picker_width();

        let (map_area, picker_area, popup_area) = match LayoutMode::from_width(area.width) {
            LayoutMode::Wide => {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Min(40), Constraint::Length(picker_width)])
                    .split(area);
                let side = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(picker_height), Constraint::Min(4)])
                    .split(columns[1]);
                (columns[0], side[0], side[1])
            }
            LayoutMode::Narrow => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(5), Constraint::Length(picker_height)])
                    .split(area);
                let bottom = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Length(picker_width), Constraint::Min(20)])
                    .split(rows[1]);
                (rows[0], bottom[0], bottom[1])
            }
        };

        let colors = &self.theme.colors;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.header))
            .title(Span::styled(
                format!(" Mapa · {} ", self.theme.layer.display_name()),
                Style::default().fg(colors.header).add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(format!(" {} ", self.cursor)).right_aligned());

        let inner = block.inner(map_area);
        if inner.width > 0 && inner.height > 0 {
            self.map_grid = (inner.width, inner.height);
        }

        let grid = MapGrid::new(&self.viewport, &self.marker_layer, self.cursor, &self.theme.colors).block(block);
        frame.render_widget(grid, map_area);

        self.draw_picker(frame, picker_area);
        self.draw_cursor_popup(frame, popup_area);
    }

    /// Columns needed to show the longest category label with its hotkey.
    fn picker_width(&self) -> u16 {
        let longest = self
            .catalog()
            .entries()
            .iter()
            .map(|entry| entry.label.chars().count())
            .max()
            .unwrap_or(0);
        // "[1] " plus borders
        (longest as u16 + 6).max(28)
    }

    /// Draw the category picker.
    fn draw_picker(&self, frame: &mut Frame, area: Rect) {
        let colors = &self.theme.colors;
        let selected = self.selected_type_index();
        let hotkey_style = Style::default().fg(colors.hotkey);

        let lines: Vec<Line> = self
            .catalog()
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let key = match i {
                    0..=8 => format!("[{}] ", i + 1),
                    9 => "[0] ".to_string(),
                    _ => "    ".to_string(),
                };
                let style = if selected == Some(i) {
                    Style::default()
                        .fg(colors.text)
                        .bg(colors.selected_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors.text)
                };
                Line::from(vec![
                    Span::styled(key, hotkey_style),
                    Span::styled(entry.label.clone(), style),
                ])
            })
            .collect();

        let title = match selected {
            Some(_) => " Tipo de Alerta ",
            None => " Tipo de Alerta (ninguno) ",
        };
        let picker = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border_dim))
                .title(Span::styled(title, Style::default().fg(colors.header))),
        );
        frame.render_widget(picker, area);
    }

    /// Draw the popup for the marker under the cursor.
    ///
    /// Title and the remove hotkey live on the border so they survive any
    /// height; time and location come before the description, which wraps
    /// into whatever rows remain.
    fn draw_cursor_popup(&self, frame: &mut Frame, area: Rect) {
        let colors = &self.theme.colors;
        let dim = Style::default().fg(colors.text_dim);
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border_dim));

        let content = match self.marker_layer.at(&self.viewport, self.cursor, self.map_grid) {
            Some(marker) => {
                block = block
                    .title(Span::styled(
                        format!(" {} ", marker.title),
                        Style::default().fg(colors.marker).add_modifier(Modifier::BOLD),
                    ))
                    .title_bottom(
                        Line::from(vec![
                            Span::styled(" [x]", Style::default().fg(colors.hotkey)),
                            Span::raw(" Eliminar "),
                        ])
                        .right_aligned(),
                    );

                let hora = format!("Hora: {}", marker.created_at);
                let ubicacion = format!("Ubicación: {}", marker.coordinate);
                let mut lines = if block.inner(area).width as usize >= hora.chars().count() + 3 + ubicacion.chars().count() {
                    vec![Line::from(Span::styled(format!("{hora} · {ubicacion}"), dim))]
                } else {
                    vec![Line::from(Span::styled(hora, dim)), Line::from(Span::styled(ubicacion, dim))]
                };
                lines.push(Line::from(Span::styled(marker.description.clone(), Style::default().fg(colors.text))));
                lines
            }
            None => {
                block = block.title(Span::styled(" Detalle ", Style::default().fg(colors.header)));
                vec![Line::from(Span::styled("Sin alerta en el cursor", dim))]
            }
        };

        let popup = Paragraph::new(content).block(block).wrap(Wrap { trim: true });
        frame.render_widget(popup, area);
    }

    /// Draw the list of active alerts.
    fn draw_list_view(&mut self, frame: &mut Frame, area: Rect) {
        let colors = &self.theme.colors;
        let records = self.controller.session().list();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.header))
            .title(Span::styled(
                format!(" Alertas Activas ({}) ", records.len()),
                Style::default().fg(colors.header).add_modifier(Modifier::BOLD),
            ));

        if records.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled("No hay alertas activas", Style::default().fg(colors.text))),
                Line::from(Span::styled(
                    "Ve al mapa para crear nuevas alertas",
                    Style::default().fg(colors.text_dim),
                )),
            ])
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = records
            .iter()
            .map(|record| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            record.title.clone(),
                            Style::default().fg(colors.marker).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(format!("  {}", record.id), Style::default().fg(colors.text_dim)),
                    ]),
                    Line::from(Span::styled(record.description.clone(), Style::default().fg(colors.text))),
                    Line::from(Span::styled(
                        format!("Hora: {}  |  Ubicación: {}", record.created_at, record.coordinate),
                        Style::default().fg(colors.text_dim),
                    )),
                    Line::from(""),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(colors.selected_bg).add_modifier(Modifier::BOLD))
            .highlight_symbol("▌");

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }

    /// Draw the footer with hotkey hints and the status message.
    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let colors = &self.theme.colors;
        let hotkey_style = Style::default().fg(colors.hotkey);
        let view_hints: &[(&str, &str)] = match self.current_view {
            View::Map => &[
                ("[←↑↓→]", "Mover "),
                ("[Enter]", "Crear "),
                ("[x]", "Eliminar "),
                ("[1-0]", "Tipo "),
                ("[L]", "Capa "),
            ],
            View::List => &[("[↑↓]", "Seleccionar "), ("[Enter]", "Resolver ")],
        };

        let other = self.current_view.toggle();
        let mut hints: Vec<Span> = view_hints
            .iter()
            .flat_map(|(key, label)| [Span::styled(*key, hotkey_style), Span::raw(*label)])
            .collect();
        hints.extend([
            Span::styled(other.hotkey_hint(), hotkey_style),
            Span::raw(" "),
            Span::styled("[?]", hotkey_style),
            Span::raw("Ayuda "),
            Span::styled("[q]", hotkey_style),
            Span::raw("Salir"),
        ]);

        let mut block = Block::default().borders(Borders::TOP);
        if let Some(status) = &self.status_message {
            block = block
                .title(Span::styled(format!(" {status} "), Style::default().fg(colors.header)))
                .title_alignment(Alignment::Right);
        }

        let footer = Paragraph::new(Line::from(hints))
            .style(Style::default().fg(colors.text_dim))
            .block(block);

        frame.render_widget(footer, area);
    }

    /// Draw the blocking prompt.
    fn draw_prompt(&self, frame: &mut Frame, area: Rect, message: &str) {
        let colors = &self.theme.colors;
        let width = (message.chars().count() as u16 + 6).min(area.width);
        let overlay_area = centered_rect(area, width, 6);
        frame.render_widget(Clear, overlay_area);

        let prompt = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(message, Style::default().fg(colors.text))),
            Line::from(""),
            Line::from(Span::styled("Pulsa cualquier tecla", Style::default().fg(colors.text_dim))),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.marker))
                .title(Span::styled(
                    " Alerta Temprana ",
                    Style::default().fg(colors.marker).add_modifier(Modifier::BOLD),
                ))
                .style(Style::default().bg(colors.map_bg)),
        )
        .wrap(Wrap { trim: true });

        frame.render_widget(prompt, overlay_area);
    }

    /// Draw the help overlay.
    fn draw_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let colors = &self.theme.colors;
        let overlay_area = centered_rect(area, 56, 24);
        frame.render_widget(Clear, overlay_area);

        let help_text = "\
Alerta Temprana - Atajos

Vistas:
  m        Mapa
  a        Alertas activas
  Tab      Alternar vista

Mapa:
  ←↑↓→ hjkl  Mover el cursor
  Enter      Crear alerta en el cursor
  x          Eliminar la alerta del cursor
  1-9, 0     Elegir tipo de alerta
  [ ]        Tipo anterior / siguiente
  Esc        Borrar la selección
  L          Cambiar capa del mapa
  c          Volver al centro

Alertas:
  ↑↓         Seleccionar
  Enter x r  Resolver

General:
  ?  Ayuda   q  Salir   Ctrl+C  Forzar salida

Pulsa cualquier tecla para cerrar.";

        let help = Paragraph::new(help_text)
            .style(Style::default().fg(colors.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors.header))
                    .title(Span::styled(
                        " Ayuda ",
                        Style::default().fg(colors.header).add_modifier(Modifier::BOLD),
                    ))
                    .style(Style::default().bg(colors.map_bg)),
            )
            .wrap(Wrap { trim: false });

        frame.render_widget(help, overlay_area);
    }
}

/// A rectangle of at most `width`×`height` centered in `area`.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Restore the terminal to its normal state.
///
/// Called on normal exit and from the panic hook.
pub fn restore_terminal() -> alerta_core::Result<()> {
    let restore_err = |e: io::Error| AlertaError::TerminalRestore { message: e.to_string() };
    let mut stdout = io::stdout();

    let _ = crossterm::terminal::disable_raw_mode();
    crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen, crossterm::cursor::Show)
        .map_err(restore_err)?;
    stdout.flush().map_err(restore_err)?;
    Ok(())
}
