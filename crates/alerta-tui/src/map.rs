//! Terminal map: a latitude/longitude grid acting as the map widget.
//!
//! The visible area is the configured viewport (center ± half the deltas)
//! divided into one cell per terminal character. The cursor always sits on a
//! cell center, and "tapping" reports that cell's coordinate.
//!
//! [`MarkerLayer`] is the in-process [`MapAdapter`]: it is kept in step with
//! the session through marker-set diffs, and the [`MapGrid`] widget draws
//! whatever the layer currently holds.

use alerta_config::MapConfig;
use alerta_core::bridge::sync;
use alerta_core::{AlertId, Coordinate, MapAdapter, MarkerDescriptor, MarkerDiff, MarkerSet};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::theme::ThemeColors;

/// Grid size assumed before the first frame is drawn.
pub const DEFAULT_GRID: (u16, u16) = (40, 16);

const MARKER_SYMBOL: &str = "⚠";
const CURSOR_SYMBOL: &str = "+";
const HOME_SYMBOL: &str = "◉";
const GRID_SYMBOL: &str = "·";

/// Geographic area shown on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Viewport {
    /// Viewport from map configuration.
    pub fn from_config(config: &MapConfig) -> Self {
        Self {
            center: config.center,
            latitude_delta: config.latitude_delta,
            longitude_delta: config.longitude_delta,
        }
    }

    pub fn north(&self) -> f64 {
        self.center.latitude + self.latitude_delta / 2.0
    }

    pub fn south(&self) -> f64 {
        self.center.latitude - self.latitude_delta / 2.0
    }

    pub fn west(&self) -> f64 {
        self.center.longitude - self.longitude_delta / 2.0
    }

    pub fn east(&self) -> f64 {
        self.center.longitude + self.longitude_delta / 2.0
    }

    /// Returns true if the coordinate is inside the viewport (edges included).
    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.south()..=self.north()).contains(&coord.latitude)
            && (self.west()..=self.east()).contains(&coord.longitude)
    }

    /// Coordinate at the center of a grid cell.
    pub fn cell_center(&self, col: u16, row: u16, grid: (u16, u16)) -> Coordinate {
        let (cols, rows) = (grid.0.max(1) as f64, grid.1.max(1) as f64);
        Coordinate::new(
            self.north() - (row as f64 + 0.5) * self.latitude_delta / rows,
            self.west() + (col as f64 + 0.5) * self.longitude_delta / cols,
        )
    }

    /// Grid cell containing a coordinate, or `None` if it is off-screen.
    pub fn cell_of(&self, coord: Coordinate, grid: (u16, u16)) -> Option<(u16, u16)> {
        let (cols, rows) = grid;
        if cols == 0 || rows == 0 || !self.contains(coord) {
            return None;
        }
        let x = (coord.longitude - self.west()) / self.longitude_delta * cols as f64;
        let y = (self.north() - coord.latitude) / self.latitude_delta * rows as f64;
        Some(((x.floor() as u16).min(cols - 1), (y.floor() as u16).min(rows - 1)))
    }

    /// Move from the cell containing `from` by whole cells, staying on-screen.
    ///
    /// Off-screen coordinates snap to the center cell first.
    pub fn step(&self, from: Coordinate, d_col: i32, d_row: i32, grid: (u16, u16)) -> Coordinate {
        let (cols, rows) = (grid.0.max(1), grid.1.max(1));
        let (col, row) = self
            .cell_of(from, (cols, rows))
            .unwrap_or((cols / 2, rows / 2));
        let col = (col as i32 + d_col).clamp(0, cols as i32 - 1) as u16;
        let row = (row as i32 + d_row).clamp(0, rows as i32 - 1) as u16;
        self.cell_center(col, row, (cols, rows))
    }

    /// The cell center nearest the viewport center.
    pub fn home_cell(&self, grid: (u16, u16)) -> Coordinate {
        self.step(self.center, 0, 0, grid)
    }
}

/// Markers currently drawn on the terminal map.
#[derive(Debug, Clone, Default)]
pub struct MarkerLayer {
    markers: Vec<MarkerDescriptor>,
    rendered: MarkerSet,
}

impl MapAdapter for MarkerLayer {
    fn place(&mut self, marker: &MarkerDescriptor) {
        self.markers.push(marker.clone());
    }

    fn remove(&mut self, id: AlertId) {
        self.markers.retain(|m| m.id != id);
    }
}

impl MarkerLayer {
    /// Bring the layer up to date with a new session snapshot.
    pub fn refresh(&mut self, next: MarkerSet) -> MarkerDiff {
        let previous = std::mem::take(&mut self.rendered);
        let diff = sync(self, &previous, &next);
        self.rendered = next;
        diff
    }

    /// Markers in placement order.
    pub fn markers(&self) -> &[MarkerDescriptor] {
        &self.markers
    }

    /// Number of markers on the map.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Returns true if no markers are placed.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// The most recently placed marker inside a grid cell.
    pub fn at_cell(&self, viewport: &Viewport, cell: (u16, u16), grid: (u16, u16)) -> Option<&MarkerDescriptor> {
        self.markers
            .iter()
            .rev()
            .find(|m| viewport.cell_of(m.coordinate, grid) == Some(cell))
    }

    /// The most recently placed marker under a coordinate's cell.
    pub fn at(&self, viewport: &Viewport, coord: Coordinate, grid: (u16, u16)) -> Option<&MarkerDescriptor> {
        let cell = viewport.cell_of(coord, grid)?;
        self.at_cell(viewport, cell, grid)
    }
}

/// Widget drawing the viewport grid, markers, home and cursor.
pub struct MapGrid<'a> {
    viewport: &'a Viewport,
    layer: &'a MarkerLayer,
    cursor: Coordinate,
    colors: &'a ThemeColors,
    block: Option<Block<'a>>,
}

impl<'a> MapGrid<'a> {
    pub fn new(viewport: &'a Viewport, layer: &'a MarkerLayer, cursor: Coordinate, colors: &'a ThemeColors) -> Self {
        Self {
            viewport,
            layer,
            cursor,
            colors,
            block: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for MapGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match &self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.clone().render(area, buf);
                inner
            }
            None => area,
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let grid = (inner.width, inner.height);
        let colors = self.colors;
        let base = Style::default().bg(colors.map_bg);
        buf.set_style(inner, base);

        for row in 0..inner.height {
            for col in 0..inner.width {
                if col % 4 == 0 && row % 2 == 0 {
                    buf[(inner.x + col, inner.y + row)]
                        .set_symbol(GRID_SYMBOL)
                        .set_style(base.fg(colors.map_grid));
                }
            }
        }

        let mut put = |cell: (u16, u16), symbol: &str, style: Style| {
            buf[(inner.x + cell.0, inner.y + cell.1)]
                .set_symbol(symbol)
                .set_style(style);
        };

        if let Some(cell) = self.viewport.cell_of(self.viewport.center, grid) {
            put(cell, HOME_SYMBOL, base.fg(colors.home));
        }

        for marker in self.layer.markers() {
            if let Some(cell) = self.viewport.cell_of(marker.coordinate, grid) {
                put(cell, MARKER_SYMBOL, base.fg(colors.marker).add_modifier(Modifier::BOLD));
            }
        }

        if let Some(cell) = self.viewport.cell_of(self.cursor, grid) {
            match self.layer.at_cell(self.viewport, cell, grid) {
                Some(_) => put(
                    cell,
                    MARKER_SYMBOL,
                    Style::default()
                        .fg(colors.map_bg)
                        .bg(colors.cursor)
                        .add_modifier(Modifier::BOLD),
                ),
                None => put(cell, CURSOR_SYMBOL, base.fg(colors.cursor).add_modifier(Modifier::BOLD)),
            }
        }
    }
}
