//! Service cards grid

use crate::app::App;
use crate::content::{Service, SERVICES};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Grid layout configuration
const MIN_CARD_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 6; // borders + title row + wrapped description
const CARD_SPACING_H: u16 = 1;

/// Helper for grid layout calculations
struct GridLayout {
    columns: usize,
    card_width: u16,
}

impl GridLayout {
    /// Create a new grid layout based on available width
    fn new(area_width: u16) -> Self {
        let columns = if area_width >= MIN_CARD_WIDTH {
            ((area_width + CARD_SPACING_H) / (MIN_CARD_WIDTH + CARD_SPACING_H)) as usize
        } else {
            1
        };
        let columns = columns.clamp(1, SERVICES.len());

        // Distribute remaining space evenly across cards
        let total_spacing = (columns.saturating_sub(1) as u16) * CARD_SPACING_H;
        let card_width = area_width.saturating_sub(total_spacing) / columns as u16;

        Self {
            columns,
            card_width: card_width.max(MIN_CARD_WIDTH),
        }
    }

    /// Convert linear index to (row, col)
    fn index_to_pos(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Number of grid rows needed for all cards
    fn rows(&self) -> usize {
        SERVICES.len().div_ceil(self.columns)
    }

    /// Get card area for a given position
    fn card_area(&self, area: Rect, row: usize, col: usize) -> Rect {
        Rect {
            x: area.x + (col as u16) * (self.card_width + CARD_SPACING_H),
            y: area.y + (row as u16) * CARD_HEIGHT,
            width: self.card_width,
            height: CARD_HEIGHT,
        }
    }
}

/// Total section height at the given width
pub fn section_height(area_width: u16) -> u16 {
    GridLayout::new(area_width).rows() as u16 * CARD_HEIGHT
}

/// Draw the three service cards
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let grid = GridLayout::new(area.width);
    let accent = app.config.accent_color();

    for (idx, service) in SERVICES.iter().enumerate() {
        let (row, col) = grid.index_to_pos(idx);
        let card_area = grid.card_area(area, row, col);

        // Skip if card is outside visible area
        if card_area.y + card_area.height > area.y + area.height
            || card_area.x + card_area.width > area.x + area.width
        {
            continue;
        }

        draw_service_card(frame, card_area, service, accent);
    }
}

/// Draw a single service card
fn draw_service_card(frame: &mut Frame, area: Rect, service: &Service, accent: Color) {
    let block = Block::default()
        .title(format!(" {} ", service.title))
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let description = Paragraph::new(service.description)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(description, inner);
}
