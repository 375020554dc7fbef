//! Tech stack bullet list

use crate::app::App;
use crate::content::TECH_STACK;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Borders plus one row per entry
pub const HEIGHT: u16 = TECH_STACK.len() as u16 + 2;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let accent = app.config.accent_color();

    let lines: Vec<Line> = TECH_STACK
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled("▶ ", Style::default().fg(accent)),
                Span::styled(*entry, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Tech Stack & Specialties ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
