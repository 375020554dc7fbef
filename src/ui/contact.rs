//! Contact form section

use crate::app::App;
use crate::state::Form;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::field_renderer::draw_field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Borders + three fields + Send row
pub const HEIGHT: u16 = 2 + 3 + 3 + 6 + BUTTON_HEIGHT;

const SEND_LABEL: &str = "Send ➤";

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let accent = app.config.accent_color();
    let form = &app.state.contact;
    let form_focused = app.state.is_form_focused();

    let border_color = if form_focused {
        accent
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Contact Me ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Length(6),             // Message
            Constraint::Length(BUTTON_HEIGHT), // Send
        ])
        .margin(1)
        .split(area);

    for idx in 0..3 {
        if let Some(field) = form.get_field(idx) {
            let is_active = form_focused && form.active_field_index == idx;
            draw_field(frame, chunks[idx], field, is_active, accent);
        }
    }

    let button_width = (SEND_LABEL.chars().count() as u16 + 4).min(chunks[3].width);
    let button_area = Rect {
        width: button_width,
        ..chunks[3]
    };
    render_button(
        frame,
        button_area,
        SEND_LABEL,
        form_focused && form.is_send_row_active(),
        accent,
    );
}
