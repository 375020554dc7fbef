//! Page header: name, tagline, resume button

use crate::app::App;
use crate::content;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Name + tagline + blank + button rows
pub const HEIGHT: u16 = 3 + BUTTON_HEIGHT;

const RESUME_LABEL: &str = "⬇ Download Resume (r)";

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let accent = app.config.accent_color();

    let title = Paragraph::new(vec![
        Line::styled(
            content::OWNER,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Line::styled(content::TAGLINE, Style::default().fg(Color::Gray)),
    ])
    .alignment(Alignment::Center);

    let title_area = Rect {
        height: area.height.min(2),
        ..area
    };
    frame.render_widget(title, title_area);

    // Centered resume button under the tagline
    let button_width = (RESUME_LABEL.chars().count() as u16 + 4).min(area.width);
    let button_area = Rect {
        x: area.x + area.width.saturating_sub(button_width) / 2,
        y: area.y + 3,
        width: button_width,
        height: BUTTON_HEIGHT,
    };
    render_button(frame, button_area, RESUME_LABEL, false, accent);
}
