//! Page layout and status bar

use crate::app::App;
use crate::state::{Focus, NoticeKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the frame into page content and a one-row status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Page content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar: key hints, transient notice, quit hint
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {}", get_focus_hints(&app.state.focus)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(notice) = &app.notice {
        let color = match notice.kind {
            NoticeKind::Ack => Color::Green,
            NoticeKind::Hint => Color::Yellow,
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            notice.message.as_str(),
            Style::default().fg(color),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current focus
fn get_focus_hints(focus: &Focus) -> &'static str {
    match focus {
        Focus::Page => "Tab:contact  r:resume  j/k:scroll  q:quit",
        Focus::Form => "Tab:next  Shift+Tab:prev  Enter:send  Esc:page",
    }
}
