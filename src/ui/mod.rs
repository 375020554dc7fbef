//! UI module for rendering the TUI

mod components;
mod contact;
mod field_renderer;
mod header;
mod layout;
mod services;
mod stack;

use crate::app::App;
use crate::content;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Blank rows between sections
const SECTION_GAP: u16 = 1;
/// Footer rows
const FOOTER_HEIGHT: u16 = 1;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (page_area, status_area) = layout::create_layout(frame.area());
    draw_page(frame, page_area, app);
    layout::draw_status_bar(frame, status_area, app);
}

/// Section heights at the given width, top to bottom
fn section_heights(width: u16) -> [u16; 5] {
    [
        header::HEIGHT,
        services::section_height(width),
        stack::HEIGHT,
        contact::HEIGHT,
        FOOTER_HEIGHT,
    ]
}

/// Total page height at the given width, used to clamp scrolling
pub fn page_height(width: u16) -> u16 {
    let heights = section_heights(width);
    heights.iter().sum::<u16>() + SECTION_GAP * (heights.len() as u16 - 1)
}

/// Draw all page sections, offset by the current scroll position.
/// Sections that do not fully fit the viewport are skipped.
fn draw_page(frame: &mut Frame, area: Rect, app: &App) {
    let bottom = (area.y + area.height) as i32;
    let mut y = area.y as i32 - app.state.scroll as i32;

    for (idx, height) in section_heights(area.width).into_iter().enumerate() {
        let section_y = y;
        y += (height + SECTION_GAP) as i32;

        if section_y < area.y as i32 || section_y + height as i32 > bottom {
            continue;
        }

        let rect = Rect {
            x: area.x,
            y: section_y as u16,
            width: area.width,
            height,
        };

        match idx {
            0 => header::draw(frame, rect, app),
            1 => services::draw(frame, rect, app),
            2 => stack::draw(frame, rect, app),
            3 => contact::draw(frame, rect, app),
            _ => draw_footer(frame, rect),
        }
    }
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(content::FOOTER)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
