//! Application state and core logic

use crate::config::UiConfig;
use crate::state::{AppState, Focus, Form, Notice};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Rows moved per PageUp/PageDown
const PAGE_SCROLL: u16 = 10;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: UiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Transient status-bar notice
    pub notice: Option<Notice>,
    /// Terminal size for scroll clamping (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: UiConfig) -> Self {
        Self {
            state: AppState::default(),
            config,
            quit: false,
            notice: None,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Clear the notice once it has expired
    pub fn update_notice(&mut self) {
        if let Some(ref notice) = self.notice {
            if notice.is_expired() {
                self.notice = None;
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.focus {
            Focus::Page => self.handle_page_key(key),
            Focus::Form => self.handle_form_key(key),
        }
        Ok(())
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Char('c') => {
                self.state.focus = Focus::Form;
            }
            KeyCode::Char('r') => self.show_resume_link(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::PageDown => self.scroll_down(PAGE_SCROLL),
            KeyCode::PageUp => self.scroll_up(PAGE_SCROLL),
            KeyCode::Home => self.state.scroll = 0,
            KeyCode::End => self.state.scroll = self.max_scroll(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        // Submit shortcut works from any field
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit_contact();
            return;
        }

        match key.code {
            KeyCode::Esc => self.state.focus = Focus::Page,
            KeyCode::Tab | KeyCode::Down => self.state.contact.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.contact.prev_field(),
            KeyCode::Enter => {
                if self.state.contact.is_send_row_active() {
                    self.submit_contact();
                } else if self.state.contact.get_active_field_mut().is_multiline {
                    self.state.contact.get_active_field_mut().push_char('\n');
                } else {
                    self.state.contact.next_field();
                }
            }
            KeyCode::Backspace => {
                if !self.state.contact.is_send_row_active() {
                    self.state.contact.get_active_field_mut().pop_char();
                }
            }
            KeyCode::Char(c) => {
                if !self.state.contact.is_send_row_active() {
                    self.state.contact.get_active_field_mut().push_char(c);
                }
            }
            _ => {}
        }
    }

    /// Submit the contact form: log the values, acknowledge, reset.
    /// Blocked while any field is empty; no other failure path exists.
    fn submit_contact(&mut self) {
        let ttl = self.config.notice_ttl();

        if !self.state.contact.is_complete() {
            self.notice = Some(Notice::hint("Name, email, and message are required", ttl));
            return;
        }

        let submission = self.state.contact.take_submission();
        match serde_json::to_string(&submission) {
            Ok(payload) => tracing::info!(%payload, "contact form submitted"),
            Err(err) => tracing::warn!(?err, "failed to serialize submission"),
        }

        self.notice = Some(Notice::ack(
            "Message sent! Thank you for reaching out.",
            ttl,
        ));
    }

    /// Surface the resume link target; nothing is fetched or opened
    fn show_resume_link(&mut self) {
        let ttl = self.config.notice_ttl();
        let url = self.config.resume_url();
        let message = if url == crate::content::RESUME_URL {
            "Resume link not configured yet".to_string()
        } else {
            format!("Resume: {url}")
        };
        tracing::info!(url, "resume link requested");
        self.notice = Some(Notice::hint(message, ttl));
    }

    fn scroll_down(&mut self, amount: u16) {
        self.state.scroll = (self.state.scroll + amount).min(self.max_scroll());
    }

    fn scroll_up(&mut self, amount: u16) {
        self.state.scroll = self.state.scroll.saturating_sub(amount);
    }

    /// Re-clamp scroll after a resize
    pub fn clamp_scroll(&mut self) {
        self.state.scroll = self.state.scroll.min(self.max_scroll());
    }

    /// Highest valid scroll offset for the current terminal size
    fn max_scroll(&self) -> u16 {
        // terminal_size is (height, width); one row goes to the status bar
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        let viewport = height.saturating_sub(1);
        crate::ui::page_height(width).saturating_sub(viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NoticeKind;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        App::new(UiConfig::default())
    }

    fn enter_form(app: &mut App) {
        app.handle_key(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.state.focus, Focus::Form);
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn fill_form(app: &mut App) {
        enter_form(app);
        type_str(app, "Ada");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(app, "a@example.com");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(app, "Hi");
        app.handle_key(key(KeyCode::Tab)).unwrap(); // onto Send row
    }

    #[test]
    fn test_typing_routes_to_active_field_only() {
        let mut app = test_app();
        enter_form(&mut app);
        type_str(&mut app, "Ada");
        assert_eq!(app.state.contact.name.as_text(), "Ada");
        assert_eq!(app.state.contact.email.as_text(), "");
        assert_eq!(app.state.contact.message.as_text(), "");
    }

    #[test]
    fn test_backspace_edits_active_field() {
        let mut app = test_app();
        enter_form(&mut app);
        type_str(&mut app, "Adaa");
        app.handle_key(key(KeyCode::Backspace)).unwrap();
        assert_eq!(app.state.contact.name.as_text(), "Ada");
    }

    #[test]
    fn test_enter_advances_single_line_field() {
        let mut app = test_app();
        enter_form(&mut app);
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.state.contact.active_field_index, 1);
    }

    #[test]
    fn test_enter_inserts_newline_in_message() {
        let mut app = test_app();
        enter_form(&mut app);
        app.handle_key(key(KeyCode::Tab)).unwrap();
        app.handle_key(key(KeyCode::Tab)).unwrap(); // message field
        type_str(&mut app, "a");
        app.handle_key(key(KeyCode::Enter)).unwrap();
        type_str(&mut app, "b");
        assert_eq!(app.state.contact.message.as_text(), "a\nb");
    }

    #[test]
    fn test_submit_resets_fields_and_acknowledges_once() {
        let mut app = test_app();
        fill_form(&mut app);
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert_eq!(app.state.contact.name.as_text(), "");
        assert_eq!(app.state.contact.email.as_text(), "");
        assert_eq!(app.state.contact.message.as_text(), "");
        assert_eq!(app.state.contact.active_field_index, 0);

        let notice = app.notice.as_ref().expect("acknowledgment shown");
        assert_eq!(notice.kind, NoticeKind::Ack);
    }

    #[test]
    fn test_submit_blocked_while_incomplete() {
        let mut app = test_app();
        enter_form(&mut app);
        type_str(&mut app, "Ada");
        // Jump straight to Send with email and message still empty
        app.handle_key(key(KeyCode::BackTab)).unwrap();
        app.handle_key(key(KeyCode::Enter)).unwrap();

        assert_eq!(app.state.contact.name.as_text(), "Ada");
        let notice = app.notice.as_ref().expect("required hint shown");
        assert_eq!(notice.kind, NoticeKind::Hint);
    }

    #[test]
    fn test_second_submit_on_reset_form_is_blocked() {
        let mut app = test_app();
        fill_form(&mut app);
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Ack);

        // Form was reset, so an immediate resubmit hits the required gate
        app.handle_key(key(KeyCode::BackTab)).unwrap();
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Hint);
    }

    #[test]
    fn test_ctrl_s_submits_from_any_field() {
        let mut app = test_app();
        fill_form(&mut app);
        app.handle_key(key(KeyCode::Tab)).unwrap(); // wrap back to name
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(app.notice.as_ref().unwrap().kind, NoticeKind::Ack);
        assert_eq!(app.state.contact.name.as_text(), "");
    }

    #[test]
    fn test_esc_returns_to_page_without_clearing_fields() {
        let mut app = test_app();
        enter_form(&mut app);
        type_str(&mut app, "Ada");
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert_eq!(app.state.focus, Focus::Page);
        assert_eq!(app.state.contact.name.as_text(), "Ada");
        assert!(!app.should_quit());
    }

    #[test]
    fn test_q_quits_on_page_but_types_in_form() {
        let mut app = test_app();
        enter_form(&mut app);
        type_str(&mut app, "q");
        assert!(!app.should_quit());
        assert_eq!(app.state.contact.name.as_text(), "q");

        app.handle_key(key(KeyCode::Esc)).unwrap();
        app.handle_key(key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_scroll_is_clamped_to_page_height() {
        let mut app = test_app();
        app.terminal_size = Some((24, 80));
        for _ in 0..200 {
            app.handle_key(key(KeyCode::Char('j'))).unwrap();
        }
        let max = crate::ui::page_height(80).saturating_sub(23);
        assert_eq!(app.state.scroll, max);

        app.handle_key(key(KeyCode::Home)).unwrap();
        assert_eq!(app.state.scroll, 0);
    }

    #[test]
    fn test_tall_terminal_never_scrolls() {
        let mut app = test_app();
        app.terminal_size = Some((200, 80));
        app.handle_key(key(KeyCode::PageDown)).unwrap();
        assert_eq!(app.state.scroll, 0);
    }

    #[test]
    fn test_clamp_scroll_after_resize() {
        let mut app = test_app();
        app.terminal_size = Some((24, 80));
        app.handle_key(key(KeyCode::End)).unwrap();
        assert!(app.state.scroll > 0);

        app.terminal_size = Some((200, 80));
        app.clamp_scroll();
        assert_eq!(app.state.scroll, 0);
    }

    #[test]
    fn test_resume_key_shows_placeholder_notice() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('r'))).unwrap();
        let notice = app.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Hint);
        assert!(notice.message.contains("not configured"));
    }

    #[test]
    fn test_resume_key_shows_configured_url() {
        let mut app = App::new(UiConfig {
            resume_url: Some("https://example.com/cv.pdf".to_string()),
            ..Default::default()
        });
        app.handle_key(key(KeyCode::Char('r'))).unwrap();
        assert!(app
            .notice
            .as_ref()
            .unwrap()
            .message
            .contains("https://example.com/cv.pdf"));
    }

    #[test]
    fn test_expired_notice_is_cleared() {
        let mut app = App::new(UiConfig {
            notice_duration_ms: Some(0),
            ..Default::default()
        });
        fill_form(&mut app);
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(app.notice.is_some());
        app.update_notice();
        assert!(app.notice.is_none());
    }
}
