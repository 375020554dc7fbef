//! Application state definitions

use crate::state::ContactForm;

/// Where key input is routed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Browsing the page: scroll keys, resume shortcut
    #[default]
    Page,
    /// Editing the contact form
    Form,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub focus: Focus,
    /// Vertical page scroll in rows
    pub scroll: u16,
    pub contact: ContactForm,
}

impl AppState {
    pub fn is_form_focused(&self) -> bool {
        matches!(self.focus, Focus::Form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_focus_is_page() {
        let state = AppState::default();
        assert_eq!(state.focus, Focus::Page);
        assert_eq!(state.scroll, 0);
        assert!(!state.is_form_focused());
    }
}
