//! Application state definitions

use super::forms::OnboardingPage;
use std::collections::VecDeque;

/// Which part of the current page receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Input,
    Buttons,
}

impl FormFocus {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Input => Self::Buttons,
            Self::Buttons => Self::Input,
        }
    }
}

/// Button shown in a page's button row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Back,
    Next,
    Submit,
}

impl PageButton {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Back => "Back",
            Self::Next => "Next",
            Self::Submit => "Submit",
        }
    }

    /// Buttons for a page, left to right
    pub fn row(page: OnboardingPage) -> &'static [PageButton] {
        match page {
            OnboardingPage::FirstName => &[Self::Next],
            OnboardingPage::LastName => &[Self::Back, Self::Next],
            OnboardingPage::Email => &[Self::Back, Self::Submit],
        }
    }

    /// Forward action of a page: Next, or Submit on the last page
    pub fn primary(page: OnboardingPage) -> PageButton {
        if page.is_last() {
            Self::Submit
        } else {
            Self::Next
        }
    }

    /// Index of the forward action (Next or Submit) in the page's row
    pub fn primary_index(page: OnboardingPage) -> usize {
        Self::row(page).len() - 1
    }
}

/// UI state that sits around the onboarding form
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub focus: FormFocus,
    /// Index into [`PageButton::row`] for the current page
    pub selected_button: usize,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    errors: VecDeque<String>,
}

impl AppState {
    /// Put focus back on the input with the forward button preselected.
    /// Called whenever the page changes.
    pub fn reset_focus(&mut self, page: OnboardingPage) {
        self.focus = FormFocus::Input;
        self.selected_button = PageButton::primary_index(page);
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    pub fn next_button(&mut self, page: OnboardingPage) {
        let count = PageButton::row(page).len();
        self.selected_button = (self.selected_button + 1) % count;
    }

    pub fn prev_button(&mut self, page: OnboardingPage) {
        let count = PageButton::row(page).len();
        if self.selected_button == 0 {
            self.selected_button = count - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    pub fn selected(&self, page: OnboardingPage) -> Option<PageButton> {
        PageButton::row(page).get(self.selected_button).copied()
    }

    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod buttons {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_rows_per_page() {
            assert_eq!(
                PageButton::row(OnboardingPage::FirstName),
                &[PageButton::Next]
            );
            assert_eq!(
                PageButton::row(OnboardingPage::LastName),
                &[PageButton::Back, PageButton::Next]
            );
            assert_eq!(
                PageButton::row(OnboardingPage::Email),
                &[PageButton::Back, PageButton::Submit]
            );
        }

        #[test]
        fn test_primary_is_rightmost() {
            for page in OnboardingPage::ALL {
                let row = PageButton::row(page);
                assert_eq!(row[PageButton::primary_index(page)], PageButton::primary(page));
            }
        }

        #[test]
        fn test_labels() {
            assert_eq!(PageButton::Back.label(), "Back");
            assert_eq!(PageButton::Next.label(), "Next");
            assert_eq!(PageButton::Submit.label(), "Submit");
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_focus_is_input() {
            let state = AppState::default();
            assert_eq!(state.focus, FormFocus::Input);
        }

        #[test]
        fn test_toggle() {
            let mut state = AppState::default();
            state.toggle_focus();
            assert_eq!(state.focus, FormFocus::Buttons);
            state.toggle_focus();
            assert_eq!(state.focus, FormFocus::Input);
        }

        #[test]
        fn test_reset_focus_selects_primary() {
            let mut state = AppState::default();
            state.focus = FormFocus::Buttons;
            state.selected_button = 0;
            state.reset_focus(OnboardingPage::Email);
            assert_eq!(state.focus, FormFocus::Input);
            assert_eq!(
                state.selected(OnboardingPage::Email),
                Some(PageButton::Submit)
            );
        }

        #[test]
        fn test_next_button_wraps() {
            let mut state = AppState::default();
            state.reset_focus(OnboardingPage::LastName);
            state.next_button(OnboardingPage::LastName);
            assert_eq!(
                state.selected(OnboardingPage::LastName),
                Some(PageButton::Back)
            );
        }

        #[test]
        fn test_prev_button_wraps() {
            let mut state = AppState::default();
            state.selected_button = 0;
            state.prev_button(OnboardingPage::Email);
            assert_eq!(
                state.selected(OnboardingPage::Email),
                Some(PageButton::Submit)
            );
        }

        #[test]
        fn test_single_button_row_stays_put() {
            let mut state = AppState::default();
            state.reset_focus(OnboardingPage::FirstName);
            state.next_button(OnboardingPage::FirstName);
            assert_eq!(state.selected_button, 0);
            state.prev_button(OnboardingPage::FirstName);
            assert_eq!(state.selected_button, 0);
        }
    }

    mod errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_queue_is_fifo() {
            let mut state = AppState::default();
            assert!(!state.has_errors());
            state.push_error("first".to_string());
            state.push_error("second".to_string());
            assert_eq!(state.current_error(), Some("first"));
            state.dismiss_error();
            assert_eq!(state.current_error(), Some("second"));
            state.dismiss_error();
            assert!(!state.has_errors());
        }

        #[test]
        fn test_dismiss_on_empty_is_noop() {
            let mut state = AppState::default();
            state.dismiss_error();
            assert!(state.current_error().is_none());
        }
    }
}
