//! Application state and core logic

use crate::intake::{OnboardingOutcome, Profile};
use crate::state::{AppState, FormFocus, OnboardingController, OnboardingPage, PageButton, Step};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Focus, button selection and messages
    pub state: AppState,
    /// The onboarding form being filled in
    pub form: OnboardingController,
    /// Header text
    pub title: String,
    /// Profile stored once onboarding completes
    pub profile: Option<Profile>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(form: OnboardingController, title: impl Into<String>) -> Self {
        let mut state = AppState::default();
        state.reset_focus(form.page());

        Self {
            state,
            form,
            title: title.into(),
            profile: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Whether pressing `button` on the current page would do anything
    pub fn is_button_enabled(&self, button: PageButton) -> bool {
        match button {
            PageButton::Back => self.form.can_retreat(),
            PageButton::Next => self.form.can_advance(),
            PageButton::Submit => self.form.can_submit(),
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => self.state.toggle_focus(),
            KeyCode::Esc => {
                let step = self.form.retreat();
                self.after_step(step);
            }
            _ => match self.state.focus {
                FormFocus::Input => self.handle_input_key(key),
                FormFocus::Buttons => self.handle_buttons_key(key),
            },
        }
        Ok(())
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let command =
            key.modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);

        match key.code {
            KeyCode::Char('v') if key.modifiers.contains(crate::platform::PASTE_MODIFIER) => {
                self.paste_clipboard();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.active_field_mut().clear();
            }
            KeyCode::Char(c) if !command => self.form.active_field_mut().push_char(c),
            KeyCode::Backspace => self.form.active_field_mut().pop_char(),
            KeyCode::Enter => self.press(PageButton::primary(self.form.page())),
            _ => {}
        }
    }

    fn handle_buttons_key(&mut self, key: KeyEvent) {
        let page = self.form.page();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.prev_button(page),
            KeyCode::Right | KeyCode::Char('l') => self.state.next_button(page),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(button) = self.state.selected(page) {
                    self.press(button);
                }
            }
            _ => {}
        }
    }

    /// Trigger a page button; disabled buttons are no-ops
    fn press(&mut self, button: PageButton) {
        if !self.is_button_enabled(button) {
            tracing::debug!(?button, page = ?self.form.page(), "button disabled");
            return;
        }

        let step = match button {
            PageButton::Back => self.form.retreat(),
            PageButton::Next => self.form.advance(),
            PageButton::Submit => self.form.submit(),
        };
        self.after_step(step);
    }

    fn after_step(&mut self, step: Step) {
        if step.changed {
            self.state.reset_focus(step.page);
        }
        if step.record.is_some() {
            self.state.status_message = Some("Submitting...".to_string());
        }
    }

    /// Tell the user that submitting replaces a profile saved earlier
    pub fn note_existing_profile(&mut self, existing: &Profile) {
        self.state.status_message = Some(format!(
            "Submitting replaces the saved profile for {}",
            existing.display_name()
        ));
    }

    /// Handle text pasted through the terminal
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_errors() || self.state.focus != FormFocus::Input {
            return;
        }
        self.insert_text(text);
    }

    /// Append text to the field on the current page
    pub fn insert_text(&mut self, text: &str) {
        self.form.active_field_mut().push_str(text);
    }

    fn paste_clipboard(&mut self) {
        match read_clipboard() {
            Ok(text) => self.insert_text(&text),
            Err(err) => {
                tracing::warn!("clipboard unavailable: {err:#}");
                self.state.status_message = Some("Clipboard unavailable".to_string());
            }
        }
    }

    /// React to the intake side finishing (or failing) a submission
    pub fn handle_outcome(&mut self, outcome: OnboardingOutcome) {
        match outcome {
            OnboardingOutcome::Completed(profile) => {
                self.state.status_message = Some(format!("Welcome, {}!", profile.first_name));
                self.profile = Some(profile);
                self.quit();
            }
            OnboardingOutcome::Failed(message) => {
                self.state.status_message = None;
                self.push_error(message);
            }
        }
    }

    pub fn page(&self) -> OnboardingPage {
        self.form.page()
    }
}

fn read_clipboard() -> Result<String> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    Ok(clipboard.get_text()?)
}
