//! Onboarding page rendering
//!
//! The visible page is a pure function of the controller's current page; there
//! is no separate pager to keep in sync.

use super::components::{
    draw_field, render_button, render_page_indicator, BUTTON_HEIGHT, FIELD_HEIGHT,
};
use crate::app::App;
use crate::state::{FormFocus, OnboardingPage, PageButton};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the current page: step line, input, hint, indicator and buttons
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Top padding (flex)
            Constraint::Length(1),             // Step
            Constraint::Length(FIELD_HEIGHT),  // Input
            Constraint::Length(1),             // Validation hint
            Constraint::Min(0),                // Spacer (flex)
            Constraint::Length(1),             // Page indicator
            Constraint::Length(1),             // Gap
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(1),             // Bottom padding
        ])
        .margin(1)
        .split(area);

    let page = app.page();

    let step = Paragraph::new(Line::from(Span::styled(
        format!(
            "Step {} of {}: {}",
            page.index() + 1,
            OnboardingPage::ALL.len(),
            page.label()
        ),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(step, chunks[1]);

    draw_field(
        frame,
        chunks[2],
        app.form.active_field(),
        app.state.focus == FormFocus::Input,
    );

    if let Some(hint) = validation_hint(app) {
        let hint = Paragraph::new(Span::styled(hint, Style::default().fg(Color::Red)));
        frame.render_widget(hint, chunks[3]);
    }

    render_page_indicator(frame, chunks[5], page.index(), OnboardingPage::ALL.len());

    draw_buttons(frame, chunks[7], app);
}

/// Explain why the forward button is disabled, once the user typed something
fn validation_hint(app: &App) -> Option<&'static str> {
    if app.form.active_value().is_empty() || app.form.is_active_valid() {
        return None;
    }
    Some(match app.page() {
        OnboardingPage::FirstName | OnboardingPage::LastName => "Use letters A-Z only",
        OnboardingPage::Email => "Enter a valid email address",
    })
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let page = app.page();
    let row = PageButton::row(page);
    let constraints = vec![Constraint::Ratio(1, row.len() as u32); row.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let buttons_focused = app.state.focus == FormFocus::Buttons;
    for (idx, button) in row.iter().enumerate() {
        render_button(
            frame,
            cells[idx],
            button.label(),
            buttons_focused && app.state.selected_button == idx,
            app.is_button_enabled(*button),
        );
    }
}
