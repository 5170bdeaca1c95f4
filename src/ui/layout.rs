//! Layout components (header, body column, status bar)

use crate::app::App;
use crate::platform::PASTE_SHORTCUT;
use crate::state::{FormFocus, OnboardingPage};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header height in rows
const HEADER_HEIGHT: u16 = 3;
/// Widest the form column gets
const BODY_MAX_WIDTH: u16 = 56;

/// Split the screen into header, body and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Form
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], center_column(chunks[1]), chunks[2])
}

/// Horizontally center a column no wider than `BODY_MAX_WIDTH`
fn center_column(area: Rect) -> Rect {
    let width = area.width.min(BODY_MAX_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Draw the header bar with the application title
pub fn draw_header(frame: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", get_hints(app.page(), app.state.focus)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the current page and focus
fn get_hints(page: OnboardingPage, focus: FormFocus) -> String {
    let forward = if page.is_last() {
        "Enter:submit"
    } else {
        "Enter:next"
    };
    let back = if page == OnboardingPage::FirstName {
        ""
    } else {
        "  Esc:back"
    };
    match focus {
        FormFocus::Input => format!(
            "{forward}{back}  Tab:buttons  {PASTE_SHORTCUT}:paste  ^C:quit"
        ),
        FormFocus::Buttons => format!("←/→:select  Enter:press{back}  Tab:input  ^C:quit"),
    }
}
