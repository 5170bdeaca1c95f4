//! UI module for rendering the TUI

mod components;
mod layout;
mod onboarding;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, body_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, &app.title);
    onboarding::draw(frame, body_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Error dialog overlays everything else
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}
