//! Page indicator dots

use super::button::ACCENT;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build the indicator line, highlighting `current` out of `count` pages
pub fn indicator_line(current: usize, count: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(count * 2);
    for idx in 0..count {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        if idx == current {
            spans.push(Span::styled("●", Style::default().fg(ACCENT)));
        } else {
            spans.push(Span::styled("○", Style::default().fg(Color::Gray)));
        }
    }
    Line::from(spans)
}

pub fn render_page_indicator(frame: &mut Frame, area: Rect, current: usize, count: usize) {
    let paragraph = Paragraph::new(indicator_line(current, count)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_highlights_current_page() {
        assert_eq!(text(&indicator_line(0, 3)), "●  ○  ○");
        assert_eq!(text(&indicator_line(1, 3)), "○  ●  ○");
        assert_eq!(text(&indicator_line(2, 3)), "○  ○  ●");
    }

    #[test]
    fn test_out_of_range_highlights_nothing() {
        assert_eq!(text(&indicator_line(5, 2)), "○  ○");
    }
}
