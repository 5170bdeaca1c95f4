//! Error dialog overlay

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

const MAX_WIDTH: u16 = 60;

/// Center a box of at most `width` x `height` inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn char_width(s: &str) -> u16 {
    u16::try_from(s.chars().count()).unwrap_or(u16::MAX)
}

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, message: &str) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" or "),
        Span::styled("Esc", key),
        Span::raw(" to dismiss"),
    ]);

    // borders (2) + padding (2)
    let inner_width = MAX_WIDTH - 4;
    let message_rows = message
        .split('\n')
        .map(|l| char_width(l).div_ceil(inner_width).max(1))
        .fold(0u16, u16::saturating_add);
    // borders, blank line, message, blank line, hint
    let height = message_rows.saturating_add(5);
    let width = char_width(message).saturating_add(6).clamp(34, MAX_WIDTH);

    let area = centered_rect(frame.area(), width, height);
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    lines.extend(message.split('\n').map(|l| Line::from(l.to_string())));
    lines.push(Line::from(""));
    lines.push(hint);

    let dialog = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    " Error ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .padding(Padding::horizontal(1)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(area, 40, 10), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_char_width_saturates() {
        assert_eq!(char_width("José"), 4);
        assert_eq!(char_width(&"x".repeat(70_000)), u16::MAX);
    }

    #[test]
    fn test_oversized_message_renders() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut message = "x".repeat(70_000);
        message.push_str(&"\n".repeat(70_000));
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_error_dialog(frame, &message))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let top = buffer.content()[..80]
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        assert!(top.contains("Error"));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_rect(area, 60, 10), Rect::new(0, 0, 20, 5));
    }
}
