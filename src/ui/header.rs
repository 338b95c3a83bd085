use crate::ui::theme::{ACCENT, BORDER, MUTED, STATUS_OK, TEXT};
use crate::ui::welcome::WelcomeState;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar with a one-word indicator of outstanding host calls.
pub struct Header;

impl Header {
    pub fn widget(state: &WelcomeState) -> Paragraph<'static> {
        let busy = state.login.is_in_flight()
            || state.token_submission.is_in_flight()
            || state.manual_submission.is_in_flight();
        let (status, status_style) = if busy {
            ("saving", Style::default().fg(ACCENT))
        } else {
            ("ready", Style::default().fg(STATUS_OK))
        };
        let line = Line::from(vec![
            Span::styled("  firstrun", Style::default().fg(TEXT).add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", Style::default().fg(MUTED)),
            Span::styled("Setup", Style::default().fg(TEXT)),
            Span::styled("  │  ", Style::default().fg(MUTED)),
            Span::styled(status, status_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(BORDER)),
        )
    }
}
