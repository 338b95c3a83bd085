use crate::ui::theme::{BORDER, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " Tab: Next │ Enter: Select │ ←/→: Provider │ Ctrl+V: Paste │ Ctrl+Q: Quit";

pub struct Footer;

impl Footer {
    pub fn widget(area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Padding by char count, not byte count.
        let hints_width = HINTS.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER)),
            )
    }
}
