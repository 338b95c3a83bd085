//! Line builders shared by the welcome view and the credential form.

use crate::ui::theme::{ACCENT, FOCUS_HIGHLIGHT, MUTED, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub fn button_line(label: &str, focused: bool, enabled: bool) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let mut style = if enabled {
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED).add_modifier(Modifier::DIM)
    };
    if focused {
        style = style.bg(FOCUS_HIGHLIGHT);
    }
    Line::from(vec![
        Span::styled(marker, Style::default().fg(ACCENT)),
        Span::styled(format!("[ {label} ]"), style),
    ])
}

pub fn field_line(label: &str, value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let (text, text_style) = if value.is_empty() {
        (placeholder.to_string(), Style::default().fg(MUTED))
    } else {
        (value.to_string(), Style::default().fg(TEXT))
    };
    let mut value_style = text_style;
    if focused {
        value_style = value_style.bg(FOCUS_HIGHLIGHT);
    }
    let cursor = if focused { "▏" } else { "" };
    Line::from(vec![
        Span::styled(format!("  {label}: "), Style::default().fg(MUTED)),
        Span::styled(text, value_style),
        Span::styled(cursor, Style::default().fg(ACCENT)),
    ])
}
