use crate::ui::api_options::form_lines;
use crate::ui::theme::{ACCENT, BORDER, MUTED, TEXT};
use crate::ui::widgets::{button_line, field_line};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::state::{Focus, WelcomeState};

const INTRO: &str = "I can work through coding tasks with you: create and edit files, \
explore large projects, run terminal commands (with your permission, of course) \
and extend myself with new tools.";

const SIGNUP_HINT: &str = "Sign up for an account to get started for free, or use an API key \
from a provider you already have.";

pub fn welcome_lines(state: &WelcomeState) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Hi, welcome aboard",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(INTRO, Style::default().fg(TEXT))),
        Line::from(""),
        Line::from(Span::styled(SIGNUP_HINT, Style::default().fg(MUTED))),
        Line::from(""),
    ];

    let login_label = if state.login.is_in_flight() {
        "Opening browser..."
    } else {
        "Get Started for Free"
    };
    lines.push(button_line(
        login_label,
        state.focus == Focus::GetStarted,
        !state.login.is_in_flight(),
    ));

    if state.is_token_entry_visible() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Enter the token shown on the sign-in page:",
            Style::default().fg(TEXT),
        )));
        lines.push(field_line(
            "Token",
            &state.token_input,
            "Paste your token here",
            state.focus == Focus::TokenField,
        ));
        let submit_label = if state.token_submission.is_in_flight() {
            "Submitting..."
        } else {
            "Submit Token"
        };
        lines.push(button_line(
            submit_label,
            state.focus == Focus::SubmitToken,
            state.token_submit_enabled(),
        ));
    }

    lines.push(Line::from(""));
    if state.api_options_visible {
        lines.extend(form_lines(state));
    } else {
        lines.push(button_line(
            "Use your own API key",
            state.focus == Focus::UseOwnKey,
            true,
        ));
    }
    lines
}

pub fn draw_welcome(frame: &mut Frame<'_>, area: Rect, state: &WelcomeState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER));
    let widget = Paragraph::new(welcome_lines(state))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}
