use crate::config::{mask_for_display, CredentialField};
use crate::ui::theme::{ACCENT, FOCUS_HIGHLIGHT, STATUS_ERROR, STATUS_OK};
use crate::ui::welcome::{Focus, WelcomeState};
use crate::ui::widgets::{button_line, field_line};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Lines of the credential form: provider selector, the selected provider's
/// fields, the validation message and the submit button.
pub fn form_lines(state: &WelcomeState) -> Vec<Line<'static>> {
    let configuration = state.api_configuration();
    let provider = configuration.map(|c| c.api_provider).unwrap_or_default();

    let mut lines = vec![Line::from(vec![
        Span::raw("  API Provider: "),
        Span::styled(
            format!("◀ {} ▶", provider.display_name()),
            if state.focus == Focus::Provider {
                Style::default().fg(ACCENT).bg(FOCUS_HIGHLIGHT)
            } else {
                Style::default().fg(ACCENT)
            },
        ),
    ])];

    for field in CredentialField::for_provider(provider) {
        let raw = configuration
            .and_then(|c| c.field(*field))
            .unwrap_or_default();
        let shown = if field.is_secret() {
            mask_for_display(raw)
        } else {
            raw.to_string()
        };
        lines.push(field_line(
            field.label(),
            &shown,
            "Enter value...",
            state.focus == Focus::Field(*field),
        ));
    }

    lines.push(Line::from(""));
    match (&state.validation, state.manual_submit_enabled()) {
        (Some(message), _) => lines.push(Line::from(Span::styled(
            format!("  {message}"),
            Style::default().fg(STATUS_ERROR),
        ))),
        (None, true) => lines.push(Line::from(Span::styled(
            "  Ready.",
            Style::default().fg(STATUS_OK),
        ))),
        (None, false) => {}
    }
    lines.push(button_line(
        "Let's go!",
        state.focus == Focus::LetsGo,
        state.manual_submit_enabled(),
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfiguration, ApiProvider};
    use crate::ui::mvi::Versioned;

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn secrets_are_masked() {
        let config = ApiConfiguration::default()
            .with_provider(ApiProvider::Anthropic)
            .with_field(CredentialField::ApiKey, "sk-ant-0123456789abcd");
        let state = WelcomeState {
            configuration: Some(Versioned::initial(config)),
            api_options_visible: true,
            ..Default::default()
        };
        let rendered = text(&form_lines(&state));
        assert!(!rendered.contains("sk-ant"));
        assert!(rendered.contains("abcd"));
    }

    #[test]
    fn validation_message_is_shown() {
        let state = WelcomeState {
            configuration: Some(Versioned::initial(ApiConfiguration::default())),
            validation: Some("You must choose a region to use with AWS Bedrock.".into()),
            validated_version: Some(1),
            api_options_visible: true,
            ..Default::default()
        };
        assert!(text(&form_lines(&state)).contains("AWS Bedrock"));
    }
}
