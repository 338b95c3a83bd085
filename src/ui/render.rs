use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{content_rect, layout_regions};
use crate::ui::welcome::draw_welcome;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::widget(app.welcome()), header);
    frame.render_widget(Clear, body);
    draw_welcome(frame, content_rect(body), app.welcome());
    frame.render_widget(Footer::widget(footer), footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_welcome_screen() {
        let app = App::new("https://example.com/signup");
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
        terminal.draw(|frame| draw(frame, &app)).expect("draw");
        let text = screen_text(&terminal);
        assert!(text.contains("Get Started for Free"));
        assert!(text.contains("Ctrl+Q: Quit"));
    }

    #[test]
    fn survives_tiny_terminal() {
        let app = App::new("https://example.com/signup");
        let mut terminal = Terminal::new(TestBackend::new(8, 3)).expect("terminal");
        terminal.draw(|frame| draw(frame, &app)).expect("draw");
    }
}
