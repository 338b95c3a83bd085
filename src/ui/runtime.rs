use crate::clipboard::ClipboardHandler;
use crate::ipc::HostServices;
use crate::ui::app::App;
use crate::ui::commands::run_command_worker;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

const TICK_RATE: Duration = Duration::from_millis(250);
const UI_COMMAND_BUFFER: usize = 16;

/// Run the welcome screen on the current thread until the user quits.
/// Host calls run on `runtime`.
pub fn run(signup_url: &str, host: Arc<dyn HostServices>, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE);

    let (command_tx, command_rx) = mpsc::channel(UI_COMMAND_BUFFER);
    runtime.spawn(run_command_worker(host, command_rx, events.sender()));

    let mut app = App::new(signup_url);
    app.set_command_sender(command_tx);
    app.load_configuration();

    let mut clipboard = match ClipboardHandler::new() {
        Ok(handler) => Some(handler),
        Err(err) => {
            tracing::debug!(error = %err, "clipboard unavailable");
            None
        }
    };

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => {
                if handle_key(&mut app, key) == InputAction::ClipboardPaste {
                    paste_from_clipboard(&mut app, clipboard.as_mut());
                }
            }
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Host(event)) => app.on_host_event(event),
            Ok(AppEvent::Tick) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Dropping the app closes the command channel and stops the worker.
    drop(app);
    drop(guard);
    Ok(())
}

fn paste_from_clipboard(app: &mut App, clipboard: Option<&mut ClipboardHandler>) {
    let Some(clipboard) = clipboard else {
        return;
    };
    match clipboard.get_text() {
        Ok(text) => app.on_paste(&text),
        Err(err) => tracing::warn!(error = %err, "clipboard paste failed"),
    }
}
