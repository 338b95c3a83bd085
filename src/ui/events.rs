use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::ui::commands::HostEvent;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    /// Outcome of a `UiCommand` run by the command worker.
    Host(HostEvent),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                let forwarded = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                        Ok(Event::Paste(text)) => event_tx.send(AppEvent::Paste(text)),
                        // Resize is picked up by the next draw.
                        Ok(_) => Ok(()),
                        Err(err) => {
                            tracing::error!(error = %err, "terminal read failed");
                            break;
                        }
                    },
                    Ok(false) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "terminal poll failed");
                        break;
                    }
                };
                // UI loop has gone away.
                if forwarded.is_err() {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
