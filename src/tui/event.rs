//! Event handling for the TUI.
//!
//! A dedicated thread polls the terminal and forwards key, resize and
//! timer-tick events over a channel; the main loop blocks on the receiver.

use std::sync::mpsc::{self, Receiver, RecvError, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Timer tick; keeps the UI redrawing while idle.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize,
}

/// Polls the terminal on a background thread.
pub struct EventHandler {
    rx: Receiver<Event>,
    /// Kept alive so the channel does not close while the poller runs.
    _tx: Sender<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            // Windows terminals also deliver release events.
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                                Event::Key(key)
                            }
                            CrosstermEvent::Resize(_, _) => Event::Resize,
                            _ => continue,
                        };
                        if event_tx.send(event).is_err() {
                            break;
                        }
                    }
                } else if event_tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Blocks until the next event arrives.
    pub fn next(&self) -> Result<Event, RecvError> {
        self.rx.recv()
    }
}
