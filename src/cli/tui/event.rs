//! Event handling for the TUI

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Terminal events the chat cares about
#[derive(Debug)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Terminal resized; the next draw picks up the new size
    Resize,
}

/// Reads terminal events on a background thread
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Starts the reader thread, polling every `poll_ms` milliseconds
    pub fn new(poll_ms: u64) -> Self {
        let poll_rate = Duration::from_millis(poll_ms);
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            if !event::poll(poll_rate).unwrap_or(false) {
                continue;
            }

            let sent = match event::read() {
                // Only key presses, not releases
                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    tx.send(Event::Key(key))
                }
                Ok(CrosstermEvent::Resize(_, _)) => tx.send(Event::Resize),
                _ => Ok(()),
            };

            if sent.is_err() {
                break;
            }
        });

        Self { rx }
    }

    /// Receive the next event (blocking)
    pub fn next(&self) -> Result<Event> {
        Ok(self.rx.recv()?)
    }
}
