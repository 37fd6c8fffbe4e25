//! Full-screen chat front-end
//!
//! Shows the conversation with the session and an input line. Every submitted
//! line goes through [`Session::handle`], exactly like the REPL.

mod app;
mod event;
mod ui;

use std::panic::{self, AssertUnwindSafe};

use anyhow::{anyhow, Result};

use super::Output;
use crate::session::Session;
use app::App;
use event::EventHandler;

/// Launch the TUI
pub fn run(session: Session, output: &Output) -> Result<()> {
    output.verbose_ctx("tui", "Initializing TUI application");

    let mut terminal = ui::init_terminal()?;
    let mut app = App::new(session);
    let events = EventHandler::new(250);

    // Restore the terminal even if the app panics
    let result = panic::catch_unwind(AssertUnwindSafe(|| app.run(&mut terminal, events)));

    let restore_result = ui::restore_terminal();

    match result {
        Ok(inner_result) => {
            restore_result?;
            inner_result
        }
        Err(panic_payload) => {
            let _ = restore_result;
            if let Some(s) = panic_payload.downcast_ref::<&str>() {
                Err(anyhow!("TUI panicked: {}", s))
            } else if let Some(s) = panic_payload.downcast_ref::<String>() {
                Err(anyhow!("TUI panicked: {}", s))
            } else {
                Err(anyhow!("TUI panicked with unknown error"))
            }
        }
    }
}
