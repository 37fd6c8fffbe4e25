//! Line-by-line command loop

use std::io::BufRead;

use anyhow::{Context, Result};

use super::output::Output;
use crate::session::Session;

/// Name the tracker introduces itself with
pub const BOT_NAME: &str = "Wowo";

/// Feeds each input line to the session until `bye` or end of input
pub fn run<R: BufRead>(session: &mut Session, input: R, output: &Output) -> Result<()> {
    if let Some(warning) = session.take_warning() {
        output.warning(&warning);
    }
    output.greeting(BOT_NAME);

    for (line_no, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read input line {}", line_no + 1))?;

        let response = session.handle(&line);
        if response.is_empty() {
            continue;
        }

        output.response(&response);
        if response.is_exit() {
            return Ok(());
        }
    }

    output.verbose_ctx("repl", "End of input");
    Ok(())
}
