//! Wowo - a grumpy personal task tracker

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = wowo::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
