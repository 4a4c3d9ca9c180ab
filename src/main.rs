mod app;
mod extensions;
mod ruleset;

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = app::run() {
        eprintln!("pushguard failed: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
