//! Outfit CLI - dependency provisioning for development machines

use std::process::ExitCode;

fn main() -> ExitCode {
    match outfit::cli::run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
