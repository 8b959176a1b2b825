//! Writes `final_interactive.html` into the working directory.

use std::process::ExitCode;

fn main() -> ExitCode {
    let _ = env_logger::try_init();

    match linefield::generate() {
        Ok(report) => {
            log::info!(
                "{} traces, {} layers",
                report.num_traces,
                report.bindings.len()
            );
            println!("Interactive visualization saved to {}", report.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("generation failed: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
