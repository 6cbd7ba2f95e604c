use std::process::ExitCode;

fn main() -> ExitCode {
    // Failures are already logged by `app::run`; only the exit code is left.
    match score_pipeline::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(err.exit_code()),
    }
}
