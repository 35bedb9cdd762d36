use std::process::ExitCode;

fn main() -> ExitCode {
    match autotrain_client::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
