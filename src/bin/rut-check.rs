use std::process::ExitCode;

fn main() -> ExitCode {
    match rut_validator::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
