use std::process::ExitCode;

fn main() -> ExitCode {
    greenlane_cli::run()
}
