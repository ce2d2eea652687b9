use std::process::ExitCode;

fn main() -> ExitCode {
    tocgen::cli::run()
}
