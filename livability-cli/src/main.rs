//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = livability_cli::run() {
        eprintln!("livability: {err}");
        std::process::exit(1);
    }
}
