//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = lastmile_cli::run() {
        eprintln!("lastmile: {err}");
        std::process::exit(1);
    }
}
