//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    wanderlist_cli::init_logging();
    if let Err(err) = wanderlist_cli::run() {
        eprintln!("wanderlist: {err}");
        std::process::exit(1);
    }
}
