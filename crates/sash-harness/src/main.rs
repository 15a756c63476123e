#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = sash_harness::cli::run_from_env() {
        eprintln!("sash-replay: {error}");
        std::process::exit(error.exit_code());
    }
}
