#![forbid(unsafe_code)]

fn main() {
    unispect_cli::logging::init();
    if let Err(error) = unispect_cli::run_from_env() {
        eprintln!("{error}");
        std::process::exit(error.exit_code());
    }
}
