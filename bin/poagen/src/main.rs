fn main() {
    if let Err(err) = poagen::cli::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
