fn main() {
    if let Err(e) = claude_sessions::cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
