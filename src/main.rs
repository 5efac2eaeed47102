fn main() {
    if let Err(e) = tx_history_synth::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
