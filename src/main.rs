fn main() {
    // No CLI surface: launching always opens the single window
    if let Err(e) = jot::tui::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
