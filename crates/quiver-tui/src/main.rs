//! quiver-tui - terminal viewer for the vector diagram.

fn main() {
    if let Err(e) = quiver_tui::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
