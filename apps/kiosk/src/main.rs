//! # Santorini Kiosk Entry Point
//!
//! Starts the booking/payment shell. The actual setup is in lib.rs for
//! better testability.

fn main() {
    if let Err(e) = santorini_kiosk::run() {
        eprintln!("kiosk error: {e}");
        std::process::exit(1);
    }
}
