//! golfimport main entrypoint.

use golfimport::run;
use golfimport::utils::logging::init_tracing;

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
