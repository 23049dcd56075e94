//! grifo main entrypoint.

use grifo::run;
use grifo::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
