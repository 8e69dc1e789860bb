//! shiftsheet main entrypoint.

use shiftsheet::run;
use shiftsheet::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
