//! ffcal main entrypoint.

use ffcal::run;
use ffcal::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
