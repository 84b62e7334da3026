//! bikeshare main entrypoint.

use bikeshare::run;
use bikeshare::ui::messages::error;

fn main() {
    env_logger::init();

    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
