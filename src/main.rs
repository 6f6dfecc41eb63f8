//! Reports glyph outline nodes that sit close to, but not on, alignment zones.

use zonecheck::core;

fn main() {
    let cli_args = core::platform::get_cli_args();
    if let Err(error) = core::run_app(cli_args) {
        core::platform::handle_error(error);
    }
}
