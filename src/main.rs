use std::env;
use std::process;

use synabout::config;
use synabout::display;
use synabout::utils::command::spawn_detached;

fn main() {
    config::ensure_user_config_exists();
    let config = config::load_config().unwrap_or_else(|err| {
        eprintln!("Warning: {}; using built-in configuration", err);
        config::default_config()
    });

    // The panel's "More Info..." action: hand off to the full system
    // information tool and get out of the way.
    if env::args().skip(1).any(|arg| arg == "--more-info") {
        let program = config
            .display
            .more_info_command
            .as_deref()
            .unwrap_or("kinfocenter");
        if let Err(err) = spawn_detached(program) {
            eprintln!("Failed to launch {}: {}", program, err);
            process::exit(1);
        }
        return;
    }

    let info = synabout::collect_about_info();
    display::render_output(&config, &info);
}
