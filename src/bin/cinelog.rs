//! Cinelog CLI Binary
//!
//! Loads configuration, initializes logging, and runs the interactive menu.

use clap::Parser;
use cinelog::config::AppConfig;
use cinelog::logging::init_logging;
use cinelog::tooling::cli::{apply_logging_overrides, Cli, MenuApp};
use std::process;

fn main() {
    let cli = Cli::parse();

    let mut config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };
    apply_logging_overrides(&mut config, &cli);

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    let app = match MenuApp::new(&cli, &config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error opening movie store: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = app.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
