//! Terminal demo: the alert review panel's sliders, driven by mouse and keyboard.
//!
//! Logs go to `rangeslider-demo.log` (see `RANGESLIDER_LOG` and
//! `RANGESLIDER_LOG_LEVEL`).

mod app;
mod config;
mod error;
mod terminal;

use std::fs::File;

use log::info;
use rangeslider::Event;
use simplelog::{Config, WriteLogger};

use crate::app::DemoApp;
use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::terminal::Terminal;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), DemoError> {
    let config = DemoConfig::from_env()?;

    let log_file = File::create(&config.log_path)?;
    WriteLogger::init(config.log_level, Config::default(), log_file)?;
    info!("Starting slider demo (log level {})", config.log_level);

    let mut app = DemoApp::new()?;
    let mut term = Terminal::new()?;

    while app.is_running() {
        term.draw(|buf| app.draw(buf))?;

        for raw in term.poll(config.tick)? {
            if let Some(event) = Event::from_crossterm(&raw) {
                app.handle(&event);
            }
        }
    }

    info!("Exiting with volume at {} ({})", app.volume(), app.status());
    Ok(())
}
