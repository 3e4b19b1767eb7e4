slint::include_modules!();

mod config;
mod error;
mod file_utils;
mod image_cache;
mod image_loader;
mod services;
mod session;
mod startup;
mod state;
mod ui;

use clap::Parser;
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let args = startup::Args::parse();
    let directory = match startup::resolve_directory(args.directory.clone()) {
        Ok(directory) => directory,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let app = AppWindow::new()?;
    app.global::<ViewState>().set_status_text(config::KEY_HINTS.into());

    let display = ui::SlintDisplay::new(app.as_weak());
    let session = session::BrowserSession::open(&directory, args.settings(), display)?;

    // Setup all UI event handlers
    ui::setup_handlers(&app, Rc::new(RefCell::new(session)));

    app.run()?;

    Ok(())
}
