mod config;
mod display;
mod evaluator;
mod settings;
mod state;
mod ui;

use gtk::prelude::*;
use gtk::{glib, gio, Application};

const APP_ID: &str = "com.keypad.calculator";

fn main() -> glib::ExitCode {
    // Load configuration
    let config = config::Config::load().unwrap_or_default();

    // Create application - NON_UNIQUE for reliable startup
    let app = Application::builder()
        .application_id(APP_ID)
        .flags(gio::ApplicationFlags::NON_UNIQUE)
        .build();

    app.connect_activate(move |app| {
        // Check if window already exists
        if let Some(window) = app.active_window() {
            window.present();
            return;
        }

        ui::build_ui(app, config.clone());
    });

    app.run()
}
