use crate::config::Config;
use gtk::prelude::*;
use gtk::{Application, Box as GtkBox, Button, CheckButton, Entry, Label, SpinButton, Window};
use std::sync::{Arc, Mutex};

pub struct SettingsWindow;

impl SettingsWindow {
    pub fn open(app: &Application, config: Arc<Mutex<Config>>) {
        // Check if settings window already exists
        if let Some(existing_window) = app.windows().iter().find(|w| {
            w.title().as_ref().map(|s| s.as_str()) == Some("Calculator Settings")
        }) {
            existing_window.present();
            return;
        }

        let window = Window::builder()
            .application(app)
            .title("Calculator Settings")
            .default_width(420)
            .default_height(480)
            .resizable(true)
            .build();

        let main_box = GtkBox::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(12)
            .margin_start(20)
            .margin_end(20)
            .margin_top(20)
            .margin_bottom(20)
            .build();

        // Theme Section
        let theme_label = Label::new(Some("<b>Theme</b>"));
        theme_label.set_use_markup(true);
        theme_label.set_halign(gtk::Align::Start);
        main_box.append(&theme_label);

        let bg_entry = color_row(&main_box, "Background Color:", |c| {
            c.theme.background_color.clone()
        }, &config);
        let text_entry = color_row(&main_box, "Text Color:", |c| {
            c.theme.text_color.clone()
        }, &config);
        let accent_entry = color_row(&main_box, "Equals Key Color:", |c| {
            c.theme.accent_color.clone()
        }, &config);
        let operator_entry = color_row(&main_box, "Operator Key Color:", |c| {
            c.theme.operator_color.clone()
        }, &config);

        // Font Size
        let font_box = GtkBox::builder()
            .orientation(gtk::Orientation::Horizontal)
            .spacing(10)
            .build();
        let font_label = Label::new(Some("Font Size:"));
        font_label.set_halign(gtk::Align::Start);
        let font_spin = SpinButton::with_range(8.0, 32.0, 1.0);
        {
            let config_guard = config.lock().unwrap();
            font_spin.set_value(config_guard.theme.font_size as f64);
        }
        font_box.append(&font_label);
        font_box.append(&font_spin);
        main_box.append(&font_box);

        // Display Section
        let display_label = Label::new(Some("<b>Display</b>"));
        display_label.set_use_markup(true);
        display_label.set_halign(gtk::Align::Start);
        display_label.set_margin_top(12);
        main_box.append(&display_label);

        let grouping_check = CheckButton::with_label("Group thousands with commas");
        {
            let config_guard = config.lock().unwrap();
            grouping_check.set_active(config_guard.display.group_thousands);
        }
        main_box.append(&grouping_check);

        let restart_note = Label::new(Some("Changes apply after restarting the calculator."));
        restart_note.set_halign(gtk::Align::Start);
        restart_note.set_margin_top(8);
        main_box.append(&restart_note);

        // Buttons
        let button_box = GtkBox::builder()
            .orientation(gtk::Orientation::Horizontal)
            .spacing(10)
            .halign(gtk::Align::End)
            .margin_top(12)
            .build();

        let save_button = Button::with_label("Save");
        let cancel_button = Button::with_label("Cancel");

        // Clone widgets for closure
        let bg_entry_clone = bg_entry.clone();
        let text_entry_clone = text_entry.clone();
        let accent_entry_clone = accent_entry.clone();
        let operator_entry_clone = operator_entry.clone();
        let font_spin_clone = font_spin.clone();
        let grouping_check_clone = grouping_check.clone();

        let window_clone = window.clone();
        let config_clone = config.clone();
        save_button.connect_clicked(move |_| {
            let mut config_guard = config_clone.lock().unwrap();

            config_guard.theme.background_color = bg_entry_clone.text().to_string();
            config_guard.theme.text_color = text_entry_clone.text().to_string();
            config_guard.theme.accent_color = accent_entry_clone.text().to_string();
            config_guard.theme.operator_color = operator_entry_clone.text().to_string();
            config_guard.theme.font_size = font_spin_clone.value() as i32;
            config_guard.display.group_thousands = grouping_check_clone.is_active();

            if let Err(e) = config_guard.save() {
                eprintln!("Error saving config: {}", e);
            }

            window_clone.close();
        });

        let window_clone2 = window.clone();
        cancel_button.connect_clicked(move |_| {
            window_clone2.close();
        });

        button_box.append(&cancel_button);
        button_box.append(&save_button);
        main_box.append(&button_box);

        window.set_child(Some(&main_box));
        window.present();
    }
}

fn color_row(
    parent: &GtkBox,
    title: &str,
    read: impl Fn(&Config) -> String,
    config: &Arc<Mutex<Config>>,
) -> Entry {
    let row = GtkBox::builder()
        .orientation(gtk::Orientation::Horizontal)
        .spacing(10)
        .build();
    let label = Label::new(Some(title));
    label.set_halign(gtk::Align::Start);
    let entry = Entry::new();
    {
        let config_guard = config.lock().unwrap();
        entry.set_text(&read(&config_guard));
    }
    row.append(&label);
    row.append(&entry);
    parent.append(&row);
    entry
}
