use crate::config::Config;
use crate::display;
use crate::settings::SettingsWindow;
use crate::state::{Action, CalculatorState, Operation};
use gtk::prelude::*;
use gtk::glib;
use gtk::gdk;
use gtk::{Application, Box as GtkBox, Button, EventControllerKey, Grid, Label, Window};
use std::sync::{Arc, Mutex};

pub fn build_ui(app: &Application, config: Config) {
    let state = Arc::new(Mutex::new(CalculatorState::default()));
    let config_arc = Arc::new(Mutex::new(config.clone()));
    let group_thousands = config.display.group_thousands;

    let window_width = config.theme.width;
    let window_height = window_width * 7 / 5;

    let window = Window::builder()
        .application(app)
        .title("Keypad Calculator")
        .default_width(window_width)
        .default_height(window_height)
        .resizable(false)
        .build();

    let main_box = GtkBox::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(0)
        .build();
    main_box.add_css_class("calculator-box");

    // Output panel: previous line over current line, both right-aligned.
    let output_box = GtkBox::builder()
        .orientation(gtk::Orientation::Vertical)
        .spacing(2)
        .build();
    output_box.add_css_class("output");

    let previous_label = Label::new(None);
    previous_label.set_xalign(1.0);
    previous_label.add_css_class("previous-operand");
    previous_label.set_ellipsize(gtk::pango::EllipsizeMode::Start);

    let current_label = Label::new(None);
    current_label.set_xalign(1.0);
    current_label.add_css_class("current-operand");
    current_label.set_ellipsize(gtk::pango::EllipsizeMode::Start);

    // Settings gear sits above the display, out of the keypad flow.
    let settings_button = Button::builder().label("⚙").has_frame(false).build();
    settings_button.add_css_class("settings-button");
    settings_button.set_halign(gtk::Align::End);
    let app_for_settings = app.clone();
    let config_clone = config_arc.clone();
    settings_button.connect_clicked(move |_| {
        SettingsWindow::open(&app_for_settings, config_clone.clone());
    });

    output_box.append(&settings_button);
    output_box.append(&previous_label);
    output_box.append(&current_label);

    // Keypad grid, same layout as a hardware calculator:
    //   AC AC DEL ÷
    //    1  2  3  *
    //    4  5  6  +
    //    7  8  9  -
    //    .  0  =  =
    let grid = Grid::new();
    grid.set_row_spacing(4);
    grid.set_column_spacing(4);
    grid.set_margin_start(8);
    grid.set_margin_end(8);
    grid.set_margin_top(8);
    grid.set_margin_bottom(8);
    grid.set_row_homogeneous(true);
    grid.set_column_homogeneous(true);
    grid.set_vexpand(true);

    let keypad: &[(&str, i32, i32, i32)] = &[
        // (label, column, row, width)
        ("AC", 0, 0, 2),
        ("DEL", 2, 0, 1),
        ("÷", 3, 0, 1),
        ("1", 0, 1, 1),
        ("2", 1, 1, 1),
        ("3", 2, 1, 1),
        ("*", 3, 1, 1),
        ("4", 0, 2, 1),
        ("5", 1, 2, 1),
        ("6", 2, 2, 1),
        ("+", 3, 2, 1),
        ("7", 0, 3, 1),
        ("8", 1, 3, 1),
        ("9", 2, 3, 1),
        ("-", 3, 3, 1),
        (".", 0, 4, 1),
        ("0", 1, 4, 1),
        ("=", 2, 4, 2),
    ];

    for &(label, column, row, width) in keypad {
        let Some(action) = action_for_label(label) else {
            eprintln!("No action for keypad label: {}", label);
            continue;
        };
        let button = Button::with_label(label);
        match label {
            "=" => button.add_css_class("equals-key"),
            "AC" | "DEL" => button.add_css_class("control-key"),
            _ if Operation::from_symbol(label).is_some() => {
                button.add_css_class("operator-key")
            }
            _ => button.add_css_class("digit-key"),
        }

        let state_clone = state.clone();
        let previous_clone = previous_label.clone();
        let current_clone = current_label.clone();
        button.connect_clicked(move |_| {
            dispatch(
                &state_clone,
                action.clone(),
                &previous_clone,
                &current_clone,
                group_thousands,
            );
        });

        grid.attach(&button, column, row, width, 1);
    }

    // Escape closes the window. Calculator input stays mouse-only.
    let key_controller = EventControllerKey::new();
    let window_clone = window.clone();
    key_controller.connect_key_pressed(move |_, keyval, _, _| {
        if keyval == gdk::Key::Escape {
            window_clone.close();
            glib::Propagation::Stop
        } else {
            glib::Propagation::Proceed
        }
    });
    window.add_controller(key_controller);

    apply_css(&config);

    main_box.append(&output_box);
    main_box.append(&grid);
    window.set_child(Some(&main_box));
    window.present();
}

fn action_for_label(label: &str) -> Option<Action> {
    match label {
        "AC" => Some(Action::Clear),
        "DEL" => Some(Action::DeleteDigit),
        "=" => Some(Action::Evaluate),
        _ => {
            if let Some(op) = Operation::from_symbol(label) {
                return Some(Action::ChooseOperation(op));
            }
            let mut chars = label.chars();
            match (chars.next(), chars.next()) {
                (Some(digit), None) if digit.is_ascii_digit() || digit == '.' => {
                    Some(Action::AddDigit(digit))
                }
                _ => None,
            }
        }
    }
}

// Every press replaces the single owned state with the reducer output and
// refreshes both display lines from it.
fn dispatch(
    state: &Arc<Mutex<CalculatorState>>,
    action: Action,
    previous_label: &Label,
    current_label: &Label,
    group_thousands: bool,
) {
    let mut state = state.lock().unwrap();
    *state = state.apply(action);
    previous_label.set_text(&display::previous_line(&state, group_thousands));
    current_label.set_text(&display::current_line(&state, group_thousands));
}

fn apply_css(config: &Config) {
    let css = format!(
        r#"
        window {{
            background-color: {};
        }}

        .calculator-box {{
            background-color: {};
        }}

        .output {{
            padding: 16px 12px 8px 12px;
        }}

        .previous-operand {{
            color: rgba(255, 255, 255, 0.5);
            font-size: {}pt;
        }}

        .current-operand {{
            color: {};
            font-size: {}pt;
            font-weight: 500;
        }}

        .settings-button {{
            color: rgba(255, 255, 255, 0.4);
            background: transparent;
            border: none;
            padding: 2px;
        }}

        button {{
            border-radius: 0px;
            border: 1px solid rgba(255, 255, 255, 0.08);
            font-size: {}pt;
            transition: background-color 0.15s ease;
        }}

        button.digit-key {{
            background-color: rgba(30, 30, 30, 0.9);
            color: {};
        }}

        button.digit-key:hover {{
            background-color: rgba(45, 45, 45, 0.9);
        }}

        button.operator-key {{
            background-color: rgba(25, 25, 25, 0.9);
            color: {};
        }}

        button.operator-key:hover {{
            background-color: rgba(40, 40, 40, 0.9);
        }}

        button.control-key {{
            background-color: rgba(20, 20, 20, 0.9);
            color: rgba(255, 255, 255, 0.7);
        }}

        button.control-key:hover {{
            background-color: rgba(35, 35, 35, 0.9);
        }}

        button.equals-key {{
            background-color: {};
            color: #0a0a0a;
            font-weight: 600;
        }}
        "#,
        config.theme.background_color, // window background
        config.theme.background_color, // calculator-box background
        config.theme.font_size - 4,    // previous-operand font-size
        config.theme.text_color,       // current-operand color
        config.theme.font_size + 10,   // current-operand font-size
        config.theme.font_size,        // button font-size
        config.theme.text_color,       // digit-key color
        config.theme.operator_color,   // operator-key color
        config.theme.accent_color,     // equals-key background
    );

    let provider = gtk::CssProvider::new();
    provider.load_from_data(&css);
    if let Some(app_display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &app_display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
