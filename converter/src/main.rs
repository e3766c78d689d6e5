//! Unixtime Converter
//!
//! Converts between Unix timestamps and human-readable date/time text in a
//! chosen region/city timezone. The timestamp and text fields are
//! independent; they only sync when one of the convert buttons is pressed.

mod drawing;
mod ui;

use chrono::Utc;
use nannou::prelude::*;
use nannou_egui::{self, Egui};
use serde::{Deserialize, Serialize};
use shared::{Catalog, Selection};

use crate::drawing::{colors, draw_error_banner, draw_header, draw_live_readout};
use crate::ui::{draw_convert_panel, draw_settings_panel};

const APP_NAME: &str = "converter";
const DEFAULT_FORMAT: &str = "YYYY-MM-DD HH:mm:ss z";

fn main() {
    nannou::app(model).update(update).run();
}

/// Persisted configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Config {
    region: Option<String>,
    city: Option<String>,
    text_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: None,
            city: None,
            text_format: DEFAULT_FORMAT.to_string(),
        }
    }
}

/// Application state
struct Model {
    /// Timezone catalog, built once at startup and read-only after
    catalog: Catalog,
    /// Selected region/city
    selection: Selection,
    /// Format string for parsing and rendering text times
    text_format: String,
    /// Unixtime field contents (free text while editing)
    unixtime_text: String,
    /// Text time field contents
    text_time: String,
    /// Error message to display (if any)
    error_message: Option<String>,
    /// egui integration
    egui: Egui,
}

fn save_config(model: &Model) {
    let config = Config {
        region: model.selection.region.clone(),
        city: model.selection.city.clone(),
        text_format: model.text_format.clone(),
    };
    if let Err(e) = shared::save_config(APP_NAME, &config) {
        eprintln!("Failed to save config: {}", e);
    }
}

fn model(app: &App) -> Model {
    // Create window
    let window_id = app
        .new_window()
        .title("Unixtime Converter")
        .size(900, 600)
        .view(view)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let catalog = Catalog::build();

    // Load configuration
    let config: Config = shared::load_config(APP_NAME)
        .ok()
        .flatten()
        .unwrap_or_default();

    // Restore the last selection, or guess from the system timezone
    let mut selection = Selection::default();
    match config.region.as_deref() {
        Some(region) if catalog.contains_region(region) => {
            selection.region = config.region.clone();
            selection.city = config.city.clone();
        }
        _ => {
            if let Some(sys_tz) = shared::system_timezone() {
                selection.seed_from_identifier(&catalog, sys_tz.name());
            }
            if selection.region.is_none() {
                selection.seed_from_identifier(&catalog, shared::UTC_REGION);
            }
        }
    }

    // Seed the fields: unixtime = now, text time = its rendering
    let now = shared::now_epoch();
    let text_time = selection
        .resolve()
        .ok()
        .and_then(|tz| shared::to_text_time(now, &config.text_format, tz).ok())
        .unwrap_or_default();

    Model {
        catalog,
        selection,
        text_format: config.text_format,
        unixtime_text: now.to_string(),
        text_time,
        error_message: None,
        egui,
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    // Begin egui frame
    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();

    let can_convert = model.selection.is_complete(&model.catalog);

    let settings = draw_settings_panel(
        &ctx,
        &model.catalog,
        &model.selection,
        &mut model.text_format,
    );
    let convert = draw_convert_panel(
        &ctx,
        &mut model.unixtime_text,
        &mut model.text_time,
        can_convert,
    );

    drop(ctx);

    // Apply settings results
    if let Some(region) = settings.set_region {
        model.selection.set_region(&model.catalog, &region);
        model.error_message = None;
        save_config(model);
    }
    if let Some(city) = settings.set_city {
        model.selection.set_city(&city);
        model.error_message = None;
        save_config(model);
    }
    if let Some(shortcut) = settings.shortcut {
        model.selection.apply_shortcut(shortcut);
        model.error_message = None;
        save_config(model);
    }
    if settings.format_changed {
        save_config(model);
    }

    // Apply convert results
    if let Some(value) = convert.set_unixtime {
        model.unixtime_text = value.to_string();
    }
    if convert.convert_to_unixtime {
        run_to_unixtime(model);
    }
    if convert.convert_to_text_time {
        run_to_text_time(model);
    }
}

/// Parse the text time field and fill the unixtime field.
fn run_to_unixtime(model: &mut Model) {
    let tz = match model.selection.resolve() {
        Ok(tz) => tz,
        Err(e) => {
            model.error_message = Some(e);
            return;
        }
    };
    match shared::to_unixtime(&model.text_time, &model.text_format, tz) {
        Ok(unix) => {
            model.unixtime_text = unix.to_string();
            model.error_message = None;
        }
        Err(e) => model.error_message = Some(e.to_string()),
    }
}

/// Parse the unixtime field and fill the text time field.
fn run_to_text_time(model: &mut Model) {
    let tz = match model.selection.resolve() {
        Ok(tz) => tz,
        Err(e) => {
            model.error_message = Some(e);
            return;
        }
    };
    let result = shared::parse_unixtime(&model.unixtime_text)
        .and_then(|unix| shared::to_text_time(unix, &model.text_format, tz));
    match result {
        Ok(text) => {
            model.text_time = text;
            model.error_message = None;
        }
        Err(e) => model.error_message = Some(e.to_string()),
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();

    // Clear background
    draw.background().color(colors::BACKGROUND);

    draw_header(&draw, window_rect);

    // Live readout of the selected timezone along the bottom
    let (time_line, zone_line) = match model.selection.resolve() {
        Ok(tz) => {
            let now = Utc::now().with_timezone(&tz);
            (
                now.format("%H:%M:%S").to_string(),
                format!("{} ({})", tz.name(), now.format("%Z")),
            )
        }
        Err(_) => (String::from("--:--:--"), String::from("No timezone selected")),
    };
    draw_live_readout(&draw, &time_line, &zone_line, window_rect);

    // Draw error banner if needed
    if let Some(ref message) = model.error_message {
        draw_error_banner(&draw, message, window_rect);
    }

    // Render to frame
    draw.to_frame(app, &frame).unwrap();

    // Render egui on top
    model.egui.draw_to_frame(&frame).unwrap();
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Let egui handle raw events for keyboard and mouse input
    model.egui.handle_raw_event(event);
}
