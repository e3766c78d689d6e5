//! UI module - settings and conversion panels
//!
//! The interactive form: region/city dropdowns, format field, timezone
//! shortcut chips, the two timestamp fields, and the explicit conversion
//! buttons. Each panel returns a result struct that the update loop
//! applies after the egui frame ends.

use nannou_egui::egui;
use shared::{Catalog, Selection, Shortcut, UTC_REGION, TIMEZONE_SHORTCUTS};

/// Result of settings panel interactions
#[derive(Default)]
pub struct SettingsResult {
    /// Set a new region (city defaulting applied by the caller)
    pub set_region: Option<String>,
    /// Set a new city within the current region
    pub set_city: Option<String>,
    /// Apply a timezone shortcut preset
    pub shortcut: Option<&'static Shortcut>,
    /// The format field was edited
    pub format_changed: bool,
}

/// Result of convert panel interactions
#[derive(Default)]
pub struct ConvertResult {
    /// Fill the unixtime field with this value (Now/Midnight shortcuts)
    pub set_unixtime: Option<i64>,
    /// "Convert to Unixtime" was pressed
    pub convert_to_unixtime: bool,
    /// "Convert to Text Time" was pressed
    pub convert_to_text_time: bool,
}

/// Draw the settings panel: region/city dropdowns, shortcut chips, and the
/// free-text format field.
pub fn draw_settings_panel(
    ctx: &egui::Context,
    catalog: &Catalog,
    selection: &Selection,
    text_format: &mut String,
) -> SettingsResult {
    let mut result = SettingsResult::default();

    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(false)
        .default_width(380.0)
        .anchor(egui::Align2::LEFT_TOP, [15.0, 60.0])
        .show(ctx, |ui| {
            // Region dropdown
            let region_text = selection.region.as_deref().unwrap_or("Select region...");
            egui::ComboBox::from_label("Region")
                .selected_text(region_text)
                .width(220.0)
                .show_ui(ui, |ui| {
                    for region in catalog.regions() {
                        let is_selected = selection.region.as_deref() == Some(region);
                        if ui.selectable_label(is_selected, region).clicked() {
                            result.set_region = Some(region.to_string());
                        }
                    }
                });

            // City dropdown, disabled when UTC, unset, or city-less
            let cities = selection
                .region
                .as_deref()
                .filter(|r| *r != UTC_REGION)
                .map(|r| catalog.cities(r))
                .unwrap_or(&[]);
            ui.add_enabled_ui(!cities.is_empty(), |ui| {
                let city_text = selection.city.as_deref().unwrap_or("");
                egui::ComboBox::from_label("City")
                    .selected_text(city_text)
                    .width(220.0)
                    .show_ui(ui, |ui| {
                        for city in cities {
                            let is_selected = selection.city.as_deref() == Some(city.as_str());
                            if ui.selectable_label(is_selected, city.as_str()).clicked() {
                                result.set_city = Some(city.clone());
                            }
                        }
                    });
            });

            // Shortcut chips
            ui.horizontal(|ui| {
                for shortcut in TIMEZONE_SHORTCUTS {
                    let is_current = selection.region.as_deref() == Some(shortcut.region)
                        && selection.city.as_deref() == shortcut.city;
                    if ui.selectable_label(is_current, shortcut.label).clicked() {
                        result.shortcut = Some(shortcut);
                    }
                }
            });

            ui.separator();

            // Format field
            ui.horizontal(|ui| {
                ui.label("Text Format:");
                if ui.text_edit_singleline(text_format).changed() {
                    result.format_changed = true;
                }
            });
        });

    result
}

/// Draw the convert panel: the two independent fields and the explicit
/// conversion buttons. The buttons stay disabled until the selection is
/// complete, so the converter is never called without a timezone.
pub fn draw_convert_panel(
    ctx: &egui::Context,
    unixtime_text: &mut String,
    text_time: &mut String,
    can_convert: bool,
) -> ConvertResult {
    let mut result = ConvertResult::default();

    egui::Window::new("Convert")
        .collapsible(false)
        .resizable(false)
        .default_width(380.0)
        .anchor(egui::Align2::RIGHT_TOP, [-15.0, 60.0])
        .show(ctx, |ui| {
            // Unixtime field with Now/Midnight shortcuts
            ui.horizontal(|ui| {
                ui.label("Unixtime:");
                ui.text_edit_singleline(unixtime_text);
            });
            ui.horizontal(|ui| {
                if ui.small_button("Midnight").clicked() {
                    result.set_unixtime = Some(shared::local_midnight_epoch());
                }
                if ui.small_button("Now").clicked() {
                    result.set_unixtime = Some(shared::now_epoch());
                }
            });

            ui.separator();

            // Text time field
            ui.horizontal(|ui| {
                ui.label("Text Time:");
                ui.text_edit_singleline(text_time);
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(can_convert, egui::Button::new("Convert to Unixtime"))
                    .clicked()
                {
                    result.convert_to_unixtime = true;
                }
                if ui
                    .add_enabled(can_convert, egui::Button::new("Convert to Text Time"))
                    .clicked()
                {
                    result.convert_to_text_time = true;
                }
            });

            if !can_convert {
                ui.label("Select a timezone to enable conversion.");
            }
        });

    result
}
