//! Drawing module - background chrome, live readout, and error banner
//!
//! Renders the non-interactive parts of the converter window using
//! nannou's Draw API; the form itself is egui (see ui.rs).

use nannou::prelude::*;

/// Color palette for the converter theme
pub mod colors {
    use nannou::prelude::*;

    pub const BACKGROUND: Srgb<u8> = Srgb {
        red: 26,
        green: 26,
        blue: 26,
        standard: std::marker::PhantomData,
    };
    pub const TEXT_PRIMARY: Srgb<u8> = Srgb {
        red: 240,
        green: 240,
        blue: 240,
        standard: std::marker::PhantomData,
    };
    pub const TEXT_SECONDARY: Srgb<u8> = Srgb {
        red: 160,
        green: 160,
        blue: 160,
        standard: std::marker::PhantomData,
    };
    pub const ACCENT: Srgb<u8> = Srgb {
        red: 0,
        green: 212,
        blue: 255,
        standard: std::marker::PhantomData,
    };
}

/// Draw the live readout strip along the bottom: the current time in the
/// selected timezone, or a prompt when nothing is selected yet.
pub fn draw_live_readout(draw: &Draw, time_line: &str, zone_line: &str, rect: Rect) {
    let base_y = rect.bottom() + 70.0;

    draw.text(time_line)
        .xy(pt2(rect.x(), base_y))
        .color(colors::TEXT_PRIMARY)
        .font_size(36)
        .w(rect.w());

    draw.text(zone_line)
        .xy(pt2(rect.x(), base_y - 34.0))
        .color(colors::TEXT_SECONDARY)
        .font_size(16)
        .w(rect.w());
}

/// Draw the title header
pub fn draw_header(draw: &Draw, rect: Rect) {
    draw.text("UNIXTIME")
        .xy(pt2(rect.x(), rect.top() - 30.0))
        .color(colors::ACCENT)
        .font_size(28)
        .w(rect.w());
}

/// Draw a full-width error banner at the top of the window
pub fn draw_error_banner(draw: &Draw, message: &str, rect: Rect) {
    let banner_height = 40.0;
    let banner_rect = Rect::from_x_y_w_h(
        rect.x(),
        rect.top() - banner_height / 2.0,
        rect.w(),
        banner_height,
    );

    // Background
    draw.rect()
        .xy(banner_rect.xy())
        .wh(banner_rect.wh())
        .color(srgb(80u8, 20u8, 20u8));

    // Text
    draw.text(message)
        .xy(banner_rect.xy())
        .color(colors::TEXT_PRIMARY)
        .font_size(14)
        .w(banner_rect.w() - 20.0);
}
