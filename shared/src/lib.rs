//! Shared library for the unixtime converter
//!
//! Timezone catalog, selection state, conversion logic, and config
//! persistence. The app crate handles presentation only.

pub mod catalog;
pub mod config;
pub mod convert;
pub mod selection;

pub use catalog::{resolve_timezone, timezone_id, Catalog, UTC_REGION};
pub use config::{config_dir, config_path, delete_config, load_config, save_config, ConfigError};
pub use convert::{
    local_midnight_epoch, now_epoch, parse_unixtime, to_text_time, to_unixtime, translate_format,
    ConvertError,
};
pub use selection::{Selection, Shortcut, TIMEZONE_SHORTCUTS};

use chrono::Local;
use chrono_tz::Tz;

/// Get the system's local timezone as a chrono-tz Tz
pub fn system_timezone() -> Option<Tz> {
    // The %Z name is only sometimes a valid IANA identifier, so this can
    // fail; callers fall back to UTC.
    let local_now = Local::now();
    let tz_name = local_now.format("%Z").to_string();

    tz_name.parse::<Tz>().ok()
}
