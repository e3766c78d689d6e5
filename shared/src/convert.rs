//! Converter - timestamp <-> formatted text in a chosen timezone
//!
//! Format strings use the dayjs-style token vocabulary (`YYYY-MM-DD
//! HH:mm:ss z` and friends) and are translated to chrono strftime specs
//! before parsing or formatting.

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Error type for conversion operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The text time did not match the format string
    ParseFailed { input: String, format: String },
    /// The parsed wall-clock time does not exist in the zone (DST gap)
    NonexistentLocalTime { input: String, zone: String },
    /// The timestamp is outside the supported calendar range
    TimestampOutOfRange(i64),
    /// The unixtime field does not hold an integer
    InvalidUnixtime(String),
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::ParseFailed { input, format } => {
                write!(f, "\"{}\" does not match format \"{}\"", input, format)
            }
            ConvertError::NonexistentLocalTime { input, zone } => {
                write!(f, "\"{}\" does not exist in {} (DST gap)", input, zone)
            }
            ConvertError::TimestampOutOfRange(ts) => {
                write!(f, "Timestamp {} is out of range", ts)
            }
            ConvertError::InvalidUnixtime(s) => {
                write!(f, "\"{}\" is not a valid unixtime", s)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// Token table, longest token first within each letter family.
const TOKEN_MAP: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("M", "%-m"),
    ("DD", "%d"),
    ("D", "%-d"),
    ("HH", "%H"),
    ("H", "%-H"),
    ("hh", "%I"),
    ("h", "%-I"),
    ("mm", "%M"),
    ("m", "%-M"),
    ("ss", "%S"),
    ("s", "%-S"),
    ("SSS", "%3f"),
    ("A", "%p"),
    ("a", "%P"),
    ("ZZ", "%z"),
    ("Z", "%:z"),
    ("zz", "%Z"),
    ("z", "%Z"),
];

fn push_literal(out: &mut String, text: &str) {
    for ch in text.chars() {
        if ch == '%' {
            out.push_str("%%");
        } else {
            out.push(ch);
        }
    }
}

/// Translate a dayjs-style format string into a chrono strftime pattern.
///
/// `[...]` spans pass through as literal text; unrecognized characters are
/// kept verbatim, matching how the reference library treats them.
pub fn translate_format(format: &str) -> String {
    let mut out = String::with_capacity(format.len() + 8);
    let mut rest = format;
    while !rest.is_empty() {
        if let Some(stripped) = rest.strip_prefix('[') {
            match stripped.find(']') {
                Some(end) => {
                    push_literal(&mut out, &stripped[..end]);
                    rest = &stripped[end + 1..];
                }
                None => {
                    push_literal(&mut out, stripped);
                    rest = "";
                }
            }
            continue;
        }
        if let Some((token, spec)) = TOKEN_MAP.iter().find(|(t, _)| rest.starts_with(t)) {
            out.push_str(spec);
            rest = &rest[token.len()..];
        } else if let Some(ch) = rest.chars().next() {
            if ch == '%' {
                out.push_str("%%");
            } else {
                out.push(ch);
            }
            rest = &rest[ch.len_utf8()..];
        }
    }
    out
}

/// Parse a text time against a format string in the given timezone and
/// return epoch seconds.
///
/// The parse is strict: the text must match the format exactly. Ambiguous
/// wall-clock times (DST fall-back) resolve to the earlier instant.
pub fn to_unixtime(text_time: &str, text_format: &str, tz: Tz) -> Result<i64, ConvertError> {
    let pattern = translate_format(text_format);
    let naive = NaiveDateTime::parse_from_str(text_time.trim(), &pattern).map_err(|_| {
        ConvertError::ParseFailed {
            input: text_time.to_string(),
            format: text_format.to_string(),
        }
    })?;
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.timestamp()),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.timestamp()),
        LocalResult::None => Err(ConvertError::NonexistentLocalTime {
            input: text_time.to_string(),
            zone: tz.name().to_string(),
        }),
    }
}

/// Format epoch seconds in the given timezone using a format string.
pub fn to_text_time(unixtime: i64, text_format: &str, tz: Tz) -> Result<String, ConvertError> {
    let utc = DateTime::from_timestamp(unixtime, 0)
        .ok_or(ConvertError::TimestampOutOfRange(unixtime))?;
    let pattern = translate_format(text_format);
    Ok(utc.with_timezone(&tz).format(&pattern).to_string())
}

/// Parse the free-text unixtime field into epoch seconds.
pub fn parse_unixtime(text: &str) -> Result<i64, ConvertError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ConvertError::InvalidUnixtime(text.to_string()))
}

/// Current epoch seconds.
pub fn now_epoch() -> i64 {
    Utc::now().timestamp()
}

/// Epoch seconds for 00:00:00 of the current day in the machine's local
/// timezone. Deliberately local, not the selected zone, matching the
/// reference behavior.
pub fn local_midnight_epoch() -> i64 {
    let now = Local::now();
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&midnight).earliest() {
        Some(dt) => dt.timestamp(),
        // Midnight itself can be skipped by a DST jump in the local zone.
        None => now.timestamp(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOSSLESS: &str = "YYYY-MM-DD HH:mm:ss";

    fn zone(id: &str) -> Tz {
        id.parse().unwrap()
    }

    #[test]
    fn translate_default_format() {
        assert_eq!(
            translate_format("YYYY-MM-DD HH:mm:ss z"),
            "%Y-%m-%d %H:%M:%S %Z"
        );
    }

    #[test]
    fn translate_twelve_hour_tokens() {
        assert_eq!(translate_format("h:mm A"), "%-I:%M %p");
        assert_eq!(translate_format("hh:mm a Z"), "%I:%M %P %:z");
    }

    #[test]
    fn translate_bracketed_literal() {
        assert_eq!(translate_format("[Day] DD"), "Day %d");
        assert_eq!(translate_format("YYYY [YYYY]"), "%Y YYYY");
    }

    #[test]
    fn translate_escapes_percent() {
        assert_eq!(translate_format("100% YYYY"), "100%% %Y");
    }

    #[test]
    fn epoch_zero_in_utc() {
        let text = to_text_time(0, "YYYY-MM-DD HH:mm:ss z", chrono_tz::UTC).unwrap();
        assert_eq!(text, "1970-01-01 00:00:00 UTC");
    }

    #[test]
    fn new_york_new_year_2024() {
        // 2024-01-01 00:00:00 EST is 2024-01-01T05:00:00Z.
        let unix = to_unixtime(
            "2024-01-01 00:00:00",
            LOSSLESS,
            zone("America/New_York"),
        )
        .unwrap();
        assert_eq!(unix, 1_704_085_200);
    }

    #[test]
    fn round_trip_utc() {
        let t = 1_234_567_890;
        let text = to_text_time(t, LOSSLESS, chrono_tz::UTC).unwrap();
        assert_eq!(to_unixtime(&text, LOSSLESS, chrono_tz::UTC).unwrap(), t);
    }

    #[test]
    fn round_trip_fixed_offset_zone() {
        // Tokyo has no DST, so every instant round-trips losslessly.
        let tokyo = zone("Asia/Tokyo");
        for t in [0, 1_000_000_000, 1_700_000_000, -86_400] {
            let text = to_text_time(t, LOSSLESS, tokyo).unwrap();
            assert_eq!(to_unixtime(&text, LOSSLESS, tokyo).unwrap(), t, "t={}", t);
        }
    }

    #[test]
    fn round_trip_with_zone_abbreviation() {
        // %Z skips the abbreviation during parsing, so the format stays
        // lossless as long as the date/time fields are present.
        let format = "YYYY-MM-DD HH:mm:ss z";
        let tokyo = zone("Asia/Tokyo");
        let text = to_text_time(1_700_000_000, format, tokyo).unwrap();
        assert_eq!(to_unixtime(&text, format, tokyo).unwrap(), 1_700_000_000);
    }

    #[test]
    fn mismatched_text_is_an_error() {
        let err = to_unixtime("not a date", LOSSLESS, chrono_tz::UTC).unwrap_err();
        assert!(matches!(err, ConvertError::ParseFailed { .. }));

        // Trailing garbage is rejected too.
        assert!(to_unixtime("2024-01-01 00:00:00 extra", LOSSLESS, chrono_tz::UTC).is_err());
    }

    #[test]
    fn dst_gap_is_reported() {
        // US spring-forward 2024: 02:00-03:00 on March 10 does not exist.
        let err = to_unixtime(
            "2024-03-10 02:30:00",
            LOSSLESS,
            zone("America/New_York"),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::NonexistentLocalTime { .. }));
    }

    #[test]
    fn ambiguous_time_takes_earliest() {
        // US fall-back 2024: 01:30 occurs twice; the EDT reading comes first.
        let unix = to_unixtime(
            "2024-11-03 01:30:00",
            LOSSLESS,
            zone("America/New_York"),
        )
        .unwrap();
        assert_eq!(unix, 1_730_611_800);
    }

    #[test]
    fn out_of_range_timestamp_is_an_error() {
        assert!(matches!(
            to_text_time(i64::MAX, LOSSLESS, chrono_tz::UTC),
            Err(ConvertError::TimestampOutOfRange(_))
        ));
    }

    #[test]
    fn parse_unixtime_field() {
        assert_eq!(parse_unixtime(" 1700000000 ").unwrap(), 1_700_000_000);
        assert_eq!(parse_unixtime("-1").unwrap(), -1);
        assert!(parse_unixtime("12.5").is_err());
        assert!(parse_unixtime("").is_err());
    }

    #[test]
    fn now_epoch_tracks_wall_clock() {
        let before = Utc::now().timestamp();
        let now = now_epoch();
        let after = Utc::now().timestamp();
        assert!(now >= before - 2 && now <= after + 2);
    }

    #[test]
    fn local_midnight_is_start_of_today() {
        let midnight = local_midnight_epoch();
        let now = now_epoch();
        assert!(midnight <= now);
        // Never more than a day (plus a DST hour) behind.
        assert!(now - midnight < 86_400 + 3_600);
    }
}
