//! [HTTP-date][rfc] conversions for timestamp valued headers.
//!
//! Parsing accepts IMF-fixdate, the obsolete RFC 850 format and asctime. Formatting always
//! produces IMF-fixdate.
//!
//! [rfc]: <https://datatracker.ietf.org/doc/html/rfc9110#section-5.6.7>
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub use httpdate::Error as DateError;

/// Seconds since the epoch of `9999-12-31T23:59:59Z`, the last instant HTTP-date can express.
const MAX_SECS: u64 = 253_402_300_799;

/// Parse an HTTP-date.
pub fn parse(value: &str) -> Result<SystemTime, DateError> {
    httpdate::parse_http_date(value)
}

/// Format a timestamp as IMF-fixdate.
///
/// Times before the epoch or after year 9999 are clamped into the representable range.
pub fn format(time: SystemTime) -> String {
    let secs = match time.duration_since(UNIX_EPOCH) {
        Ok(dur) => dur.as_secs().min(MAX_SECS),
        Err(_) => 0,
    };
    httpdate::fmt_http_date(UNIX_EPOCH + Duration::from_secs(secs))
}

/// Parse an HTTP-date into milliseconds since the Unix epoch.
pub fn parse_millis(value: &str) -> Result<i64, DateError> {
    parse(value).map(to_millis)
}

/// Format milliseconds since the Unix epoch as IMF-fixdate.
pub fn format_millis(millis: i64) -> String {
    format(from_millis(millis))
}

/// Milliseconds since the Unix epoch, negative for earlier times.
pub fn to_millis(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(dur) => i64::try_from(dur.as_millis()).unwrap_or(i64::MAX),
        Err(err) => i64::try_from(err.duration().as_millis()).map_or(i64::MIN, |m| -m),
    }
}

pub fn from_millis(millis: i64) -> SystemTime {
    let offset = Duration::from_millis(millis.unsigned_abs());
    let time = if millis >= 0 {
        UNIX_EPOCH.checked_add(offset)
    } else {
        UNIX_EPOCH.checked_sub(offset)
    };
    // out of the platform's range
    time.unwrap_or(UNIX_EPOCH)
}
