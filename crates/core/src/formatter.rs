use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::catalog;
use crate::models::timezone::TimezoneEntry;

/// Marker placed in front of every channel label.
pub const LABEL_PREFIX: &str = "🕐 ・";

/// Label for `timezone_key` at the current wall-clock time.
pub fn format_label(timezone_key: &str) -> Option<String> {
    format_label_at(timezone_key, Utc::now())
}

/// Label for `timezone_key` at `instant`, or `None` if the key is not in the
/// catalog.
pub fn format_label_at(timezone_key: &str, instant: DateTime<Utc>) -> Option<String> {
    let Some(entry) = catalog::lookup(timezone_key) else {
        debug!(timezone_key, "Unknown timezone key");
        return None;
    };

    render_label(entry, instant)
}

/// Render `entry` as `"🕐 ・{name} HH:MM"`. Returns `None` when the entry's
/// zone identifier cannot be resolved.
pub fn render_label(entry: &TimezoneEntry, instant: DateTime<Utc>) -> Option<String> {
    let tz: Tz = match entry.iana_zone.parse() {
        Ok(tz) => tz,
        Err(e) => {
            warn!(key = entry.key, zone = entry.iana_zone, error = %e, "Invalid timezone data");
            return None;
        }
    };

    let local = instant.with_timezone(&tz);
    Some(format!(
        "{LABEL_PREFIX}{} {}",
        entry.display_name,
        local.format("%H:%M")
    ))
}
