//! Static catalog of the timezones a channel can be bound to.
//!
//! Entries are compiled in and never mutated. Keys are unique; the order of
//! [`CATALOG`] is the order used for search results.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::timezone::TimezoneEntry;

/// Maximum number of suggestions the platform accepts for one autocomplete.
pub const MAX_SEARCH_RESULTS: usize = 25;

const fn entry(
    key: &'static str,
    display_name: &'static str,
    iana_zone: &'static str,
    symbol: &'static str,
    utc_label: &'static str,
) -> TimezoneEntry {
    TimezoneEntry {
        key,
        display_name,
        iana_zone,
        symbol,
        utc_label,
    }
}

pub static CATALOG: &[TimezoneEntry] = &[
    // Europe
    entry("paris", "Paris", "Europe/Paris", "🇫🇷", "UTC+1"),
    entry("london", "London", "Europe/London", "🇬🇧", "UTC+0"),
    entry("berlin", "Berlin", "Europe/Berlin", "🇩🇪", "UTC+1"),
    entry("madrid", "Madrid", "Europe/Madrid", "🇪🇸", "UTC+1"),
    entry("rome", "Rome", "Europe/Rome", "🇮🇹", "UTC+1"),
    entry("amsterdam", "Amsterdam", "Europe/Amsterdam", "🇳🇱", "UTC+1"),
    entry("brussels", "Brussels", "Europe/Brussels", "🇧🇪", "UTC+1"),
    entry("lisbon", "Lisbon", "Europe/Lisbon", "🇵🇹", "UTC+0"),
    entry("moscow", "Moscow", "Europe/Moscow", "🇷🇺", "UTC+3"),
    entry("vienna", "Vienna", "Europe/Vienna", "🇦🇹", "UTC+1"),
    entry("warsaw", "Warsaw", "Europe/Warsaw", "🇵🇱", "UTC+1"),
    entry("prague", "Prague", "Europe/Prague", "🇨🇿", "UTC+1"),
    entry("budapest", "Budapest", "Europe/Budapest", "🇭🇺", "UTC+1"),
    entry("athens", "Athens", "Europe/Athens", "🇬🇷", "UTC+2"),
    entry("stockholm", "Stockholm", "Europe/Stockholm", "🇸🇪", "UTC+1"),
    entry("oslo", "Oslo", "Europe/Oslo", "🇳🇴", "UTC+1"),
    entry("copenhagen", "Copenhagen", "Europe/Copenhagen", "🇩🇰", "UTC+1"),
    entry("helsinki", "Helsinki", "Europe/Helsinki", "🇫🇮", "UTC+2"),
    entry("dublin", "Dublin", "Europe/Dublin", "🇮🇪", "UTC+0"),
    entry("zurich", "Zurich", "Europe/Zurich", "🇨🇭", "UTC+1"),
    entry("kiev", "Kiev", "Europe/Kiev", "🇺🇦", "UTC+2"),
    entry("bucharest", "Bucharest", "Europe/Bucharest", "🇷🇴", "UTC+2"),
    entry("istanbul", "Istanbul", "Europe/Istanbul", "🇹🇷", "UTC+3"),

    // North America
    entry("new_york", "New York", "America/New_York", "🇺🇸", "UTC-5"),
    entry("los_angeles", "Los Angeles", "America/Los_Angeles", "🇺🇸", "UTC-8"),
    entry("chicago", "Chicago", "America/Chicago", "🇺🇸", "UTC-6"),
    entry("denver", "Denver", "America/Denver", "🇺🇸", "UTC-7"),
    entry("toronto", "Toronto", "America/Toronto", "🇨🇦", "UTC-5"),
    entry("vancouver", "Vancouver", "America/Vancouver", "🇨🇦", "UTC-8"),
    entry("montreal", "Montreal", "America/Montreal", "🇨🇦", "UTC-5"),
    entry("mexico_city", "Mexico City", "America/Mexico_City", "🇲🇽", "UTC-6"),
    entry("miami", "Miami", "America/New_York", "🇺🇸", "UTC-5"),
    entry("phoenix", "Phoenix", "America/Phoenix", "🇺🇸", "UTC-7"),
    entry("seattle", "Seattle", "America/Los_Angeles", "🇺🇸", "UTC-8"),
    entry("las_vegas", "Las Vegas", "America/Los_Angeles", "🇺🇸", "UTC-8"),

    // South America
    entry("sao_paulo", "São Paulo", "America/Sao_Paulo", "🇧🇷", "UTC-3"),
    entry("buenos_aires", "Buenos Aires", "America/Argentina/Buenos_Aires", "🇦🇷", "UTC-3"),
    entry("lima", "Lima", "America/Lima", "🇵🇪", "UTC-5"),
    entry("bogota", "Bogota", "America/Bogota", "🇨🇴", "UTC-5"),
    entry("santiago", "Santiago", "America/Santiago", "🇨🇱", "UTC-4"),
    entry("caracas", "Caracas", "America/Caracas", "🇻🇪", "UTC-4"),
    entry("rio", "Rio de Janeiro", "America/Sao_Paulo", "🇧🇷", "UTC-3"),

    // Asia
    entry("tokyo", "Tokyo", "Asia/Tokyo", "🇯🇵", "UTC+9"),
    entry("seoul", "Seoul", "Asia/Seoul", "🇰🇷", "UTC+9"),
    entry("shanghai", "Shanghai", "Asia/Shanghai", "🇨🇳", "UTC+8"),
    entry("beijing", "Beijing", "Asia/Shanghai", "🇨🇳", "UTC+8"),
    entry("hong_kong", "Hong Kong", "Asia/Hong_Kong", "🇭🇰", "UTC+8"),
    entry("singapore", "Singapore", "Asia/Singapore", "🇸🇬", "UTC+8"),
    entry("bangkok", "Bangkok", "Asia/Bangkok", "🇹🇭", "UTC+7"),
    entry("mumbai", "Mumbai", "Asia/Kolkata", "🇮🇳", "UTC+5:30"),
    entry("delhi", "New Delhi", "Asia/Kolkata", "🇮🇳", "UTC+5:30"),
    entry("dubai", "Dubai", "Asia/Dubai", "🇦🇪", "UTC+4"),
    entry("taipei", "Taipei", "Asia/Taipei", "🇹🇼", "UTC+8"),
    entry("manila", "Manila", "Asia/Manila", "🇵🇭", "UTC+8"),
    entry("jakarta", "Jakarta", "Asia/Jakarta", "🇮🇩", "UTC+7"),
    entry("hanoi", "Hanoi", "Asia/Ho_Chi_Minh", "🇻🇳", "UTC+7"),
    entry("kuala_lumpur", "Kuala Lumpur", "Asia/Kuala_Lumpur", "🇲🇾", "UTC+8"),
    entry("riyadh", "Riyadh", "Asia/Riyadh", "🇸🇦", "UTC+3"),
    entry("tehran", "Tehran", "Asia/Tehran", "🇮🇷", "UTC+3:30"),
    entry("tel_aviv", "Tel Aviv", "Asia/Jerusalem", "🇮🇱", "UTC+2"),
    entry("baghdad", "Baghdad", "Asia/Baghdad", "🇮🇶", "UTC+3"),
    entry("karachi", "Karachi", "Asia/Karachi", "🇵🇰", "UTC+5"),
    entry("dhaka", "Dhaka", "Asia/Dhaka", "🇧🇩", "UTC+6"),

    // Oceania
    entry("sydney", "Sydney", "Australia/Sydney", "🇦🇺", "UTC+11"),
    entry("melbourne", "Melbourne", "Australia/Melbourne", "🇦🇺", "UTC+11"),
    entry("perth", "Perth", "Australia/Perth", "🇦🇺", "UTC+8"),
    entry("brisbane", "Brisbane", "Australia/Brisbane", "🇦🇺", "UTC+10"),
    entry("auckland", "Auckland", "Pacific/Auckland", "🇳🇿", "UTC+13"),
    entry("wellington", "Wellington", "Pacific/Auckland", "🇳🇿", "UTC+13"),

    // Africa
    entry("cairo", "Cairo", "Africa/Cairo", "🇪🇬", "UTC+2"),
    entry("johannesburg", "Johannesburg", "Africa/Johannesburg", "🇿🇦", "UTC+2"),
    entry("lagos", "Lagos", "Africa/Lagos", "🇳🇬", "UTC+1"),
    entry("nairobi", "Nairobi", "Africa/Nairobi", "🇰🇪", "UTC+3"),
    entry("casablanca", "Casablanca", "Africa/Casablanca", "🇲🇦", "UTC+1"),
    entry("tunis", "Tunis", "Africa/Tunis", "🇹🇳", "UTC+1"),
    entry("algiers", "Algiers", "Africa/Algiers", "🇩🇿", "UTC+1"),
    entry("cape_town", "Cape Town", "Africa/Johannesburg", "🇿🇦", "UTC+2"),
    entry("dakar", "Dakar", "Africa/Dakar", "🇸🇳", "UTC+0"),
    entry("abidjan", "Abidjan", "Africa/Abidjan", "🇨🇮", "UTC+0"),

    // Islands
    entry("mauritius", "Mauritius", "Indian/Mauritius", "🇲🇺", "UTC+4"),
    entry("reunion", "Reunion", "Indian/Reunion", "🇷🇪", "UTC+4"),
    entry("madagascar", "Madagascar", "Indian/Antananarivo", "🇲🇬", "UTC+3"),
    entry("seychelles", "Seychelles", "Indian/Mahe", "🇸🇨", "UTC+4"),
    entry("maldives", "Maldives", "Indian/Maldives", "🇲🇻", "UTC+5"),
    entry("hawaii", "Hawaii", "Pacific/Honolulu", "🇺🇸", "UTC-10"),
    entry("tahiti", "Tahiti", "Pacific/Tahiti", "🇵🇫", "UTC-10"),
    entry("fiji", "Fiji", "Pacific/Fiji", "🇫🇯", "UTC+12"),
    entry("guadeloupe", "Guadeloupe", "America/Guadeloupe", "🇬🇵", "UTC-4"),
    entry("martinique", "Martinique", "America/Martinique", "🇲🇶", "UTC-4"),
    entry("new_caledonia", "New Caledonia", "Pacific/Noumea", "🇳🇨", "UTC+11"),
];

static BY_KEY: LazyLock<HashMap<&'static str, &'static TimezoneEntry>> =
    LazyLock::new(|| CATALOG.iter().map(|entry| (entry.key, entry)).collect());

/// Find an entry by its key.
pub fn lookup(key: &str) -> Option<&'static TimezoneEntry> {
    BY_KEY.get(key).copied()
}

/// Case-insensitive substring search over key, display name and UTC label.
///
/// Results keep catalog order and are capped at [`MAX_SEARCH_RESULTS`]. An
/// empty query matches every entry.
pub fn search(query: &str) -> Vec<&'static TimezoneEntry> {
    let needle = query.trim().to_lowercase();

    CATALOG
        .iter()
        .filter(|entry| {
            [entry.key, entry.display_name, entry.utc_label]
                .iter()
                .any(|term| term.to_lowercase().contains(&needle))
        })
        .take(MAX_SEARCH_RESULTS)
        .collect()
}

pub fn entries() -> impl Iterator<Item = &'static TimezoneEntry> {
    CATALOG.iter()
}

pub fn len() -> usize {
    CATALOG.len()
}
