use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use pretty_assertions::assert_eq;
use rstest::rstest;
use voiceclock_core::catalog::{self, MAX_SEARCH_RESULTS};
use voiceclock_core::formatter::{format_label, format_label_at, render_label};
use voiceclock_core::models::timezone::TimezoneEntry;

#[test]
fn test_catalog_keys_are_unique() {
    let keys: HashSet<_> = catalog::entries().map(|entry| entry.key).collect();
    assert_eq!(keys.len(), catalog::len());
}

#[test]
fn test_catalog_zones_are_valid() {
    for entry in catalog::entries() {
        assert!(
            entry.iana_zone.parse::<Tz>().is_ok(),
            "{} has an unknown zone {}",
            entry.key,
            entry.iana_zone
        );
    }
}

#[test]
fn test_lookup() {
    let paris = catalog::lookup("paris").expect("paris should be in the catalog");
    assert_eq!(paris.display_name, "Paris");
    assert_eq!(paris.iana_zone, "Europe/Paris");

    assert!(catalog::lookup("atlantis").is_none());
    assert!(catalog::lookup("PARIS").is_none());
}

#[rstest]
#[case("tokyo", "tokyo")]
#[case("TOKYO", "tokyo")]
#[case("Los Ang", "los_angeles")]
#[case("utc+5:30", "mumbai")]
fn test_search_matches_key_name_and_offset(#[case] query: &str, #[case] expected: &str) {
    let results = catalog::search(query);
    assert!(
        results.iter().any(|entry| entry.key == expected),
        "{query} should match {expected}"
    );
}

#[test]
fn test_search_preserves_catalog_order() {
    let keys: Vec<_> = catalog::search("utc+9").iter().map(|e| e.key).collect();
    assert_eq!(keys, vec!["tokyo", "seoul"]);
}

#[test]
fn test_search_is_capped() {
    assert_eq!(catalog::search("").len(), MAX_SEARCH_RESULTS);
    assert_eq!(catalog::search("").first().map(|e| e.key), Some("paris"));
    assert!(catalog::search("a").len() <= MAX_SEARCH_RESULTS);
}

#[test]
fn test_search_without_match() {
    assert!(catalog::search("zzz-nowhere").is_empty());
}

#[test]
fn test_choice_label() {
    let mumbai = catalog::lookup("mumbai").unwrap();
    assert_eq!(mumbai.choice_label(), "🇮🇳 Mumbai (UTC+5:30)");
}

#[test]
fn test_every_key_formats_with_its_name() {
    for entry in catalog::entries() {
        let label = format_label(entry.key).expect("catalog key should format");
        assert!(label.contains(entry.display_name), "{label}");
    }
}

#[rstest]
#[case("atlantis")]
#[case("")]
#[case("Europe/Paris")]
fn test_unknown_key_formats_to_none(#[case] key: &str) {
    assert_eq!(format_label(key), None);
}

#[rstest]
#[case("paris", 2024, 1, 15, 13, 37, "🕐 ・Paris 14:37")]
#[case("paris", 2024, 7, 15, 13, 37, "🕐 ・Paris 15:37")]
#[case("tokyo", 2024, 1, 15, 23, 5, "🕐 ・Tokyo 08:05")]
#[case("mumbai", 2024, 1, 15, 0, 0, "🕐 ・Mumbai 05:30")]
#[case("new_york", 2024, 1, 15, 3, 0, "🕐 ・New York 22:00")]
fn test_format_label_at(
    #[case] key: &str,
    #[case] year: i32,
    #[case] month: u32,
    #[case] day: u32,
    #[case] hour: u32,
    #[case] minute: u32,
    #[case] expected: &str,
) {
    let instant = Utc
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap();
    assert_eq!(format_label_at(key, instant).as_deref(), Some(expected));
}

#[test]
fn test_invalid_zone_renders_none() {
    let broken = TimezoneEntry {
        key: "broken",
        display_name: "Broken",
        iana_zone: "Mars/Olympus_Mons",
        symbol: "🔴",
        utc_label: "UTC+?",
    };
    assert_eq!(render_label(&broken, Utc::now()), None);
}
