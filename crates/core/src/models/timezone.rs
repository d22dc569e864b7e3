use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimezoneEntry {
    pub key: &'static str,
    pub display_name: &'static str,
    pub iana_zone: &'static str,
    pub symbol: &'static str,
    /// Informational only, never used to compute the time.
    pub utc_label: &'static str,
}

impl TimezoneEntry {
    /// Line shown in autocomplete suggestions and listings.
    pub fn choice_label(&self) -> String {
        format!("{} {} ({})", self.symbol, self.display_name, self.utc_label)
    }
}
