//! Typed forms of the bot's activity and online status.

use std::fmt;
use std::str::FromStr;

use serenity::gateway::ActivityData;
use voiceclock_core::errors::{ClockError, ClockResult};

/// Longest activity text the platform accepts.
pub const MAX_ACTIVITY_TEXT: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Playing,
    Listening,
    Watching,
    Competing,
    Streaming,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 5] = [
        ActivityKind::Playing,
        ActivityKind::Listening,
        ActivityKind::Watching,
        ActivityKind::Competing,
        ActivityKind::Streaming,
    ];

    /// Value used in command choices and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Playing => "playing",
            ActivityKind::Listening => "listening",
            ActivityKind::Watching => "watching",
            ActivityKind::Competing => "competing",
            ActivityKind::Streaming => "streaming",
        }
    }

    /// Verb shown to users.
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Playing => "Playing",
            ActivityKind::Listening => "Listening to",
            ActivityKind::Watching => "Watching",
            ActivityKind::Competing => "Competing in",
            ActivityKind::Streaming => "Streaming",
        }
    }
}

impl FromStr for ActivityKind {
    type Err = ClockError;

    fn from_str(s: &str) -> ClockResult<Self> {
        ActivityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ClockError::Validation(format!("Unknown activity type: {s}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub text: String,
    pub url: Option<String>,
}

impl Activity {
    /// Validate and build an activity. Streaming requires a stream URL; the URL
    /// is ignored for every other kind.
    pub fn new(kind: ActivityKind, text: impl Into<String>, url: Option<String>) -> ClockResult<Self> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(ClockError::Validation(
                "Activity description cannot be empty".to_string(),
            ));
        }
        if text.chars().count() > MAX_ACTIVITY_TEXT {
            return Err(ClockError::Validation(format!(
                "Activity description is limited to {MAX_ACTIVITY_TEXT} characters"
            )));
        }

        let url = url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty());
        let url = match kind {
            ActivityKind::Streaming if url.is_none() => {
                return Err(ClockError::Validation(
                    "Streaming requires a stream URL (Twitch or YouTube)".to_string(),
                ));
            }
            ActivityKind::Streaming => url,
            _ => None,
        };

        Ok(Self { kind, text, url })
    }

    pub fn to_activity_data(&self) -> ClockResult<ActivityData> {
        let data = match self.kind {
            ActivityKind::Playing => ActivityData::playing(&self.text),
            ActivityKind::Listening => ActivityData::listening(&self.text),
            ActivityKind::Watching => ActivityData::watching(&self.text),
            ActivityKind::Competing => ActivityData::competing(&self.text),
            ActivityKind::Streaming => {
                let url = self.url.as_deref().unwrap_or_default();
                ActivityData::streaming(&self.text, url)
                    .map_err(|e| ClockError::Validation(format!("Invalid stream URL: {e}")))?
            }
        };

        Ok(data)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}** {}", self.kind.label(), self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceStatus {
    Online,
    Idle,
    DoNotDisturb,
    Invisible,
}

impl PresenceStatus {
    pub const ALL: [PresenceStatus; 4] = [
        PresenceStatus::Online,
        PresenceStatus::Idle,
        PresenceStatus::DoNotDisturb,
        PresenceStatus::Invisible,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PresenceStatus::Online => "online",
            PresenceStatus::Idle => "idle",
            PresenceStatus::DoNotDisturb => "dnd",
            PresenceStatus::Invisible => "invisible",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PresenceStatus::Online => "Online",
            PresenceStatus::Idle => "Idle",
            PresenceStatus::DoNotDisturb => "Do Not Disturb",
            PresenceStatus::Invisible => "Invisible",
        }
    }
}

impl FromStr for PresenceStatus {
    type Err = ClockError;

    fn from_str(s: &str) -> ClockResult<Self> {
        PresenceStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ClockError::Validation(format!("Unknown status: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_activity_display() {
        let activity = Activity::new(ActivityKind::Listening, "  the hours ", None).unwrap();
        assert_eq!(activity.to_string(), "**Listening to** the hours");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_empty_activity_text_is_rejected(#[case] text: &str) {
        assert!(Activity::new(ActivityKind::Playing, text, None).is_err());
    }

    #[test]
    fn test_activity_text_limit() {
        let longest = "x".repeat(MAX_ACTIVITY_TEXT);
        assert!(Activity::new(ActivityKind::Playing, longest.clone(), None).is_ok());
        assert!(Activity::new(ActivityKind::Playing, longest + "x", None).is_err());
    }

    #[test]
    fn test_streaming_activity_data() {
        let activity = Activity::new(
            ActivityKind::Streaming,
            "live",
            Some("https://twitch.tv/someone".to_string()),
        )
        .unwrap();

        let data = activity.to_activity_data().unwrap();
        assert_eq!(data.name, "live");
        assert!(data.url.is_some());
    }

    #[rstest]
    #[case("playing", ActivityKind::Playing)]
    #[case("Competing", ActivityKind::Competing)]
    #[case(" streaming ", ActivityKind::Streaming)]
    fn test_activity_kind_from_str(#[case] raw: &str, #[case] expected: ActivityKind) {
        assert_eq!(raw.parse::<ActivityKind>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_kinds_are_rejected() {
        assert!("dancing".parse::<ActivityKind>().is_err());
        assert!("away".parse::<PresenceStatus>().is_err());
    }
}
