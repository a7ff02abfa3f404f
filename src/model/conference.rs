//! Data model for the conference program (info, speakers, sessions, reviews)

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable session identifier, assigned in program order at load time.
///
/// The filtered session list reorders and removes entries, so per-session
/// state (expansion) is keyed by this id, never by list index.
pub type SessionId = usize;

/// Session category used as the sole filter key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tag {
    #[default]
    All,
    Keynote,
    Workshop,
    Networking,
}

impl Tag {
    /// All tags in filter-control order
    pub fn all() -> [Tag; 4] {
        [Tag::All, Tag::Keynote, Tag::Workshop, Tag::Networking]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tag::All => "ALL",
            Tag::Keynote => "KEYNOTE",
            Tag::Workshop => "WORKSHOP",
            Tag::Networking => "NETWORKING",
        }
    }

    /// Next tag in filter-control order, wrapping around
    pub fn next(&self) -> Tag {
        let tags = Tag::all();
        let idx = tags.iter().position(|t| t == self).unwrap_or(0);
        tags[(idx + 1) % tags.len()]
    }

    /// Previous tag in filter-control order, wrapping around
    pub fn previous(&self) -> Tag {
        let tags = Tag::all();
        let idx = tags.iter().position(|t| t == self).unwrap_or(0);
        tags[(idx + tags.len() - 1) % tags.len()]
    }
}

impl FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ALL" => Ok(Tag::All),
            "KEYNOTE" => Ok(Tag::Keynote),
            "WORKSHOP" => Ok(Tag::Workshop),
            "NETWORKING" => Ok(Tag::Networking),
            other => Err(format!("unknown tag: {}", other)),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A featured speaker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub role: String,
}

/// A scheduled session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Stable id assigned at load time (program order)
    #[serde(default)]
    pub id: SessionId,
    pub time: String,
    pub title: String,
    pub tag: Tag,
    pub description: String,
    pub room: String,
}

impl Session {
    /// Parse the display time ("9:00 AM") for upcoming-session highlighting.
    /// Returns None when the time string is free-form.
    pub fn start_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(self.time.trim(), "%l:%M %p").ok()
    }
}

/// An attendee review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub text: String,
    /// Star rating, 1-5
    pub stars: u8,
}

impl Review {
    /// Star glyphs for display, clamped to 1-5
    pub fn stars_display(&self) -> String {
        "★".repeat(self.stars.clamp(1, 5) as usize)
    }
}

/// Top-level conference details shown in the info card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceInfo {
    pub name: String,
    pub location: String,
    pub distance: String,
    pub blurb: String,
    #[serde(default)]
    pub live_updates: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_from_str() {
        assert_eq!("ALL".parse::<Tag>(), Ok(Tag::All));
        assert_eq!("keynote".parse::<Tag>(), Ok(Tag::Keynote));
        assert_eq!("Workshop".parse::<Tag>(), Ok(Tag::Workshop));
        assert_eq!("NETWORKING".parse::<Tag>(), Ok(Tag::Networking));
        assert!("PANEL".parse::<Tag>().is_err());
    }

    #[test]
    fn test_tag_cycle_wraps() {
        assert_eq!(Tag::All.next(), Tag::Keynote);
        assert_eq!(Tag::Networking.next(), Tag::All);
        assert_eq!(Tag::All.previous(), Tag::Networking);
        assert_eq!(Tag::Keynote.previous(), Tag::All);
    }

    #[test]
    fn test_session_start_time() {
        let session = Session {
            id: 0,
            time: "9:00 AM".to_string(),
            title: "Opening Ceremony".to_string(),
            tag: Tag::All,
            description: "Kick-off for the event.".to_string(),
            room: "Main Hall".to_string(),
        };
        assert_eq!(
            session.start_time(),
            NaiveTime::from_hms_opt(9, 0, 0)
        );

        let vague = Session {
            time: "morning".to_string(),
            ..session
        };
        assert_eq!(vague.start_time(), None);
    }

    #[test]
    fn test_review_stars_display() {
        let review = Review {
            name: "Alice Johnson".to_string(),
            text: "Great event!".to_string(),
            stars: 5,
        };
        assert_eq!(review.stars_display(), "★★★★★");

        let clamped = Review { stars: 9, ..review };
        assert_eq!(clamped.stars_display(), "★★★★★");
    }
}
