//! Conference program loading
//!
//! The program ships embedded in the binary; a config `program_path`
//! can point at an external JSON file with the same shape.

use crate::model::conference::{ConferenceInfo, Review, Session, Speaker};
use crate::model::domain::DomainState;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default program bundled with the binary
const DEFAULT_PROGRAM: &str = include_str!("../../data/program.json");

/// On-disk shape of a program file
#[derive(Debug, Deserialize)]
struct ProgramFile {
    info: ConferenceInfo,
    #[serde(default)]
    speakers: Vec<Speaker>,
    #[serde(default)]
    sessions: Vec<Session>,
    #[serde(default)]
    reviews: Vec<Review>,
}

fn into_domain(mut program: ProgramFile) -> DomainState {
    // Stable ids in file order; filtering reorders the visible list,
    // so expansion state must never key off a list index.
    for (id, session) in program.sessions.iter_mut().enumerate() {
        session.id = id;
    }

    DomainState {
        info: program.info,
        speakers: program.speakers,
        sessions: program.sessions,
        reviews: program.reviews,
    }
}

/// Load the embedded sample program
pub fn load_default_program() -> Result<DomainState> {
    let program: ProgramFile =
        serde_json::from_str(DEFAULT_PROGRAM).context("embedded program.json is invalid")?;
    Ok(into_domain(program))
}

/// Load a program from an external JSON file
pub fn load_program_file(path: &Path) -> Result<DomainState> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read program file: {}", path.display()))?;
    let program: ProgramFile = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse program file: {}", path.display()))?;
    Ok(into_domain(program))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::conference::Tag;

    #[test]
    fn test_default_program_loads() {
        let domain = load_default_program().unwrap();

        assert_eq!(domain.info.name, "Tech Conference 2025");
        assert!(domain.info.live_updates);
        assert_eq!(domain.speakers.len(), 3);
        assert_eq!(domain.sessions.len(), 5);
        assert_eq!(domain.reviews.len(), 3);
    }

    #[test]
    fn test_default_program_session_ids_follow_file_order() {
        let domain = load_default_program().unwrap();

        for (idx, session) in domain.sessions.iter().enumerate() {
            assert_eq!(session.id, idx);
        }
        assert_eq!(domain.sessions[0].title, "Opening Ceremony");
        assert_eq!(domain.sessions[4].title, "Cloud Scalability");
    }

    #[test]
    fn test_default_program_tags() {
        let domain = load_default_program().unwrap();

        let tags: Vec<Tag> = domain.sessions.iter().map(|s| s.tag).collect();
        assert_eq!(
            tags,
            vec![
                Tag::All,
                Tag::Keynote,
                Tag::Workshop,
                Tag::Networking,
                Tag::Workshop
            ]
        );
    }

    #[test]
    fn test_missing_program_file_errors() {
        let result = load_program_file(Path::new("/nonexistent/program.json"));
        assert!(result.is_err());
    }
}
