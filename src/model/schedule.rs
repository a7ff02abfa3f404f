//! Schedule state - the tag filter and per-session expansion
//!
//! This is the only piece of the app with real decision logic. The
//! rendering layer reads `visible_sessions` and `is_expanded` on every
//! draw; everything else is a pure function of the program data.

use super::conference::{Session, SessionId, Tag};
use std::collections::HashSet;

/// Filter and expansion state for the schedule section
#[derive(Debug, Default)]
pub struct ScheduleState {
    /// Currently selected tag filter
    filter: Tag,

    /// Ids of sessions whose detail is expanded; absent means collapsed
    expanded: HashSet<SessionId>,
}

impl ScheduleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> Tag {
        self.filter
    }

    /// Replace the tag filter. Expansion state is untouched.
    pub fn set_filter(&mut self, tag: Tag) {
        self.filter = tag;
    }

    /// Sessions matching the current filter, in original program order.
    ///
    /// `Tag::All` matches every session regardless of its own tag; any
    /// other filter matches by exact tag equality. No sorting, stable.
    pub fn visible_sessions<'a>(&self, sessions: &'a [Session]) -> Vec<&'a Session> {
        sessions
            .iter()
            .filter(|s| self.filter == Tag::All || s.tag == self.filter)
            .collect()
    }

    /// Flip one session's expansion; all other sessions are unaffected
    pub fn toggle_expanded(&mut self, id: SessionId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn is_expanded(&self, id: SessionId) -> bool {
        self.expanded.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: SessionId, title: &str, tag: Tag) -> Session {
        Session {
            id,
            time: "9:00 AM".to_string(),
            title: title.to_string(),
            tag,
            description: String::new(),
            room: String::new(),
        }
    }

    /// The five-session sample set from the default program
    fn sample_sessions() -> Vec<Session> {
        vec![
            session(0, "Opening Ceremony", Tag::All),
            session(1, "The Future of AI", Tag::Keynote),
            session(2, "Kotlin Multiplatform", Tag::Workshop),
            session(3, "Lunch & Connect", Tag::Networking),
            session(4, "Cloud Scalability", Tag::Workshop),
        ]
    }

    fn titles(visible: &[&Session]) -> Vec<String> {
        visible.iter().map(|s| s.title.clone()).collect()
    }

    #[test]
    fn test_default_filter_shows_all_in_order() {
        let sessions = sample_sessions();
        let state = ScheduleState::new();

        assert_eq!(state.filter(), Tag::All);
        let visible = state.visible_sessions(&sessions);
        assert_eq!(visible.len(), sessions.len());
        assert_eq!(
            titles(&visible),
            vec![
                "Opening Ceremony",
                "The Future of AI",
                "Kotlin Multiplatform",
                "Lunch & Connect",
                "Cloud Scalability"
            ]
        );
    }

    #[test]
    fn test_every_session_visible_under_its_own_tag() {
        let sessions = sample_sessions();
        let mut state = ScheduleState::new();

        for s in &sessions {
            state.set_filter(s.tag);
            let visible = state.visible_sessions(&sessions);
            assert!(
                visible.iter().any(|v| v.id == s.id),
                "session {:?} not visible under its own tag",
                s.title
            );
        }
    }

    #[test]
    fn test_non_all_filter_matches_exactly() {
        let sessions = sample_sessions();
        let mut state = ScheduleState::new();

        for tag in [Tag::Keynote, Tag::Workshop, Tag::Networking] {
            state.set_filter(tag);
            let visible = state.visible_sessions(&sessions);
            assert!(visible.iter().all(|s| s.tag == tag));
            let expected = sessions.iter().filter(|s| s.tag == tag).count();
            assert_eq!(visible.len(), expected);
        }
    }

    #[test]
    fn test_workshop_and_keynote_scenario() {
        let sessions = sample_sessions();
        let mut state = ScheduleState::new();

        state.set_filter(Tag::Workshop);
        assert_eq!(
            titles(&state.visible_sessions(&sessions)),
            vec!["Kotlin Multiplatform", "Cloud Scalability"]
        );

        state.set_filter(Tag::Keynote);
        assert_eq!(
            titles(&state.visible_sessions(&sessions)),
            vec!["The Future of AI"]
        );
    }

    #[test]
    fn test_all_after_filter_changes_restores_full_list() {
        let sessions = sample_sessions();
        let mut state = ScheduleState::new();

        state.set_filter(Tag::Workshop);
        state.set_filter(Tag::Networking);
        state.set_filter(Tag::All);

        let visible = state.visible_sessions(&sessions);
        let all: Vec<&Session> = sessions.iter().collect();
        assert_eq!(titles(&visible), titles(&all));
    }

    #[test]
    fn test_toggle_expanded_is_involution() {
        let mut state = ScheduleState::new();

        assert!(!state.is_expanded(2));
        state.toggle_expanded(2);
        assert!(state.is_expanded(2));
        // Other sessions untouched
        for id in [0, 1, 3, 4] {
            assert!(!state.is_expanded(id));
        }

        state.toggle_expanded(2);
        assert!(!state.is_expanded(2));
    }

    #[test]
    fn test_filter_changes_do_not_affect_expansion() {
        let mut state = ScheduleState::new();

        state.toggle_expanded(1);
        state.set_filter(Tag::Workshop);
        state.set_filter(Tag::Networking);
        state.set_filter(Tag::All);

        assert!(state.is_expanded(1));
        assert!(!state.is_expanded(0));
    }

    #[test]
    fn test_expansion_does_not_affect_filtering() {
        let sessions = sample_sessions();
        let mut state = ScheduleState::new();

        state.set_filter(Tag::Workshop);
        let before = titles(&state.visible_sessions(&sessions));
        state.toggle_expanded(0);
        state.toggle_expanded(4);
        let after = titles(&state.visible_sessions(&sessions));
        assert_eq!(before, after);
    }

}
