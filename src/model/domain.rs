//! Domain state - the loaded conference program, separate from UI concerns

use super::conference::{ConferenceInfo, Review, Session, Speaker};

/// The full conference program as loaded at startup.
///
/// Everything here is immutable for the lifetime of the process; all
/// mutable state lives in `ScheduleState` and the components.
#[derive(Debug, Clone)]
pub struct DomainState {
    pub info: ConferenceInfo,
    pub speakers: Vec<Speaker>,
    pub sessions: Vec<Session>,
    pub reviews: Vec<Review>,
}
