//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `DomainState` - The loaded conference program (info, speakers, sessions, reviews)
//! - `ScheduleState` - Filter and expansion state for the schedule section
//! - `ModalStack` - Modal overlay management

pub mod conference;
pub mod domain;
pub mod modal;
pub mod schedule;

// Re-export commonly used types
pub use conference::{ConferenceInfo, Review, Session, SessionId, Speaker, Tag};
pub use domain::DomainState;
pub use modal::{Modal, ModalStack};
pub use schedule::ScheduleState;
