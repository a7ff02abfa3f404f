//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::conference::Tag;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit immediately without confirmation
    ForceQuit,
    /// Quit after the confirmation dialog accepted
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next session in the schedule list
    NextItem,
    /// Move to previous session in the schedule list
    PrevItem,
    /// Jump to first session
    FirstItem,
    /// Jump to last session
    LastItem,

    // ─────────────────────────────────────────────────────────────────────────
    // Schedule Filter & Expansion
    // ─────────────────────────────────────────────────────────────────────────
    /// Set the tag filter directly
    SetFilter(Tag),
    /// Cycle to the next tag filter
    NextFilter,
    /// Cycle to the previous tag filter
    PrevFilter,
    /// Toggle detail expansion of the selected session
    ToggleExpanded,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Scroll up within the current modal
    ModalUp,
    /// Scroll down within the current modal
    ModalDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Action Hooks
    // ─────────────────────────────────────────────────────────────────────────
    /// Buy tickets hook (no behavior attached yet)
    BuyTickets,
    /// Calendar hook (no behavior attached yet)
    AddToCalendar,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::Quit => write!(f, "Quit"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::SetFilter(tag) => write!(f, "SetFilter({})", tag),
            Action::NextFilter => write!(f, "NextFilter"),
            Action::PrevFilter => write!(f, "PrevFilter"),
            Action::ToggleExpanded => write!(f, "ToggleExpanded"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
            Action::BuyTickets => write!(f, "BuyTickets"),
            Action::AddToCalendar => write!(f, "AddToCalendar"),
        }
    }
}
