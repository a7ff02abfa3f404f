//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod help_dialog;
pub mod home;
pub mod info;
pub mod layout;
pub mod quit_dialog;
pub mod reviews;
pub mod speakers;

pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use info::draw_info_card;
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
pub use reviews::draw_reviews;
pub use speakers::draw_speakers_row;
