//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to child
//! components. App coordinates between components but does not render
//! anything itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, HelpDialog, HomeComponent, HomeRenderContext, QuitDialog,
};
use crate::config::Config;
use crate::model::domain::DomainState;
use crate::model::modal::{Modal, ModalStack};
use crate::services;
use anyhow::Result;
use chrono::Local;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::path::Path;

/// Main application state - coordinates between components
pub struct App {
    /// The loaded conference program
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message shown in the bottom bar
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,

    /// Loaded config, kept for the tick rate and startup filter
    pub config: Config,
}

impl App {
    /// Create a new App instance, loading the config and program
    pub fn new() -> Result<App> {
        let config = match Config::load() {
            Some(config) => config,
            None => {
                // First run: write the defaults so they can be edited
                let config = Config::default();
                let _ = config.save();
                config
            }
        };

        let domain = match &config.program_path {
            Some(path) => services::load_program_file(Path::new(path))?,
            None => services::load_default_program()?,
        };

        Ok(App {
            home: HomeComponent::new(config.initial_filter()),
            domain,
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            config,
        })
    }

    /// Refresh the up-next marker against the wall clock
    fn refresh_live_schedule(&mut self) {
        if self.domain.info.live_updates {
            self.home
                .mark_next_session(&self.domain.sessions, Local::now().time());
        }
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.home.select_first(&self.domain.sessions);
        self.refresh_live_schedule();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::Help { .. }) => self.help_dialog.handle_key_event(key),
            None => self.home.handle_key_event(key),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        // A fresh user action replaces any stale status note
        if !matches!(action, Action::Tick | Action::Resize(..)) {
            self.status_message = None;
        }

        match action {
            Action::Tick => self.refresh_live_schedule(),
            Action::Resize(..) => {}
            Action::Quit | Action::ForceQuit => self.should_quit = true,

            // Navigation
            Action::NextItem => self.home.next(&self.domain.sessions),
            Action::PrevItem => self.home.previous(&self.domain.sessions),
            Action::FirstItem => self.home.select_first(&self.domain.sessions),
            Action::LastItem => self.home.select_last(&self.domain.sessions),

            // Filter & expansion
            Action::SetFilter(tag) => self.home.set_filter(tag, &self.domain.sessions),
            Action::NextFilter => self.home.next_filter(&self.domain.sessions),
            Action::PrevFilter => self.home.previous_filter(&self.domain.sessions),
            Action::ToggleExpanded => self.home.toggle_expanded(&self.domain.sessions),

            // Modals
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => self.modals.push(Modal::Help { scroll_offset: 0 }),
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ModalUp => {
                if let Some(Modal::Help { scroll_offset }) = self.modals.top_mut() {
                    *scroll_offset = scroll_offset.saturating_sub(1);
                }
            }
            Action::ModalDown => {
                if let Some(Modal::Help { scroll_offset }) = self.modals.top_mut() {
                    *scroll_offset = HelpDialog::clamped(*scroll_offset + 1);
                }
            }

            // The two bottom actions have no behavior attached yet; the
            // status line notes that so the keys do not feel dead.
            Action::BuyTickets => {
                self.status_message = Some("Ticket sales are not open yet".to_string());
            }
            Action::AddToCalendar => {
                self.status_message = Some("Calendar export is not available yet".to_string());
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = HomeRenderContext {
            domain: &self.domain,
            status_message: self.status_message.as_deref(),
            clock: Some(Local::now().time()),
        };
        draw_home_screen(frame, area, &mut self.home, &ctx)?;

        // Modals are rendered bottom to top over the main screen
        if let Some(modal) = self.modals.top().cloned() {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::Help { scroll_offset } => {
                    self.help_dialog.scroll_offset = scroll_offset;
                    self.help_dialog.draw(frame, area)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::conference::Tag;

    fn app() -> App {
        let domain = crate::services::load_default_program().unwrap();
        let mut app = App {
            home: HomeComponent::new(Tag::All),
            domain,
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            config: Config::default(),
        };
        app.home.select_first(&app.domain.sessions);
        app
    }

    #[test]
    fn test_filter_actions_drive_visible_sessions() {
        let mut app = app();

        app.update(Action::SetFilter(Tag::Workshop)).unwrap();
        let titles: Vec<&str> = app
            .home
            .schedule
            .visible_sessions(&app.domain.sessions)
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Kotlin Multiplatform", "Cloud Scalability"]);

        app.update(Action::SetFilter(Tag::Keynote)).unwrap();
        let titles: Vec<&str> = app
            .home
            .schedule
            .visible_sessions(&app.domain.sessions)
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, vec!["The Future of AI"]);
    }

    #[test]
    fn test_toggle_expanded_survives_filter_change() {
        let mut app = app();

        app.update(Action::ToggleExpanded).unwrap();
        assert!(app.home.schedule.is_expanded(0));

        app.update(Action::NextFilter).unwrap();
        app.update(Action::SetFilter(Tag::All)).unwrap();
        assert!(app.home.schedule.is_expanded(0));
    }

    #[test]
    fn test_quit_flow() {
        let mut app = app();

        app.update(Action::OpenQuitDialog).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        assert!(!app.should_quit);

        app.update(Action::Quit).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_action_hooks_only_set_status() {
        let mut app = app();
        let before: Vec<String> = app.domain.sessions.iter().map(|s| s.title.clone()).collect();

        app.update(Action::BuyTickets).unwrap();
        assert!(app.status_message.is_some());

        app.update(Action::AddToCalendar).unwrap();
        assert!(app.status_message.is_some());

        let after: Vec<String> = app.domain.sessions.iter().map(|s| s.title.clone()).collect();
        assert_eq!(before, after);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_help_modal_scroll_clamps_at_top() {
        let mut app = app();

        app.update(Action::OpenHelp).unwrap();
        app.update(Action::ModalUp).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::Help { scroll_offset: 0 }));

        app.update(Action::ModalDown).unwrap();
        assert_eq!(app.modals.top(), Some(&Modal::Help { scroll_offset: 1 }));

        app.update(Action::CloseModal).unwrap();
        assert!(app.modals.is_empty());
    }
}
