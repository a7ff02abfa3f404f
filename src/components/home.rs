//! Home component - the single conference screen
//!
//! Displays the info card, speakers row, filter control, session list,
//! reviews, and the bottom action bar. Owns navigation state, the tag
//! filter, and per-session expansion.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, draw_info_card, draw_reviews, draw_speakers_row,
};
use crate::model::conference::{Session, SessionId, Tag};
use crate::model::domain::DomainState;
use crate::model::schedule::ScheduleState;
use anyhow::Result;
use chrono::NaiveTime;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Home Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Home component for the main screen.
/// Owns the schedule state and the session list selection.
pub struct HomeComponent {
    /// Tag filter and per-session expansion
    pub schedule: ScheduleState,

    /// Session list selection state
    pub list_state: ListState,

    /// Session flagged as next upcoming, refreshed on tick while the
    /// live indicator is on
    pub next_session: Option<SessionId>,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new(Tag::All)
    }
}

impl HomeComponent {
    pub fn new(initial_filter: Tag) -> Self {
        let mut schedule = ScheduleState::new();
        schedule.set_filter(initial_filter);
        Self {
            schedule,
            list_state: ListState::default(),
            next_session: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Get the currently selected session
    pub fn get_selected_session<'a>(&self, sessions: &'a [Session]) -> Option<&'a Session> {
        let visible = self.schedule.visible_sessions(sessions);
        visible.get(self.list_state.selected()?).copied()
    }

    /// Select next session in the visible list, wrapping to the first
    pub fn next(&mut self, sessions: &[Session]) {
        let count = self.schedule.visible_sessions(sessions).len();
        if count == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % count));
    }

    /// Select previous session in the visible list, wrapping to the last
    pub fn previous(&mut self, sessions: &[Session]) {
        let count = self.schedule.visible_sessions(sessions).len();
        if count == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state
            .select(Some((current + count - 1) % count));
    }

    /// Select the first visible session
    pub fn select_first(&mut self, sessions: &[Session]) {
        if self.schedule.visible_sessions(sessions).is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    /// Select the last visible session
    pub fn select_last(&mut self, sessions: &[Session]) {
        let count = self.schedule.visible_sessions(sessions).len();
        if count > 0 {
            self.list_state.select(Some(count - 1));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filter & Expansion
    // ─────────────────────────────────────────────────────────────────────────

    /// Set the tag filter, keeping the selection on the same session
    /// when it remains visible
    pub fn set_filter(&mut self, tag: Tag, sessions: &[Session]) {
        let selected_id = self.get_selected_session(sessions).map(|s| s.id);
        self.schedule.set_filter(tag);

        let visible = self.schedule.visible_sessions(sessions);
        let kept = selected_id.and_then(|id| visible.iter().position(|s| s.id == id));
        match kept {
            Some(idx) => self.list_state.select(Some(idx)),
            None => self.select_first(sessions),
        }
    }

    /// Cycle to the next filter in control order
    pub fn next_filter(&mut self, sessions: &[Session]) {
        self.set_filter(self.schedule.filter().next(), sessions);
    }

    /// Cycle to the previous filter in control order
    pub fn previous_filter(&mut self, sessions: &[Session]) {
        self.set_filter(self.schedule.filter().previous(), sessions);
    }

    /// Toggle detail expansion of the selected session
    pub fn toggle_expanded(&mut self, sessions: &[Session]) {
        if let Some(session) = self.get_selected_session(sessions) {
            let id = session.id;
            self.schedule.toggle_expanded(id);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Live Schedule
    // ─────────────────────────────────────────────────────────────────────────

    /// Flag the first session starting at or after `now`.
    /// Sessions keep program order, so the first match is the next one up.
    pub fn mark_next_session(&mut self, sessions: &[Session], now: NaiveTime) {
        self.next_session = sessions
            .iter()
            .find(|s| s.start_time().is_some_and(|t| t >= now))
            .map(|s| s.id);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ForceQuit)
            }

            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),

            // Filter
            KeyCode::Tab => Some(Action::NextFilter),
            KeyCode::BackTab => Some(Action::PrevFilter),
            KeyCode::Char('1') => Some(Action::SetFilter(Tag::All)),
            KeyCode::Char('2') => Some(Action::SetFilter(Tag::Keynote)),
            KeyCode::Char('3') => Some(Action::SetFilter(Tag::Workshop)),
            KeyCode::Char('4') => Some(Action::SetFilter(Tag::Networking)),

            // Expansion
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ToggleExpanded),

            // Action hooks
            KeyCode::Char('b') => Some(Action::BuyTickets),
            KeyCode::Char('c') => Some(Action::AddToCalendar),

            // Modals
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, _action: Action) -> Result<Option<Action>> {
        // Updates are handled by App which has access to the session list;
        // App calls the navigation methods directly
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes full context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for rendering the home screen
pub struct HomeRenderContext<'a> {
    pub domain: &'a DomainState,
    pub status_message: Option<&'a str>,
    pub clock: Option<NaiveTime>,
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let layout = calculate_main_layout(area);

    draw_info_card(frame, layout.info, &ctx.domain.info);
    draw_speakers_row(frame, layout.speakers, &ctx.domain.speakers);
    render_filter_tabs(frame, layout.filter, home);
    render_session_list(frame, layout.sessions, home, &ctx.domain.sessions);
    draw_reviews(frame, layout.reviews, &ctx.domain.reviews);
    render_bottom_bar(frame, layout.bottom, ctx);

    Ok(())
}

fn render_filter_tabs(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let titles: Vec<Line> = Tag::all()
        .iter()
        .map(|tag| Line::from(tag.label()))
        .collect();
    let selected = Tag::all()
        .iter()
        .position(|t| *t == home.schedule.filter())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title(" Schedule "))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" ");
    frame.render_widget(tabs, area);
}

fn render_session_list(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    sessions: &[Session],
) {
    let visible = home.schedule.visible_sessions(sessions);

    let items: Vec<ListItem> = visible
        .iter()
        .map(|session| {
            let expanded = home.schedule.is_expanded(session.id);
            let chevron = if expanded { "▾ " } else { "▸ " };
            let is_next = home.next_session == Some(session.id);

            let mut header = vec![
                Span::raw(chevron),
                Span::styled(
                    format!("{:>8}  ", session.time),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(
                    session.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  [{}]", session.tag),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            if is_next {
                header.push(Span::styled(
                    "  ● up next",
                    Style::default().fg(Color::Green),
                ));
            }

            let mut lines = vec![Line::from(header)];
            if expanded {
                lines.push(Line::from(Span::styled(
                    format!("            {}", session.description),
                    Style::default().fg(Color::Gray),
                )));
                lines.push(Line::from(Span::styled(
                    format!("            {}", session.room),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            ListItem::new(Text::from(lines))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Sessions ({}) ",
            visible.len()
        )))
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut home.list_state);
}

fn render_bottom_bar(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let mut spans = vec![
        Span::styled(" b ", Style::default().fg(Color::Yellow)),
        Span::raw("Buy Tickets  "),
        Span::styled(" c ", Style::default().fg(Color::Yellow)),
        Span::raw("Calendar  "),
    ];

    match ctx.status_message {
        Some(msg) => {
            spans.push(Span::styled("│ ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
        }
        None => {
            spans.extend([
                Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
                Span::raw("Navigate  "),
                Span::styled(" Enter ", Style::default().fg(Color::Cyan)),
                Span::raw("Expand  "),
                Span::styled(" Tab ", Style::default().fg(Color::Cyan)),
                Span::raw("Filter  "),
                Span::styled(" ? ", Style::default().fg(Color::Cyan)),
                Span::raw("Help  "),
                Span::styled(" q ", Style::default().fg(Color::Cyan)),
                Span::raw("Quit"),
            ]);
        }
    }

    if let Some(clock) = ctx.clock {
        spans.push(Span::styled(
            format!("   {}", clock.format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(bar, area);
}
