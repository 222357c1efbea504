//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screens,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 250ms and only redraws on input, resize, or a
//!   change published by the catalog view-model.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::widgets::ListState;

use crate::catalog::HttpCatalogService;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::transport::HttpTransport;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub list_state: ListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Maps a terminal event to the core action it stands for.
fn action_for(event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Up => Some(Action::SelectPrevious),
        TuiEvent::Down => Some(Action::SelectNext),
        TuiEvent::Enter => Some(Action::OpenSelected),
        TuiEvent::Back => Some(Action::Back),
        TuiEvent::Home => Some(Action::PopToRoot),
        TuiEvent::Refresh => Some(Action::Load),
        TuiEvent::Resize => None,
    }
}

fn start_load(app: &App) {
    // Completion shows up through the view-model subscription.
    if app.catalog.load().is_some() {
        info!("Catalog load dispatched");
    }
}

/// Runs the UI until the user quits. Must be called inside a tokio runtime.
pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let service = Arc::new(HttpCatalogService::with_transport(
        HttpTransport::new(),
        config.catalog_url,
        config.timeout,
    ));
    let mut app = App::new(service);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut catalog_rx = app.catalog.subscribe();

    // The list screen appears: reset navigation and fetch
    app.coordinator.start();
    start_load(app);

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.catalog.state().is_loading();
        if animating {
            needs_redraw = true;
        }

        if catalog_rx.has_changed().unwrap_or(false) {
            catalog_rx.borrow_and_update();
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain everything pending before the next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = action_for(event) else {
                continue;
            };
            match update(app, action) {
                Effect::Quit => should_quit = true,
                Effect::StartLoad => start_load(app),
                Effect::None => {}
            }
        }

        if should_quit {
            debug!("Quit requested");
            break;
        }
    }

    Ok(())
}
