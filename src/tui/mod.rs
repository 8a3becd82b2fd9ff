//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Terminal events and fetch results are handled on this thread, one at a
//! time, in arrival order. Background fetches report back through an
//! `mpsc` channel that is drained after the terminal events of each tick.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: waits up to 100ms for input and only redraws on events,
//!   fetch results or terminal resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
mod event;
mod ui;

use std::collections::HashMap;
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::SetCursorStyle;
use crossterm::execute;
use log::{debug, info};
use ratatui::widgets::ListState;

use crate::catalog::JellyfinClient;
use crate::core::action::update;
use crate::core::config::{self, ResolvedConfig};
use crate::core::effects::EffectRunner;
use crate::core::player::ExternalPlayer;
use crate::core::state::App;
use crate::core::view::View;
use crate::tui::event::{poll_event_immediate, poll_event_timeout, to_action};

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    /// Scroll offset per list view
    pub list_states: HashMap<View, ListState>,
    /// Animation state
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let profile = config::load_or_init(config.config_path.as_deref());
    info!("Using server {} and player {}", profile.server_url, config.player);
    let mut app = App::new(profile);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let runner = EffectRunner::new(
        Arc::new(JellyfinClient::new()),
        Box::new(ExternalPlayer::new(config.player.clone())),
        config.config_path.clone(),
        tx,
    );

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'event_loop: loop {
        let animating = app.any_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(100)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw.
        // Resize needs nothing beyond the redraw flagged here.
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = to_action(event, app.text_input_active()) else {
                continue;
            };
            let effect = update(&mut app, action);
            if runner.run(&mut app, effect) {
                break 'event_loop;
            }
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if runner.run(&mut app, effect) {
                break 'event_loop;
            }
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}
