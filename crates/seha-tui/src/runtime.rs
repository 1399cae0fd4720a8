//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! Scheduled simulated-latency tasks (navigation delay, dashboard data
//! fetch) are spawned here and post their completion events to an inbox
//! channel the event loop drains each frame.

use std::io::Stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use seha_core::config::Config;
use seha_core::screen::Screen;
use seha_core::session::SessionStore;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::common::TaskId;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Target frame rate while something is animating (spinner, transitions).
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Poll duration when idle. Longer timeout reduces CPU usage.
const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

type UiEventSender = mpsc::UnboundedSender<UiEvent>;
type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop or panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    /// Inbox sender - scheduled tasks send completion events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - the event loop drains this each frame.
    inbox_rx: UiEventReceiver,
    last_tick: std::time::Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    pub fn new(config: Config, session: SessionStore) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(config, session);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
            last_tick: std::time::Instant::now(),
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Only Tick triggers a render - this caps the frame rate.
                let marks_dirty = matches!(&event, UiEvent::Tick);
                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects events from the terminal and the inbox.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast polling only while something animates.
        let needs_fast_poll = self.state.nav.is_transitioning()
            || self.state.nav.data_pending.is_some()
            || self.state.notice.is_some();
        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        if !effects.is_empty() {
            self.execute_effects(effects);
        }
    }

    /// Spawns a cancellable delay that posts `done` to the inbox on expiry.
    fn spawn_delay(&self, delay: Duration, cancel: CancellationToken, done: UiEvent) {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                () = cancel.cancelled() => {}
                () = tokio::time::sleep(delay) => {
                    let _ = tx.send(done);
                }
            }
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }

            // Session mutations: the store persists synchronously, then the
            // reducer recomputes the screen from the new session state.
            UiEffect::Login { role } => {
                self.state.session.login(role);
                tracing::info!(role = %role, "mock login");
                self.dispatch_event(UiEvent::SessionChanged);
            }
            UiEffect::Logout => {
                self.state.session.logout();
                tracing::info!("logout");
                self.dispatch_event(UiEvent::SessionChanged);
            }

            // Simulated latency tasks.
            UiEffect::ScheduleNavigation { id, target, cancel } => {
                self.schedule_navigation(id, target, cancel);
            }
            UiEffect::ScheduleDataFetch { id, cancel } => {
                let delay = self.state.config.data_delay();
                self.spawn_delay(delay, cancel, UiEvent::DataReady { id });
            }
            UiEffect::CancelTransition { token } => {
                token.cancel();
            }
        }
    }

    fn schedule_navigation(&mut self, id: TaskId, target: Screen, cancel: CancellationToken) {
        let delay = self.state.config.navigation_delay();
        tracing::debug!(target = %target, ?delay, "navigation scheduled");
        self.spawn_delay(delay, cancel, UiEvent::NavigationArrived { id, target });
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
