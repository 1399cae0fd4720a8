//! Application state composition.
//!
//! ```text
//! AppState
//! ├── session: SessionStore   (current actor, persisted record)
//! ├── nav: NavState           (current screen, in-flight transition)
//! ├── auth_form: AuthFormState (signup form values/errors)
//! ├── task_seq: TaskSeq       (generation counter for scheduled tasks)
//! └── notice: Option<Notice>  (transient status banner)
//! ```
//!
//! All mutations happen in the reducer (`update`); the runtime executes the
//! effects it returns.

use std::time::{Duration, Instant};

use seha_core::config::Config;
use seha_core::session::{Role, SessionStore};

use crate::auth_form::AuthFormState;
use crate::common::TaskSeq;
use crate::nav::NavState;

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

/// A transient status banner, auto-dismissed after its duration.
#[derive(Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    shown_at: Instant,
    duration: Duration,
}

impl Notice {
    pub fn new(kind: NoticeKind, text: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind,
            text: text.into(),
            shown_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.duration
    }
}

pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    pub config: Config,
    /// Session store (in-memory session + persisted record).
    pub session: SessionStore,
    /// Navigation state (current screen, in-flight transition).
    pub nav: NavState,
    pub auth_form: AuthFormState,
    /// Selected sidebar entry on authenticated screens.
    pub sidebar_index: usize,
    /// Id generator for scheduled simulated-latency tasks.
    pub task_seq: TaskSeq,
    pub notice: Option<Notice>,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl AppState {
    /// Creates the state; the initial screen follows the persisted session.
    pub fn new(config: Config, session: SessionStore) -> Self {
        let role = session.current().map(|s| s.role);
        Self {
            should_quit: false,
            config,
            session,
            nav: NavState::new(role),
            auth_form: AuthFormState::default(),
            sidebar_index: 0,
            task_seq: TaskSeq::default(),
            notice: None,
            spinner_frame: 0,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.session.current().map(|s| s.role)
    }

    pub fn set_notice(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice::new(kind, text, self.config.notice_duration()));
    }
}
