//! The reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. This is the single source of truth
//! for how events modify state, including the navigation state machine:
//!
//! - explicit `navigate` requests go through a scheduled delay and can be
//!   superseded (last navigate wins),
//! - session changes force the screen immediately, bypassing the delay.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use seha_core::screen::{self, Screen};
use tokio_util::sync::CancellationToken;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::nav::{NavState, PendingNav, View};
use crate::state::{AppState, NoticeKind};

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            if app.notice.as_ref().is_some_and(crate::state::Notice::is_expired) {
                app.notice = None;
            }
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, &term_event),
        UiEvent::NavigationArrived { id, target } => {
            // Stale arrivals carry a superseded id and are dropped.
            let Some(pending) = &app.nav.pending else {
                return vec![];
            };
            if pending.id != id {
                return vec![];
            }
            app.nav.pending = None;
            app.nav.current = target;
            sync_sidebar(app);
            start_data_fetch_if_dashboard(app)
        }
        UiEvent::DataReady { id } => {
            if app.nav.data_pending == Some(id) {
                app.nav.data_pending = None;
            }
            vec![]
        }
        UiEvent::SessionChanged => on_session_changed(app),
    }
}

/// Begins a delayed transition to `target`, superseding any in-flight one.
pub fn start_navigation(app: &mut AppState, target: Screen) -> Vec<UiEffect> {
    let target = NavState::clamp_target(target, app.role());
    let mut effects = Vec::new();

    if let Some(previous) = app.nav.pending.take() {
        effects.push(UiEffect::CancelTransition { token: previous.cancel });
    }
    app.nav.data_pending = None;

    let id = app.task_seq.next_id();
    let cancel = CancellationToken::new();
    app.nav.pending = Some(PendingNav { id, target, cancel: cancel.clone() });
    effects.push(UiEffect::ScheduleNavigation { id, target, cancel });
    effects
}

/// Forced recompute after the session store changed.
///
/// Direct state assignment, not a navigate call: login already implies the
/// user's intent, and logout must land on the landing page immediately.
fn on_session_changed(app: &mut AppState) -> Vec<UiEffect> {
    let mut effects = Vec::new();

    match app.session.current() {
        Some(session) => {
            if let Some(token) = app.nav.force(Screen::dashboard(session.role)) {
                effects.push(UiEffect::CancelTransition { token });
            }
            app.set_notice(NoticeKind::Success, format!("Signed in as {}", session.name));
            app.auth_form.reset();
            sync_sidebar(app);
            effects.extend(start_data_fetch_if_dashboard(app));
        }
        None => {
            if let Some(token) = app.nav.force(Screen::Landing) {
                effects.push(UiEffect::CancelTransition { token });
            }
            app.set_notice(NoticeKind::Info, "Signed out");
        }
    }

    effects
}

/// Kicks off the dashboard shimmer when the settled screen is a dashboard.
fn start_data_fetch_if_dashboard(app: &mut AppState) -> Vec<UiEffect> {
    if !matches!(app.nav.current, Screen::PatientDashboard | Screen::DoctorDashboard) {
        return vec![];
    }
    let id = app.task_seq.next_id();
    app.nav.data_pending = Some(id);
    vec![UiEffect::ScheduleDataFetch { id, cancel: CancellationToken::new() }]
}

/// Aligns the sidebar selection with the current screen.
fn sync_sidebar(app: &mut AppState) {
    if let Some(role) = app.role() {
        app.sidebar_index = screen::links_for(role)
            .iter()
            .position(|link| link.screen == app.nav.current)
            .unwrap_or(0);
    }
}

fn handle_terminal_event(app: &mut AppState, event: &Event) -> Vec<UiEffect> {
    let Event::Key(key) = event else {
        return vec![];
    };
    if key.kind != KeyEventKind::Press {
        return vec![];
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    match app.nav.resolve(app.role()) {
        // Input during the loading placeholder is dropped (except quit).
        View::Loading => vec![],
        View::Screen(Screen::Landing) => handle_landing_key(app, key),
        View::Screen(Screen::Auth) => handle_auth_key(app, key),
        View::Screen(_) => handle_app_key(app, key),
    }
}

fn handle_landing_key(app: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('s') => start_navigation(app, Screen::Auth),
        KeyCode::Char('q') => vec![UiEffect::Quit],
        _ => vec![],
    }
}

fn handle_auth_key(app: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc => start_navigation(app, Screen::Landing),
        KeyCode::Tab | KeyCode::Down => {
            app.auth_form.focus_next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.auth_form.focus_prev();
            vec![]
        }
        KeyCode::Left | KeyCode::Right if app.auth_form.on_role_toggle() => {
            app.auth_form.toggle_role();
            vec![]
        }
        KeyCode::Enter => {
            let role = app.auth_form.submit();
            if !app.auth_form.errors.is_empty() {
                // Advisory only: flag the fields, sign in anyway.
                app.set_notice(NoticeKind::Warning, "Some fields need attention");
            }
            vec![UiEffect::Login { role }]
        }
        KeyCode::Backspace => {
            app.auth_form.backspace();
            vec![]
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.auth_form.insert_char(c);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_app_key(app: &mut AppState, key: &KeyEvent) -> Vec<UiEffect> {
    let Some(role) = app.role() else {
        return vec![];
    };
    let links = screen::links_for(role);

    match key.code {
        KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Char('l') => vec![UiEffect::Logout],
        KeyCode::Up => {
            app.sidebar_index = app.sidebar_index.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            app.sidebar_index = (app.sidebar_index + 1).min(links.len() - 1);
            vec![]
        }
        KeyCode::Enter => start_navigation(app, links[app.sidebar_index].screen),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let index = (c as usize).wrapping_sub('1' as usize);
            match links.get(index) {
                Some(link) => start_navigation(app, link.screen),
                None => vec![],
            }
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use seha_core::config::Config;
    use seha_core::session::{Role, SessionStore};
    use tempfile::TempDir;

    use super::*;

    fn app() -> (AppState, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::load_from(dir.path());
        (AppState::new(Config::default(), store), dir)
    }

    fn arrive(app: &mut AppState) {
        let pending = app.nav.pending.clone().expect("transition in flight");
        let effects = update(app, UiEvent::NavigationArrived { id: pending.id, target: pending.target });
        // Consume the dashboard shimmer like the runtime would.
        for effect in effects {
            if let UiEffect::ScheduleDataFetch { id, .. } = effect {
                update(app, UiEvent::DataReady { id });
            }
        }
    }

    /// Mirrors the runtime's handling of Login/Logout effects.
    fn settle_session_effects(app: &mut AppState, effects: Vec<UiEffect>) {
        for effect in effects {
            match effect {
                UiEffect::Login { role } => {
                    app.session.login(role);
                    let follow_up = update(app, UiEvent::SessionChanged);
                    settle_session_effects(app, follow_up);
                }
                UiEffect::Logout => {
                    app.session.logout();
                    let follow_up = update(app, UiEvent::SessionChanged);
                    settle_session_effects(app, follow_up);
                }
                UiEffect::ScheduleDataFetch { id, .. } => {
                    update(app, UiEvent::DataReady { id });
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_login_forces_role_dashboard_without_navigate() {
        for (role, dashboard) in [
            (Role::Patient, Screen::PatientDashboard),
            (Role::Doctor, Screen::DoctorDashboard),
        ] {
            let (mut app, _dir) = app();
            settle_session_effects(&mut app, vec![UiEffect::Login { role }]);
            assert_eq!(app.nav.current, dashboard);
            assert!(!app.nav.is_transitioning());
        }
    }

    #[test]
    fn test_logout_forces_landing_from_any_screen() {
        let (mut app, _dir) = app();
        settle_session_effects(&mut app, vec![UiEffect::Login { role: Role::Patient }]);

        let effects = start_navigation(&mut app, Screen::MedicalRecords);
        assert!(matches!(effects.last(), Some(UiEffect::ScheduleNavigation { .. })));
        arrive(&mut app);
        assert_eq!(app.nav.current, Screen::MedicalRecords);

        settle_session_effects(&mut app, vec![UiEffect::Logout]);
        assert_eq!(app.nav.current, Screen::Landing);
        assert!(app.session.current().is_none());
    }

    #[test]
    fn test_second_navigate_supersedes_first() {
        let (mut app, _dir) = app();
        settle_session_effects(&mut app, vec![UiEffect::Login { role: Role::Patient }]);

        start_navigation(&mut app, Screen::Appointments);
        let first = app.nav.pending.clone().unwrap();

        let effects = start_navigation(&mut app, Screen::MedicalRecords);
        match &effects[0] {
            UiEffect::CancelTransition { token } => token.cancel(),
            other => panic!("expected cancellation of superseded transition, got {other:?}"),
        }
        // The effect carries the superseded task's token.
        assert!(first.cancel.is_cancelled());

        // The stale arrival for the first request must be ignored.
        update(&mut app, UiEvent::NavigationArrived { id: first.id, target: first.target });
        assert!(app.nav.is_transitioning());
        assert_ne!(app.nav.current, Screen::Appointments);

        arrive(&mut app);
        assert_eq!(app.nav.current, Screen::MedicalRecords);
        assert!(!app.nav.is_transitioning());
    }

    #[test]
    fn test_login_during_transition_drops_pending_navigation() {
        let (mut app, _dir) = app();
        update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::from(KeyCode::Enter))),
        );
        assert!(app.nav.is_transitioning());

        settle_session_effects(&mut app, vec![UiEffect::Login { role: Role::Doctor }]);
        assert_eq!(app.nav.current, Screen::DoctorDashboard);
        assert!(!app.nav.is_transitioning());
    }

    #[test]
    fn test_keys_are_dropped_while_loading() {
        let (mut app, _dir) = app();
        start_navigation(&mut app, Screen::Auth);
        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::from(KeyCode::Char('s')))),
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn test_navigate_target_is_clamped_for_session_state() {
        // Signed out: a dashboard target clamps to the landing page.
        let (mut app, _dir) = app();
        start_navigation(&mut app, Screen::DoctorSchedule);
        arrive(&mut app);
        assert_eq!(app.nav.current, Screen::Landing);
    }

    #[test]
    fn test_failed_validation_still_logs_in() {
        let (mut app, _dir) = app();
        start_navigation(&mut app, Screen::Auth);
        arrive(&mut app);

        // Empty form, submit straight away.
        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::from(KeyCode::Enter))),
        );
        assert!(matches!(effects[..], [UiEffect::Login { role: Role::Patient }]));
        assert_eq!(app.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Warning));
    }

    #[test]
    fn test_dashboard_arrival_schedules_data_fetch() {
        let (mut app, _dir) = app();
        settle_session_effects(&mut app, vec![UiEffect::Login { role: Role::Patient }]);

        start_navigation(&mut app, Screen::DoctorsList);
        arrive(&mut app);
        assert!(app.nav.data_pending.is_none());

        start_navigation(&mut app, Screen::PatientDashboard);
        let pending = app.nav.pending.clone().unwrap();
        let effects = update(
            &mut app,
            UiEvent::NavigationArrived { id: pending.id, target: pending.target },
        );
        assert!(matches!(effects[..], [UiEffect::ScheduleDataFetch { .. }]));
        assert!(app.nav.data_pending.is_some());

        // A stale DataReady must not clear a newer fetch.
        update(&mut app, UiEvent::DataReady { id: crate::common::TaskId(9999) });
        assert!(app.nav.data_pending.is_some());
    }
}
