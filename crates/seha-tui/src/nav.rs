//! Navigation state.
//!
//! Owns "which screen is currently displayed" and the in-flight simulated
//! transition, if any. Session changes force a recompute of the current
//! screen; explicit `navigate` requests go through the scheduled-delay
//! machinery in the reducer and runtime.
//!
//! ## Supersede contract
//!
//! Only one transition is ever in flight. A new request replaces `pending`
//! wholesale and cancels the previous task's token; even if cancellation
//! loses the race, the stale arrival carries an old [`TaskId`] and is
//! dropped. Last navigate wins.

use seha_core::screen::Screen;
use seha_core::session::Role;
use tokio_util::sync::CancellationToken;

use crate::common::TaskId;

/// An in-flight navigation request.
#[derive(Debug, Clone)]
pub struct PendingNav {
    pub id: TaskId,
    pub target: Screen,
    pub cancel: CancellationToken,
}

/// What the renderer should show for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// A transition is in flight; show the loading placeholder.
    Loading,
    Screen(Screen),
}

#[derive(Debug)]
pub struct NavState {
    /// The screen the controller last settled on.
    pub current: Screen,
    /// In-flight navigation, if any.
    pub pending: Option<PendingNav>,
    /// Dashboard data shimmer task, if one is running.
    pub data_pending: Option<TaskId>,
}

impl NavState {
    /// Initial state: the role dashboard when a persisted session was found
    /// at start, the landing page otherwise.
    pub fn new(role: Option<Role>) -> Self {
        Self {
            current: Screen::default_for(role),
            pending: None,
            data_pending: None,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Clamps a navigation target to the screens valid for the session
    /// state. Unreachable targets map to that state's default screen:
    /// without a session anything non-public becomes Landing, with a
    /// session anything outside the role's set becomes the role dashboard.
    pub fn clamp_target(target: Screen, role: Option<Role>) -> Screen {
        match role {
            None => {
                if target.is_public() {
                    target
                } else {
                    Screen::Landing
                }
            }
            Some(role) => {
                if target.owning_role() == Some(role) {
                    target
                } else {
                    Screen::dashboard(role)
                }
            }
        }
    }

    /// Resolves what to render: the loading placeholder while a transition
    /// is in flight, otherwise `current` clamped defensively so a signed-in
    /// session never sees public content and vice versa.
    pub fn resolve(&self, role: Option<Role>) -> View {
        if self.is_transitioning() {
            return View::Loading;
        }
        View::Screen(Self::clamp_target(self.current, role))
    }

    /// Applies a forced transition (login/logout): immediate, no delay,
    /// drops any in-flight request. Returns the superseded token, if any,
    /// so the caller can emit a cancellation effect.
    pub fn force(&mut self, screen: Screen) -> Option<CancellationToken> {
        self.current = screen;
        self.data_pending = None;
        self.pending.take().map(|pending| pending.cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_screen_follows_session() {
        assert_eq!(NavState::new(None).current, Screen::Landing);
        assert_eq!(NavState::new(Some(Role::Doctor)).current, Screen::DoctorDashboard);
    }

    #[test]
    fn test_clamp_without_session_restricts_to_public() {
        assert_eq!(NavState::clamp_target(Screen::Auth, None), Screen::Auth);
        assert_eq!(NavState::clamp_target(Screen::Appointments, None), Screen::Landing);
    }

    #[test]
    fn test_clamp_with_session_restricts_to_role_set() {
        let role = Some(Role::Patient);
        assert_eq!(NavState::clamp_target(Screen::Appointments, role), Screen::Appointments);
        assert_eq!(NavState::clamp_target(Screen::Landing, role), Screen::PatientDashboard);
        assert_eq!(NavState::clamp_target(Screen::DoctorSchedule, role), Screen::PatientDashboard);
    }

    #[test]
    fn test_resolve_prefers_loading_placeholder() {
        let mut nav = NavState::new(None);
        nav.pending = Some(PendingNav {
            id: crate::common::TaskId(7),
            target: Screen::Auth,
            cancel: CancellationToken::new(),
        });
        assert_eq!(nav.resolve(None), View::Loading);
        assert_eq!(nav.resolve(Some(Role::Doctor)), View::Loading);
    }

    #[test]
    fn test_resolve_clamps_stale_screen() {
        // An authenticated session must never be shown public content.
        let mut nav = NavState::new(None);
        nav.current = Screen::Auth;
        assert_eq!(
            nav.resolve(Some(Role::Patient)),
            View::Screen(Screen::PatientDashboard)
        );

        // And an unauthenticated state never sees a dashboard.
        nav.current = Screen::DoctorSchedule;
        assert_eq!(nav.resolve(None), View::Screen(Screen::Landing));
    }
}
