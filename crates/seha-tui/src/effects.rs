//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only; the reducer itself never
//! touches the clock, the filesystem, or the tokio runtime.

use seha_core::screen::Screen;
use seha_core::session::Role;
use tokio_util::sync::CancellationToken;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Start the simulated navigation delay for an in-flight transition.
    /// The runtime posts `NavigationArrived { id, target }` unless the
    /// token is cancelled first.
    ScheduleNavigation {
        id: TaskId,
        target: Screen,
        cancel: CancellationToken,
    },

    /// Start the simulated dashboard data fetch; posts `DataReady { id }`.
    ScheduleDataFetch { id: TaskId, cancel: CancellationToken },

    /// Cancel a superseded scheduled task.
    CancelTransition { token: CancellationToken },

    /// Sign in via the session store (mock, always succeeds) and report
    /// `SessionChanged` back to the reducer.
    Login { role: Role },

    /// Sign out via the session store and report `SessionChanged`.
    Logout,
}
