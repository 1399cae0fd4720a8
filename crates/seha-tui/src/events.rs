//! Events consumed by the reducer.

use seha_core::screen::Screen;

use crate::common::TaskId;

/// Everything that can happen to the application.
///
/// The runtime collects these (terminal input, timer arrivals from the
/// inbox, ticks) and feeds them to `update` one at a time.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic animation/timeout tick.
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// A scheduled navigation delay elapsed.
    NavigationArrived { id: TaskId, target: Screen },
    /// A dashboard's simulated data fetch finished.
    DataReady { id: TaskId },
    /// The session store changed (post-login or post-logout).
    SessionChanged,
}
