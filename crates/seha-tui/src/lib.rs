//! Full-screen TUI implementation for Seha+.

pub mod auth_form;
pub mod common;
pub mod effects;
pub mod events;
pub mod nav;
pub mod pages;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use runtime::TuiRuntime;
use seha_core::config::Config;
use seha_core::session::SessionStore;

/// Runs the interactive portal.
pub async fn run_portal(config: Config, session: SessionStore) -> Result<()> {
    // The portal requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The portal requires a terminal.\n\
             Use `seha login` / `seha whoami` for non-interactive use."
        );
    }

    let mut runtime = TuiRuntime::new(config, session)?;
    runtime.run()?;

    Ok(())
}
