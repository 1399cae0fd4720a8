//! Portal command handler: runs the full-screen TUI.

use anyhow::{Context, Result};
use seha_core::config::Config;
use seha_core::session::SessionStore;

pub async fn run(config: Config, session: SessionStore) -> Result<()> {
    seha_tui::run_portal(config, session)
        .await
        .context("portal failed")
}
