//! Session command handlers (login, logout, whoami).

use anyhow::Result;
use seha_core::session::{Role, SessionStore};

pub fn login(mut session: SessionStore, role: &str) -> Result<()> {
    let role: Role = role.parse()?;
    let signed_in = session.login(role);
    println!("Signed in as {} ({})", signed_in.name, signed_in.role.label());
    Ok(())
}

pub fn logout(mut session: SessionStore) -> Result<()> {
    if session.current().is_none() {
        println!("Not signed in");
        return Ok(());
    }
    session.logout();
    println!("Signed out");
    Ok(())
}

pub fn whoami(session: &SessionStore) {
    match session.current() {
        Some(current) => println!("{} ({})", current.name, current.role.label()),
        None => println!("Not signed in"),
    }
}
