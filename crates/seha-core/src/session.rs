//! Mock session store.
//!
//! Owns the identity of the currently signed-in actor (or none) and persists
//! it as a single JSON record under the Seha home directory. Login is a
//! deliberate mock: no credentials are checked, the display attributes are
//! derived from the chosen role.
//!
//! Every failure path degrades to "no session". A malformed or missing
//! record never surfaces an error to callers.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::paths;

/// File name of the persisted session record inside the Seha home.
pub const SESSION_FILE: &str = "session.json";

/// Role of the signed-in actor. Determines which dashboard and navigation
/// set applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
}

impl Role {
    /// Returns the short display name for this role.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
        }
    }

    /// Human-readable label shown in the sidebar profile block.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Doctor => "Doctor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patient" => Ok(Role::Patient),
            "doctor" => Ok(Role::Doctor),
            other => anyhow::bail!("unknown role: {other} (expected patient or doctor)"),
        }
    }
}

/// The persisted record identifying the mock signed-in actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub role: Role,
    pub avatar: String,
}

impl Session {
    /// Builds the mock session for a role. Display attributes are fixed per
    /// role; no real identity data exists in this demo.
    pub fn mock(role: Role) -> Self {
        match role {
            Role::Patient => Session {
                name: "Mohammed Qasem".to_string(),
                role,
                avatar: "https://randomuser.me/api/portraits/men/32.jpg".to_string(),
            },
            Role::Doctor => Session {
                name: "Dr. Ahmed Khaled".to_string(),
                role,
                avatar: "https://randomuser.me/api/portraits/men/41.jpg".to_string(),
            },
        }
    }
}

/// Session store: in-memory current session plus the persisted record.
///
/// A session exists iff the persisted file held a valid record at load time
/// or `login` has been called since. Writes are whole-record overwrites.
#[derive(Debug)]
pub struct SessionStore {
    home: PathBuf,
    current: Option<Session>,
}

impl SessionStore {
    /// Loads the store from the default Seha home.
    pub fn load() -> Self {
        Self::load_from(paths::seha_home())
    }

    /// Loads the store from a specific home directory.
    ///
    /// An absent or malformed record resolves to no session.
    pub fn load_from(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let current = read_record(&home.join(SESSION_FILE));
        Self { home, current }
    }

    /// Returns the current session, if any.
    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Signs in with the given role and persists the record.
    ///
    /// Overwrites any existing session unconditionally. Persistence failures
    /// are logged and otherwise ignored; the in-memory session still exists.
    pub fn login(&mut self, role: Role) -> &Session {
        let session = Session::mock(role);
        if let Err(err) = write_record(&self.home, &session) {
            tracing::warn!("failed to persist session: {err:#}");
        }
        &*self.current.insert(session)
    }

    /// Signs out and deletes the persisted record.
    ///
    /// Idempotent: a no-op when no session exists.
    pub fn logout(&mut self) {
        self.current = None;
        let path = self.home.join(SESSION_FILE);
        if path.exists()
            && let Err(err) = fs::remove_file(&path)
        {
            tracing::warn!("failed to remove session record: {err}");
        }
    }

    /// The home directory backing this store.
    pub fn home(&self) -> &Path {
        &self.home
    }
}

fn read_record(path: &Path) -> Option<Session> {
    let contents = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(session) => Some(session),
        Err(err) => {
            tracing::warn!("ignoring malformed session record: {err}");
            None
        }
    }
}

fn write_record(home: &Path, session: &Session) -> anyhow::Result<()> {
    use anyhow::Context;

    fs::create_dir_all(home)
        .with_context(|| format!("failed to create {}", home.display()))?;
    let path = home.join(SESSION_FILE);
    let contents = serde_json::to_string_pretty(session)?;
    fs::write(&path, contents)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_login_sets_session_for_each_role() {
        let dir = tempdir().unwrap();
        let mut store = SessionStore::load_from(dir.path());

        for role in [Role::Patient, Role::Doctor] {
            store.login(role);
            assert_eq!(store.current().unwrap().role, role);
        }
    }

    #[test]
    fn test_logout_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut store = SessionStore::load_from(dir.path());

        store.logout();
        assert!(store.current().is_none());

        store.login(Role::Patient);
        store.logout();
        store.logout();
        assert!(store.current().is_none());
        assert!(!dir.path().join(SESSION_FILE).exists());
    }

    #[test]
    fn test_session_survives_reload() {
        let dir = tempdir().unwrap();
        let persisted = {
            let mut store = SessionStore::load_from(dir.path());
            store.login(Role::Doctor).clone()
        };

        let reloaded = SessionStore::load_from(dir.path());
        assert_eq!(reloaded.current(), Some(&persisted));
    }

    #[test]
    fn test_corrupt_record_resolves_to_no_session() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), "{not json").unwrap();

        let store = SessionStore::load_from(dir.path());
        assert!(store.current().is_none());
    }

    #[test]
    fn test_absent_record_resolves_to_no_session() {
        let dir = tempdir().unwrap();
        let store = SessionStore::load_from(dir.path());
        assert!(store.current().is_none());
    }

    #[test]
    fn test_login_overwrites_previous_record() {
        let dir = tempdir().unwrap();
        let mut store = SessionStore::load_from(dir.path());
        store.login(Role::Patient);
        store.login(Role::Doctor);

        let reloaded = SessionStore::load_from(dir.path());
        assert_eq!(reloaded.current().unwrap().role, Role::Doctor);
    }
}
