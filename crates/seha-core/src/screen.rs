//! The closed set of screens and the per-role navigation sets.

use std::fmt;
use std::str::FromStr;

use crate::session::Role;

/// One named view within the application.
///
/// This enumeration is closed: the navigation controller only ever holds one
/// of these values, so an out-of-set target cannot be represented. String
/// identifiers exist for display and for parsing external input (CLI,
/// persisted state); parsing failures clamp to a default at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Landing,
    Auth,
    PatientDashboard,
    DoctorsList,
    Appointments,
    MedicalRecords,
    PatientSettings,
    DoctorDashboard,
    DoctorConsultations,
    DoctorPatients,
    DoctorSchedule,
    DoctorSettings,
}

impl Screen {
    /// The stable string identifier for this screen.
    pub fn id(&self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::Auth => "auth",
            Screen::PatientDashboard => "patient-dashboard",
            Screen::DoctorsList => "doctors-list",
            Screen::Appointments => "appointments",
            Screen::MedicalRecords => "medical-records",
            Screen::PatientSettings => "patient-settings",
            Screen::DoctorDashboard => "doctor-dashboard",
            Screen::DoctorConsultations => "doctor-consultations",
            Screen::DoctorPatients => "doctor-patients",
            Screen::DoctorSchedule => "doctor-schedule",
            Screen::DoctorSettings => "doctor-settings",
        }
    }

    /// Title shown in the content header.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Landing => "Seha+",
            Screen::Auth => "Create your account",
            Screen::PatientDashboard => "Dashboard",
            Screen::DoctorsList => "Doctors",
            Screen::Appointments => "Appointments",
            Screen::MedicalRecords => "Medical records",
            Screen::PatientSettings => "Settings",
            Screen::DoctorDashboard => "Workstation",
            Screen::DoctorConsultations => "Consultations",
            Screen::DoctorPatients => "Patients",
            Screen::DoctorSchedule => "Schedule",
            Screen::DoctorSettings => "Professional profile",
        }
    }

    /// True for the screens reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Screen::Landing | Screen::Auth)
    }

    /// The role whose navigation set contains this screen, if any.
    pub fn owning_role(&self) -> Option<Role> {
        match self {
            Screen::Landing | Screen::Auth => None,
            Screen::PatientDashboard
            | Screen::DoctorsList
            | Screen::Appointments
            | Screen::MedicalRecords
            | Screen::PatientSettings => Some(Role::Patient),
            Screen::DoctorDashboard
            | Screen::DoctorConsultations
            | Screen::DoctorPatients
            | Screen::DoctorSchedule
            | Screen::DoctorSettings => Some(Role::Doctor),
        }
    }

    /// Default screen for a session state: the role dashboard when signed
    /// in, the landing page otherwise.
    pub fn default_for(role: Option<Role>) -> Screen {
        match role {
            Some(Role::Patient) => Screen::PatientDashboard,
            Some(Role::Doctor) => Screen::DoctorDashboard,
            None => Screen::Landing,
        }
    }

    /// The dashboard screen for a role.
    pub fn dashboard(role: Role) -> Screen {
        match role {
            Role::Patient => Screen::PatientDashboard,
            Role::Doctor => Screen::DoctorDashboard,
        }
    }

    /// All screens, in navigation order.
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Landing,
            Screen::Auth,
            Screen::PatientDashboard,
            Screen::DoctorsList,
            Screen::Appointments,
            Screen::MedicalRecords,
            Screen::PatientSettings,
            Screen::DoctorDashboard,
            Screen::DoctorConsultations,
            Screen::DoctorPatients,
            Screen::DoctorSchedule,
            Screen::DoctorSettings,
        ]
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Screen {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::all()
            .iter()
            .copied()
            .find(|screen| screen.id() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown screen: {s}"))
    }
}

/// One sidebar entry: a label, a decorative icon name, and a target screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub screen: Screen,
}

/// Sidebar links for the patient role.
pub fn patient_links() -> &'static [NavLink] {
    &[
        NavLink { label: "Dashboard", icon: "home", screen: Screen::PatientDashboard },
        NavLink { label: "Doctors", icon: "users", screen: Screen::DoctorsList },
        NavLink { label: "Appointments", icon: "calendar", screen: Screen::Appointments },
        NavLink { label: "Medical records", icon: "file-text", screen: Screen::MedicalRecords },
        NavLink { label: "Settings", icon: "settings", screen: Screen::PatientSettings },
    ]
}

/// Sidebar links for the doctor role.
pub fn doctor_links() -> &'static [NavLink] {
    &[
        NavLink { label: "Workstation", icon: "home", screen: Screen::DoctorDashboard },
        NavLink { label: "Consultations", icon: "inbox", screen: Screen::DoctorConsultations },
        NavLink { label: "Patients", icon: "users", screen: Screen::DoctorPatients },
        NavLink { label: "Schedule", icon: "calendar", screen: Screen::DoctorSchedule },
        NavLink { label: "Profile", icon: "settings", screen: Screen::DoctorSettings },
    ]
}

/// Sidebar links for a role.
pub fn links_for(role: Role) -> &'static [NavLink] {
    match role {
        Role::Patient => patient_links(),
        Role::Doctor => doctor_links(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for screen in Screen::all() {
            assert_eq!(screen.id().parse::<Screen>().unwrap(), *screen);
        }
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        assert!("billing".parse::<Screen>().is_err());
    }

    #[test]
    fn test_default_screen_per_session_state() {
        assert_eq!(Screen::default_for(None), Screen::Landing);
        assert_eq!(Screen::default_for(Some(Role::Patient)), Screen::PatientDashboard);
        assert_eq!(Screen::default_for(Some(Role::Doctor)), Screen::DoctorDashboard);
    }

    #[test]
    fn test_nav_links_stay_within_owning_role() {
        for link in patient_links() {
            assert_eq!(link.screen.owning_role(), Some(Role::Patient));
        }
        for link in doctor_links() {
            assert_eq!(link.screen.owning_role(), Some(Role::Doctor));
        }
    }
}
