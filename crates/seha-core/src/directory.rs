//! Hard-coded sample content for the demo dashboards.
//!
//! There is no backend: every list the dashboards render comes from the
//! fixtures below. Dates are anchored to "today" so the schedule always
//! looks current.

use chrono::{Duration, Local, NaiveDate};

/// Priority of an incoming consultation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Doctor {
    pub name: &'static str,
    pub specialty: &'static str,
    pub rating: f32,
    pub online: bool,
}

#[derive(Debug, Clone)]
pub struct Appointment {
    pub doctor: &'static str,
    pub specialty: &'static str,
    pub date: NaiveDate,
    pub time: &'static str,
    pub confirmed: bool,
}

#[derive(Debug, Clone)]
pub struct MedicalRecord {
    pub title: &'static str,
    pub doctor: &'static str,
    pub date: NaiveDate,
    pub summary: &'static str,
}

/// An incoming consultation on the doctor's workstation.
#[derive(Debug, Clone)]
pub struct Consultation {
    pub patient: &'static str,
    pub issue: &'static str,
    pub waiting_for: &'static str,
    pub priority: Priority,
}

#[derive(Debug, Clone)]
pub struct PatientSummary {
    pub name: &'static str,
    pub age: u8,
    pub last_visit: &'static str,
    pub condition: &'static str,
}

#[derive(Debug, Clone)]
pub struct ScheduleSlot {
    pub date: NaiveDate,
    pub time: &'static str,
    pub patient: &'static str,
    pub reason: &'static str,
}

/// Headline numbers on the doctor dashboard.
#[derive(Debug, Clone, Copy)]
pub struct DoctorStats {
    pub patients_today: u32,
    pub patients_delta: i32,
    pub pending_appointments: u32,
    pub waiting_consultations: u32,
    pub rating: f32,
}

/// A service tile on the patient dashboard grid.
#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn doctors() -> Vec<Doctor> {
    vec![
        Doctor { name: "Dr. Ahmed Khaled", specialty: "Internal medicine", rating: 4.8, online: true },
        Doctor { name: "Dr. Layla Hassan", specialty: "Pediatrics", rating: 4.9, online: true },
        Doctor { name: "Dr. Sami Obadi", specialty: "Cardiology", rating: 4.6, online: false },
        Doctor { name: "Dr. Huda Nasser", specialty: "Dermatology", rating: 4.7, online: true },
        Doctor { name: "Dr. Khaled Omar", specialty: "Orthopedics", rating: 4.5, online: false },
    ]
}

pub fn appointments() -> Vec<Appointment> {
    let today = today();
    vec![
        Appointment {
            doctor: "Dr. Ahmed Khaled",
            specialty: "Internal medicine",
            date: today + Duration::days(1),
            time: "10:30",
            confirmed: true,
        },
        Appointment {
            doctor: "Dr. Huda Nasser",
            specialty: "Dermatology",
            date: today + Duration::days(4),
            time: "14:00",
            confirmed: true,
        },
        Appointment {
            doctor: "Dr. Sami Obadi",
            specialty: "Cardiology",
            date: today + Duration::days(9),
            time: "09:15",
            confirmed: false,
        },
    ]
}

pub fn medical_records() -> Vec<MedicalRecord> {
    let today = today();
    vec![
        MedicalRecord {
            title: "Follow-up consultation",
            doctor: "Dr. Ahmed Khaled",
            date: today - Duration::days(5),
            summary: "Blood pressure stable. Continue current medication.",
        },
        MedicalRecord {
            title: "Lab results",
            doctor: "Dr. Ahmed Khaled",
            date: today - Duration::days(19),
            summary: "Complete blood count within normal ranges.",
        },
        MedicalRecord {
            title: "Annual check-up",
            doctor: "Dr. Layla Hassan",
            date: today - Duration::days(160),
            summary: "No findings. Recommended yearly follow-up.",
        },
    ]
}

/// The urgent queue on the doctor dashboard.
pub fn urgent_consultations() -> Vec<Consultation> {
    vec![
        Consultation {
            patient: "Fatima Ahmed",
            issue: "Chest pain",
            waiting_for: "5 min",
            priority: Priority::High,
        },
        Consultation {
            patient: "Mohammed Ali",
            issue: "Severe headache",
            waiting_for: "15 min",
            priority: Priority::Medium,
        },
        Consultation {
            patient: "Sara Mahmoud",
            issue: "Medication question",
            waiting_for: "30 min",
            priority: Priority::Low,
        },
    ]
}

pub fn patients() -> Vec<PatientSummary> {
    vec![
        PatientSummary { name: "Mohammed Qasem", age: 34, last_visit: "5 days ago", condition: "Hypertension" },
        PatientSummary { name: "Fatima Ahmed", age: 41, last_visit: "today", condition: "Chest pain (new)" },
        PatientSummary { name: "Mohammed Ali", age: 28, last_visit: "2 weeks ago", condition: "Migraine" },
        PatientSummary { name: "Sara Mahmoud", age: 52, last_visit: "1 month ago", condition: "Diabetes, type 2" },
    ]
}

pub fn schedule() -> Vec<ScheduleSlot> {
    let today = today();
    vec![
        ScheduleSlot { date: today, time: "09:00", patient: "Fatima Ahmed", reason: "Urgent consult" },
        ScheduleSlot { date: today, time: "11:30", patient: "Mohammed Qasem", reason: "Follow-up" },
        ScheduleSlot { date: today + Duration::days(1), time: "10:30", patient: "Mohammed Qasem", reason: "Blood pressure review" },
        ScheduleSlot { date: today + Duration::days(2), time: "13:00", patient: "Sara Mahmoud", reason: "Quarterly check" },
    ]
}

pub fn doctor_stats() -> DoctorStats {
    DoctorStats {
        patients_today: 12,
        patients_delta: 2,
        pending_appointments: 3,
        waiting_consultations: 8,
        rating: 4.8,
    }
}

/// The service grid at the bottom of the patient dashboard.
pub fn patient_services() -> &'static [Service] {
    &[
        Service { icon: "search", title: "Find a doctor", desc: "Search for a specialist" },
        Service { icon: "clipboard", title: "Prescriptions", desc: "Manage and refill prescriptions" },
        Service { icon: "clock", title: "Appointments", desc: "Schedule your medical visits" },
        Service { icon: "heart", title: "Health tracking", desc: "Track your condition over time" },
        Service { icon: "dollar-sign", title: "Payments", desc: "Pay your bills online" },
        Service { icon: "help-circle", title: "Support", desc: "Help and technical support" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgent_queue_matches_dashboard_copy() {
        let queue = urgent_consultations();
        assert_eq!(queue.len(), 3);
        assert_eq!(queue[0].priority, Priority::High);
        assert_eq!(queue[0].patient, "Fatima Ahmed");
    }

    #[test]
    fn test_schedule_is_anchored_to_today() {
        let today = Local::now().date_naive();
        assert!(schedule().iter().all(|slot| slot.date >= today));
    }
}
