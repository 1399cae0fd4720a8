//! Per-screen content rendering.
//!
//! Leaf consumers of the session and navigation state: they draw hard-coded
//! sample content and own no state machine themselves.

pub mod auth;
pub mod doctor;
pub mod landing;
pub mod patient;

use ratatui::Frame;
use ratatui::layout::Rect;
use seha_core::screen::Screen;

use crate::state::AppState;

/// Renders the content pane of an authenticated screen.
pub fn render_content(app: &AppState, current: Screen, frame: &mut Frame, area: Rect) {
    match current {
        Screen::PatientDashboard => patient::render_dashboard(app, frame, area),
        Screen::DoctorsList => patient::render_doctors_list(frame, area),
        Screen::Appointments => patient::render_appointments(frame, area),
        Screen::MedicalRecords => patient::render_medical_records(frame, area),
        Screen::PatientSettings => patient::render_settings(app, frame, area),
        Screen::DoctorDashboard => doctor::render_dashboard(app, frame, area),
        Screen::DoctorConsultations => doctor::render_consultations(frame, area),
        Screen::DoctorPatients => doctor::render_patients(frame, area),
        Screen::DoctorSchedule => doctor::render_schedule(frame, area),
        Screen::DoctorSettings => doctor::render_settings(app, frame, area),
        // Public screens are rendered full-frame by the caller.
        Screen::Landing | Screen::Auth => {}
    }
}

/// Dashboard shimmer shown while the simulated data fetch is running.
pub(crate) fn render_shimmer(app: &AppState, frame: &mut Frame, area: Rect) {
    use ratatui::layout::Alignment;
    use ratatui::style::{Color, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::Paragraph;

    let spinner = crate::render::SPINNER_FRAMES[app.spinner_frame % crate::render::SPINNER_FRAMES.len()];
    let shimmer = Paragraph::new(Line::from(vec![
        Span::styled(spinner, Style::default().fg(Color::Cyan)),
        Span::raw(" Fetching your data..."),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(shimmer, crate::render::centered_vertically(area, 1));
}
