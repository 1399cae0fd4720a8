//! Doctor screens: workstation, consultations, patients, schedule, profile.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use seha_core::directory::{self, Priority};

use crate::common::icons;
use crate::state::AppState;

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

pub fn render_dashboard(app: &AppState, frame: &mut Frame, area: Rect) {
    if app.nav.data_pending.is_some() {
        super::render_shimmer(app, frame, area);
        return;
    }

    let name = app
        .session
        .current()
        .map_or(String::new(), |s| s.name.clone());
    let stats = directory::doctor_stats();

    let mut lines = vec![
        heading(&format!("Welcome back, {name}!")),
        Line::from(Span::styled(
            "Your medical workstation is ready.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("{} ", icons::glyph("users")), Style::default().fg(Color::Blue)),
            Span::styled(
                format!("Patients today: {}", stats.patients_today),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({:+} from yesterday)", stats.patients_delta),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{} ", icons::glyph("clock")), Style::default().fg(Color::Green)),
            Span::styled(
                format!("Pending appointments: {}", stats.pending_appointments),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (need approval)", Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled(format!("{} ", icons::glyph("inbox")), Style::default().fg(Color::Magenta)),
            Span::styled(
                format!("Consultations: {}", stats.waiting_consultations),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (waiting)", Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::styled(format!("{} ", icons::glyph("star")), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("Rating: {:.1}", stats.rating),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (out of 5)", Style::default().fg(Color::Gray)),
        ]),
        Line::default(),
        heading("Urgent consultations"),
    ];

    for consultation in directory::urgent_consultations() {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(priority_color(consultation.priority))),
            Span::styled(
                consultation.patient.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} — waiting {}", consultation.issue, consultation.waiting_for),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

pub fn render_consultations(frame: &mut Frame, area: Rect) {
    let mut lines = vec![heading("Consultation inbox"), Line::default()];
    for consultation in directory::urgent_consultations() {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(priority_color(consultation.priority))),
            Span::styled(
                format!("[{}] ", consultation.priority.label()),
                Style::default().fg(priority_color(consultation.priority)),
            ),
            Span::styled(
                consultation.patient.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" — {}", consultation.issue)),
            Span::styled(
                format!("  (waiting {})", consultation.waiting_for),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_patients(frame: &mut Frame, area: Rect) {
    let mut lines = vec![heading("Your patients"), Line::default()];
    for patient in directory::patients() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {}", icons::glyph("users"), patient.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} — {}", patient.age, patient.condition),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("  last visit {}", patient.last_visit),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_schedule(frame: &mut Frame, area: Rect) {
    let mut lines = vec![heading("Schedule"), Line::default()];
    for slot in directory::schedule() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {} {}  ", icons::glyph("calendar"), slot.date, slot.time),
                Style::default().fg(Color::Blue),
            ),
            Span::styled(slot.patient.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", slot.reason), Style::default().fg(Color::Gray)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_settings(app: &AppState, frame: &mut Frame, area: Rect) {
    let session = app.session.current();
    let lines = vec![
        heading("Professional profile"),
        Line::default(),
        Line::from(format!("Name:      {}", session.map_or("", |s| s.name.as_str()))),
        Line::from("Specialty: Internal medicine"),
        Line::from(format!("Avatar:    {}", session.map_or("", |s| s.avatar.as_str()))),
        Line::default(),
        Line::from(Span::styled(
            "This is a demo account; profile fields are not editable.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
