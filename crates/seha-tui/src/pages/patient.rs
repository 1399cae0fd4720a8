//! Patient screens: dashboard, doctors, appointments, records, settings.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use seha_core::directory;

use crate::common::icons;
use crate::state::AppState;

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn card(icon: &str, title: &str, detail: &str, color: Color) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(format!("{} ", icons::glyph(icon)), Style::default().fg(color)),
            Span::styled(title.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            format!("  {detail}"),
            Style::default().fg(Color::Gray),
        )),
    ]
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
    let mut lines = vec![
        heading(&format!("Welcome back, {name}!")),
        Line::from(Span::styled(
            "We wish you a pleasant day and lasting health.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
    ];
    lines.extend(card("activity", "Your health", "Last update: 5 days ago", Color::Blue));
    lines.extend(card(
        "calendar",
        "Upcoming appointments",
        "You have an appointment tomorrow with Dr. Ahmed",
        Color::Green,
    ));
    lines.extend(card("file-text", "Medical record", "Last update: March 12", Color::Magenta));

    lines.push(Line::default());
    lines.push(heading("Active consultations"));
    lines.push(Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::Green)),
        Span::raw("Consultation with Dr. Ahmed Khaled — Internal medicine, follow-up "),
        Span::styled("(online now)", Style::default().fg(Color::Green)),
    ]));

    lines.push(Line::default());
    lines.push(heading("Seha+ services"));
    for service in directory::patient_services() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {}", icons::glyph(service.icon), service.title),
                Style::default().fg(Color::Blue),
            ),
            Span::styled(format!(" — {}", service.desc), Style::default().fg(Color::Gray)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

pub fn render_doctors_list(frame: &mut Frame, area: Rect) {
    let mut lines = vec![heading("Find a doctor"), Line::default()];
    for doctor in directory::doctors() {
        let (dot, status_style) = if doctor.online {
            ("●", Style::default().fg(Color::Green))
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{dot} "), status_style),
            Span::styled(doctor.name.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {} ", doctor.specialty),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("★ {:.1}", doctor.rating),
                Style::default().fg(Color::Yellow),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_appointments(frame: &mut Frame, area: Rect) {
    let mut lines = vec![heading("Your appointments"), Line::default()];
    for appt in directory::appointments() {
        let status = if appt.confirmed {
            Span::styled("confirmed", Style::default().fg(Color::Green))
        } else {
            Span::styled("pending", Style::default().fg(Color::Yellow))
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {} {}  ", icons::glyph("calendar"), appt.date, appt.time),
                Style::default().fg(Color::Blue),
            ),
            Span::raw(format!("{} — {}  ", appt.doctor, appt.specialty)),
            status,
        ]));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_medical_records(frame: &mut Frame, area: Rect) {
    let mut lines = vec![heading("Medical records"), Line::default()];
    for record in directory::medical_records() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {}  ", icons::glyph("file-text"), record.date),
                Style::default().fg(Color::Blue),
            ),
            Span::styled(record.title.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", record.doctor), Style::default().fg(Color::Gray)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", record.summary),
            Style::default().fg(Color::Gray),
        )));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

pub fn render_settings(app: &AppState, frame: &mut Frame, area: Rect) {
    let session = app.session.current();
    let lines = vec![
        heading("Settings"),
        Line::default(),
        Line::from(format!(
            "Name:   {}",
            session.map_or("", |s| s.name.as_str())
        )),
        Line::from(format!(
            "Role:   {}",
            session.map_or("", |s| s.role.label())
        )),
        Line::from(format!(
            "Avatar: {}",
            session.map_or("", |s| s.avatar.as_str())
        )),
        Line::default(),
        Line::from(Span::styled(
            "This is a demo account; profile fields are not editable.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
