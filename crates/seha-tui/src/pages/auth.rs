//! The signup/login form.
//!
//! Validation messages render inline under their fields but never block
//! submission: the mock login always succeeds.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use seha_core::session::Role;

use crate::render::logo_line;
use crate::state::AppState;

pub fn render(app: &AppState, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_form(app, frame, columns[0]);
    render_side_panel(frame, columns[1]);
}

fn render_form(app: &AppState, frame: &mut Frame, area: Rect) {
    let form = &app.auth_form;
    let mut lines = vec![
        logo_line(),
        Line::default(),
        Line::from(Span::styled(
            "Create your account",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Join the Seha+ community and start your health journey",
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
        role_toggle_line(form.role, form.on_role_toggle()),
        Line::default(),
    ];

    for (index, field) in form.fields().iter().enumerate() {
        let focused = form.focus == index + 1;
        let value = form.value(field.key);
        let shown: String = if field.secret {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let (text, text_style) = if shown.is_empty() {
            (field.placeholder.to_string(), Style::default().fg(Color::DarkGray))
        } else {
            (shown, Style::default())
        };

        let marker = if focused { "› " } else { "  " };
        let label_style = if focused {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut spans = vec![
            Span::styled(format!("{marker}{}: ", field.label), label_style),
            Span::styled(text, text_style),
        ];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(Color::Blue)));
        }
        lines.push(Line::from(spans));

        if let Some(error) = form.errors.get(field.key) {
            lines.push(Line::from(Span::styled(
                format!("    {error}"),
                Style::default().fg(Color::Red),
            )));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(" to create your account"),
    ]));

    let block = Block::default().borders(Borders::ALL).title(" Sign up ");
    let form_widget = Paragraph::new(lines).block(block);
    frame.render_widget(form_widget, area);
}

fn role_toggle_line(role: Role, focused: bool) -> Line<'static> {
    let active = |on: bool, color: Color| {
        if on {
            Style::default().fg(Color::White).bg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    let marker = if focused { "› " } else { "  " };
    Line::from(vec![
        Span::raw(marker.to_string()),
        Span::styled(" Patient ", active(role == Role::Patient, Color::Blue)),
        Span::raw(" "),
        Span::styled(" Doctor ", active(role == Role::Doctor, Color::Green)),
    ])
}

fn render_side_panel(frame: &mut Frame, area: Rect) {
    let panel = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            "Care you can trust,",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "in your hands.",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Join thousands of users who trust Seha+ for smart healthcare",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::LEFT));
    frame.render_widget(panel, area);
}
