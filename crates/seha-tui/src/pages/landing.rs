//! The public landing page.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::icons;
use crate::render::{centered_vertically, logo_line};

const FEATURES: &[(&str, &str, &str)] = &[
    ("clock", "Instant consultations", "Reach a specialist within minutes"),
    ("calendar", "Online appointments", "Book the right doctor with ease"),
    ("file-text", "Electronic medical record", "Your history, safe and always available"),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        logo_line(),
        Line::default(),
        Line::from(Span::styled(
            "Your health in one touch",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Seha+ is your smart health companion in Aden — reach the best doctors anywhere, anytime.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Why Seha+?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    for (icon, title, desc) in FEATURES {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {title}", icons::glyph(icon)),
                Style::default().fg(Color::Blue),
            ),
            Span::styled(format!(" — {desc}"), Style::default().fg(Color::Gray)),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(" to start your health journey"),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "© 2023 Seha+. All rights reserved.",
        Style::default().fg(Color::DarkGray),
    )));

    let height = lines.len() as u16;
    let hero = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(hero, centered_vertically(area, height));
}
