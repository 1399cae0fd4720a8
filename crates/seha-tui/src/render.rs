//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui Frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use seha_core::screen::{self, Screen};
use seha_core::session::Session;

use crate::common::icons;
use crate::nav::View;
use crate::pages;
use crate::state::{AppState, NoticeKind};

/// Height of the status line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Width of the sidebar on authenticated screens.
const SIDEBAR_WIDTH: u16 = 26;

/// Spinner frames for the loading placeholder.
pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .split(area);
    let body = chunks[0];

    // The loading placeholder always wins while a transition is in flight.
    match app.nav.resolve(app.role()) {
        View::Loading => render_loading(app, frame, body),
        View::Screen(Screen::Landing) => pages::landing::render(frame, body),
        View::Screen(Screen::Auth) => pages::auth::render(app, frame, body),
        View::Screen(current) => {
            if let Some(session) = app.session.current() {
                render_app_shell(app, session, current, frame, body);
            }
        }
    }

    render_status_line(app, frame, chunks[1]);
}

/// Full-screen loading placeholder shown during a simulated transition.
fn render_loading(app: &AppState, frame: &mut Frame, area: Rect) {
    let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::default(),
        logo_line(),
        Line::default(),
        Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Cyan)),
            Span::raw(" Loading..."),
        ]),
    ];
    let placeholder = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(placeholder, centered_vertically(area, 4));
}

/// Sidebar + header + content for authenticated screens.
fn render_app_shell(
    app: &AppState,
    session: &Session,
    current: Screen,
    frame: &mut Frame,
    area: Rect,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(area);

    render_sidebar(app, session, current, frame, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(columns[1]);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            current.title(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} 3", icons::glyph("bell")),
            Style::default().fg(Color::Red),
        ),
        Span::raw("  "),
        Span::styled(session.name.clone(), Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, rows[0]);

    let content = rows[1].inner(ratatui::layout::Margin { horizontal: 2, vertical: 1 });
    pages::render_content(app, current, frame, content);
}

fn render_sidebar(
    app: &AppState,
    session: &Session,
    current: Screen,
    frame: &mut Frame,
    area: Rect,
) {
    let mut lines = vec![
        logo_line(),
        Line::default(),
        Line::from(Span::styled(
            session.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            session.role.label(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
    ];

    for (index, link) in screen::links_for(session.role).iter().enumerate() {
        let selected = index == app.sidebar_index;
        let active = link.screen == current;
        let style = if active {
            Style::default().fg(Color::White).bg(Color::Blue)
        } else if selected {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if selected { "›" } else { " " };
        lines.push(Line::from(Span::styled(
            format!("{marker} {} {} {}", index + 1, icons::glyph(link.icon), link.label),
            style,
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("{} l sign out", icons::glyph("log-out")),
        Style::default().fg(Color::Red),
    )));

    let sidebar = Paragraph::new(lines).block(Block::default().borders(Borders::RIGHT));
    frame.render_widget(sidebar, area);
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let line = if let Some(notice) = &app.notice {
        let (color, mark) = match notice.kind {
            NoticeKind::Success => (Color::Green, "✓"),
            NoticeKind::Error => (Color::Red, "✗"),
            NoticeKind::Warning => (Color::Yellow, "⚠"),
            NoticeKind::Info => (Color::Blue, "ℹ"),
        };
        Line::from(vec![
            Span::styled(format!("{mark} "), Style::default().fg(color)),
            Span::styled(notice.text.clone(), Style::default().fg(color)),
        ])
    } else {
        match app.nav.resolve(app.role()) {
            View::Loading => Line::default(),
            View::Screen(Screen::Landing) => hint_line(&[("Enter", "get started"), ("q", "quit")]),
            View::Screen(Screen::Auth) => hint_line(&[
                ("Tab", "next field"),
                ("←/→", "role"),
                ("Enter", "sign up"),
                ("Esc", "back"),
            ]),
            View::Screen(_) => hint_line(&[
                ("↑/↓", "select"),
                ("Enter", "open"),
                ("1-5", "jump"),
                ("l", "sign out"),
                ("q", "quit"),
            ]),
        }
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
}

fn hint_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, (key, action)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            (*key).to_string(),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::raw(format!(" {action}")));
    }
    Line::from(spans)
}

/// The "Seha+" logo, styled like the original's blue/green wordmark.
pub fn logo_line() -> Line<'static> {
    Line::from(vec![
        Span::styled(
            "Seha",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "+",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Shrinks an area to `height` rows, vertically centered.
pub fn centered_vertically(area: Rect, height: u16) -> Rect {
    let top = area.height.saturating_sub(height) / 2;
    Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height: height.min(area.height),
    }
}
