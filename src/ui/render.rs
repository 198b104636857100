use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, InputMode};
use super::commands;
use super::panels;
use super::theme;

/// Rows taken by everything except the body of the item lists.
pub(crate) const CHROME_ROWS: u16 = 5 + 3 + 1 + 1 + 3; // overview, entry, status, command, list borders + header

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Budget overview
            Constraint::Length(3), // Entry form
            Constraint::Min(5),    // Item lists
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    panels::overview::render(f, chunks[0], app);
    panels::entry::render(f, chunks[1], app);
    panels::items::render(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);
    render_command_bar(f, chunks[4], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_bg = match app.input_mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Entry => theme::entry_border_color(app.entry.category),
        InputMode::Command => theme::GREEN,
    };
    let mode_style = Style::default()
        .fg(theme::HEADER_BG)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let info = format!(
        " {} | {} items | focus: {}",
        app.month_label,
        app.controller.ledger().len(),
        app.focus
    );

    let right = match app.input_mode {
        InputMode::Normal => " a add | d delete | h/l switch list | ? help ",
        InputMode::Entry => " Space toggle +/- | Enter add | Esc done ",
        InputMode::Command => " Enter run | Esc cancel ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::GREEN)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Normal | InputMode::Entry => (
            if !app.status_message.is_empty() {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::command_bar_style(),
                ))
            } else if app.controller.ledger().is_empty() {
                Line::from(Span::styled(
                    " Press a to add your first income or expense, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    " Press a to add an item, : for commands, ? for help",
                    theme::dim_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let mut help_text = vec![
        Line::from(Span::styled(
            " budgetracker Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Lists"),
        Line::from(Span::styled(
            "  j/k or Up/Down   Move cursor           h/l        Income/Expenses",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  g/G              Top/Bottom            d/Del      Delete selected",
            theme::normal_style(),
        )),
        Line::from(""),
        section(" Entry form"),
        Line::from(Span::styled(
            "  a/i              Open form             Tab        Next field",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Space/Left/Right Toggle +/-            Enter      Add item",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Esc              Close form            Ctrl-c/q   Quit",
            theme::normal_style(),
        )),
        Line::from(""),
        section(" Commands"),
    ];

    // Build command list dynamically from COMMANDS registry
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 1 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<12} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        Style::default().fg(theme::TEXT_DIM),
    )));

    // Center the popup, clamped to terminal height
    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
