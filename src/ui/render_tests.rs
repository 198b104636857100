#![allow(clippy::unwrap_used)]

use ratatui::{backend::TestBackend, Terminal};

use super::*;
use crate::ui::commands::handle_command;

fn screen_text(app: &App) -> String {
    let backend = TestBackend::new(120, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_render_empty_app() {
    let app = App::with_month("October 2026".into());
    let text = screen_text(&app);
    assert!(text.contains("Available budget in October 2026"));
    assert!(text.contains("+ 0.00"));
    assert!(text.contains("---"));
    assert!(text.contains("No income yet"));
    assert!(text.contains("No expenses yet"));
}

#[test]
fn test_render_items_and_percentages() {
    let mut app = App::with_month("October 2026".into());
    handle_command("add inc Salary 1000", &mut app).unwrap();
    handle_command("add exp Rent 300", &mut app).unwrap();
    let text = screen_text(&app);
    assert!(text.contains("+ 700.00"));
    assert!(text.contains("+ 1,000.00"));
    assert!(text.contains("- 300.00"));
    assert!(text.contains("30%"));
    assert!(text.contains("inc-0"));
    assert!(text.contains("exp-0"));
    assert!(!text.contains("21%"));
}

#[test]
fn test_render_help_overlay() {
    let mut app = App::with_month("October 2026".into());
    app.show_help = true;
    let text = screen_text(&app);
    assert!(text.contains("budgetracker Help"));
    assert!(text.contains(":delete"));
}
