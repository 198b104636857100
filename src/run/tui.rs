use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::ui::app::{App, EntryField, InputMode};
use crate::ui::commands;
use crate::ui::render::CHROME_ROWS;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui() -> Result<()> {
    let mut app = App::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            let content_height = f.area().height.saturating_sub(CHROME_ROWS) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_key(key, app)?;
        }
    }
    Ok(())
}

pub(crate) fn handle_key(key: event::KeyEvent, app: &mut App) -> Result<()> {
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return Ok(());
    }
    match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app),
        InputMode::Entry => handle_entry_input(key, app),
        InputMode::Command => handle_command_input(key, app),
    }
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.input_mode = InputMode::Entry;
            app.entry.field = EntryField::Description;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let (len, page) = (app.focused_len(), app.visible_rows);
            let cursor = app.focused_cursor_mut();
            scroll_down(&mut cursor.index, &mut cursor.scroll, len, page);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            let cursor = app.focused_cursor_mut();
            scroll_up(&mut cursor.index, &mut cursor.scroll);
        }
        KeyCode::Char('g') => {
            let cursor = app.focused_cursor_mut();
            scroll_to_top(&mut cursor.index, &mut cursor.scroll);
        }
        KeyCode::Char('G') => {
            let (len, page) = (app.focused_len(), app.visible_rows);
            let cursor = app.focused_cursor_mut();
            scroll_to_bottom(&mut cursor.index, &mut cursor.scroll, len, page);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.focus = crate::models::Category::Income;
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.focus = crate::models::Category::Expense;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = app.focus.toggle();
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.delete_selected();
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => {
            app.status_message.clear();
        }
        _ => {}
    }
    Ok(())
}

fn handle_entry_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            if let Err(e) = app.submit_entry() {
                app.set_status(e.to_string());
            }
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Tab => {
            app.entry.field = app.entry.field.next();
        }
        KeyCode::BackTab => {
            app.entry.field = app.entry.field.prev();
        }
        KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
            if app.entry.field == EntryField::Category =>
        {
            app.entry.category = app.entry.category.toggle();
        }
        KeyCode::Char(c) if app.entry.field == EntryField::Category => {
            if let Some(category) = crate::models::Category::parse(&c.to_string()) {
                app.entry.category = category;
            }
        }
        KeyCode::Backspace => {
            if let Some(text) = app.entry.focused_text() {
                text.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(text) = app.entry.focused_text() {
                text.push(c);
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
