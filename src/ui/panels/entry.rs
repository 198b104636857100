use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, EntryField, InputMode};
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Entry;
    let form = &app.entry;

    let field_style = |field: EntryField| {
        if editing && form.field == field {
            theme::selected_style()
        } else {
            theme::normal_style()
        }
    };

    let category_label = format!(" {} {} ", form.category.sign(), form.category.as_str());
    let description = if form.description.is_empty() && !editing {
        "Add description".to_string()
    } else {
        form.description.clone()
    };
    let value = if form.value.is_empty() && !editing {
        "Value".to_string()
    } else {
        form.value.clone()
    };

    let line = Line::from(vec![
        Span::styled(
            category_label,
            field_style(EntryField::Category)
                .fg(theme::category_color(form.category))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ", theme::normal_style()),
        Span::styled(format!(" {description:<30} "), field_style(EntryField::Description)),
        Span::styled("  ", theme::normal_style()),
        Span::styled(format!(" {value:<12} "), field_style(EntryField::Value)),
        Span::styled(
            if editing {
                "  Enter add | Tab next field | Esc done"
            } else {
                "  a new item"
            },
            theme::dim_style(),
        ),
    ]);

    let border = if editing {
        theme::entry_border_color(form.category)
    } else {
        theme::OVERLAY
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(" New item ", theme::title_style()));

    f.render_widget(Paragraph::new(line).block(block), area);
}
