use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::{Category, Item};
use crate::ui::app::{App, InputMode};
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percentage, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let ledger = app.controller.ledger();
    for (area, category) in columns.iter().zip(Category::all()) {
        let percentages = match category {
            Category::Income => &[][..],
            Category::Expense => app.controller.percentages(),
        };
        render_list(f, *area, app, *category, ledger.items(*category), percentages);
    }
}

fn render_list(
    f: &mut Frame,
    area: Rect,
    app: &App,
    category: Category,
    items: &[Item],
    percentages: &[Option<i64>],
) {
    let focused = app.focus == category && app.input_mode != InputMode::Entry;
    let title = format!(
        " {} ({}) ",
        match category {
            Category::Income => "Income",
            Category::Expense => "Expenses",
        },
        items.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            theme::category_color(category)
        } else {
            theme::OVERLAY
        }))
        .title(Span::styled(title, theme::title_style()));

    if items.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled(
                match category {
                    Category::Income => "No income yet",
                    Category::Expense => "No expenses yet",
                },
                theme::dim_style(),
            )),
            Line::from(Span::styled("Press a to add an item", theme::dim_style())),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let mut headers = vec!["Key", "Description", "Value"];
    if category == Category::Expense {
        headers.push("%");
    }
    let header = Row::new(
        headers
            .into_iter()
            .map(|h| Cell::from(h).style(theme::header_style())),
    )
    .height(1);

    let cursor = app.cursor(category);
    let rows: Vec<Row> = items
        .iter()
        .enumerate()
        .skip(cursor.scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, item)| {
            let style = if focused && i == cursor.index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let mut cells = vec![
                Cell::from(item.key().to_string()),
                Cell::from(truncate(&item.description, 32)),
                Cell::from(Span::styled(
                    format_amount(item.value, category),
                    theme::amount_style(category),
                )),
            ];
            if category == Category::Expense {
                let percentage = percentages.get(i).copied().flatten();
                cells.push(Cell::from(Span::styled(
                    format_percentage(percentage),
                    Style::default()
                        .fg(theme::YELLOW)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            Row::new(cells).style(style)
        })
        .collect();

    let widths: &[Constraint] = match category {
        Category::Income => &[
            Constraint::Length(7),
            Constraint::Min(12),
            Constraint::Length(16),
        ],
        Category::Expense => &[
            Constraint::Length(7),
            Constraint::Min(12),
            Constraint::Length(16),
            Constraint::Length(5),
        ],
    };

    let table = Table::new(rows, widths.to_vec()).header(header).block(block);
    f.render_widget(table, area);
}
