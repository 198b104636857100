use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_budget, format_percentage};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let summary = app.controller.summary();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + budget
            Constraint::Min(3),    // Cards
        ])
        .split(area);

    let budget_color = if summary.budget >= rust_decimal::Decimal::ZERO {
        theme::GREEN
    } else {
        theme::RED
    };
    let headline = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Available budget in {}", app.month_label),
            theme::dim_style(),
        )),
        Line::from(Span::styled(
            format_budget(summary.budget),
            Style::default()
                .fg(budget_color)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .centered();
    f.render_widget(headline, chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_card(
        f,
        cards[0],
        "Income",
        Line::from(Span::styled(
            format_amount(summary.total_income, Category::Income),
            theme::amount_style(Category::Income).add_modifier(Modifier::BOLD),
        )),
    );
    render_card(
        f,
        cards[1],
        "Expenses",
        Line::from(vec![
            Span::styled(
                format_amount(summary.total_expense, Category::Expense),
                theme::amount_style(Category::Expense).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ", theme::normal_style()),
            Span::styled(
                format_percentage(summary.budget_percentage),
                Style::default().fg(theme::YELLOW),
            ),
        ]),
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, content: Line) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    f.render_widget(Paragraph::new(content).centered().block(block), area);
}
