// crates/console-client/src/components/order_entry.rs

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Panel};
use console_core::{FormField, OrderSide, OrderType};

pub fn draw_order_entry(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.current_panel == Panel::OrderEntry;
    let block = Block::default()
        .title(" Order Entry ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if editing { Color::Yellow } else { Color::White }));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let form = app.console.form();
    let limit_visible = form.limit_price_field().visible;

    let mut constraints = vec![Constraint::Length(2); 5];
    if limit_visible {
        constraints.push(Constraint::Length(2));
    }
    constraints.push(Constraint::Min(1)); // spacer
    constraints.push(Constraint::Length(1)); // submit button
    constraints.push(Constraint::Length(1)); // hints

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    // Account dropdown shows the selected option's label
    let options = &app.console.page().account_options;
    let account_label = options
        .iter()
        .find(|opt| opt.value == form.account_id())
        .map(|opt| opt.label.clone())
        .unwrap_or_else(|| "Select Account".to_string());
    let account_style = if form.account_id().is_empty() {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let type_span = match form.order_type() {
        OrderType::Market => Span::styled("MARKET", Style::default().fg(Color::Yellow)),
        OrderType::Limit => Span::styled("LIMIT", Style::default().fg(Color::Blue)),
    };
    let side_span = match form.side() {
        OrderSide::Buy => Span::styled(
            "BUY",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        OrderSide::Sell => Span::styled(
            "SELL",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let mut fields = vec![
        (FormField::Account, Span::styled(account_label, account_style)),
        (FormField::Symbol, text_span(form.symbol())),
        (FormField::Type, type_span),
        (FormField::Side, side_span),
        (FormField::Quantity, text_span(form.quantity())),
    ];
    if limit_visible {
        fields.push((FormField::LimitPrice, text_span(form.limit_price())));
    }

    for (i, (field, value)) in fields.into_iter().enumerate() {
        let focused = editing && form.focus() == field;
        let marker = if focused { "> " } else { "  " };
        let mut spans = vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::raw(format!("{}: ", field.label())),
            value,
        ];
        if focused && field.is_text() {
            spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
        }
        if field == FormField::LimitPrice {
            spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
        }

        let widget = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(widget, chunks[i]);
    }

    let n = chunks.len();

    // Submit button
    let button = app.console.submit_button();
    let button_style = if button.is_disabled() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    };
    let button_widget = Paragraph::new(format!("[ {} ]", button.label()))
        .style(button_style)
        .alignment(Alignment::Center);
    f.render_widget(button_widget, chunks[n - 2]);

    let hints = if editing {
        "[Enter] Submit | [Up/Down] Field | [Left/Right] Choose | [Esc] Leave"
    } else {
        "[N] New Order | [M] Market/Limit"
    };
    let hints_widget = Paragraph::new(hints)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(hints_widget, chunks[n - 1]);
}

fn text_span(value: &str) -> Span<'static> {
    Span::styled(value.to_string(), Style::default().fg(Color::Cyan))
}
