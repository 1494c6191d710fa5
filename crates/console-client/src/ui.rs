// crates/console-client/src/ui.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::components::{
    accounts::draw_accounts,
    execution_log::draw_execution_log,
    help::draw_help,
    order_entry::draw_order_entry,
    order_list::draw_order_list,
    status_bar::draw_status_bar,
};
use console_core::NoticeKind;

pub fn draw(f: &mut Frame, app: &App) {
    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    draw_header(f, chunks[0], app);
    draw_main_content(f, chunks[1], app);
    draw_status_bar(f, chunks[2], app);

    if app.show_help {
        draw_help(f, centered_rect(60, 60, f.size()));
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
        ])
        .split(area);

    // Left: backend and feed health
    let page = app.console.page();
    let healthy = [&page.accounts, &page.orders, &page.execution_logs]
        .iter()
        .all(|view| !matches!(view.notice(), Some((_, NoticeKind::Error))));
    let (health_symbol, health_color) = if healthy {
        ("✓", Color::Green)
    } else {
        ("✗", Color::Red)
    };

    let left_text = vec![
        Span::styled(
            app.api_root.as_str(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(health_symbol, Style::default().fg(health_color)),
    ];
    let left_paragraph = Paragraph::new(Line::from(left_text))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(left_paragraph, header_chunks[0]);

    // Center: sync stats
    let last_sync = app
        .last_sync
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string());
    let center_text = format!(
        "Last sync: {} | Fetches: {} | Failed: {}",
        last_sync, app.fetches, app.failed_fetches
    );
    let center_paragraph = Paragraph::new(center_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(center_paragraph, header_chunks[1]);

    // Right: Help hints
    let help_text = "[F1]Help [Tab]Panel [R]efresh";
    let right_paragraph = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(right_paragraph, header_chunks[2]);
}

fn draw_main_content(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Accounts + order entry
            Constraint::Percentage(65), // Feeds
        ])
        .split(area);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[0]);

    draw_accounts(f, left_chunks[0], app);
    draw_order_entry(f, left_chunks[1], app);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_order_list(f, right_chunks[0], app);
    draw_execution_log(f, right_chunks[1], app);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
