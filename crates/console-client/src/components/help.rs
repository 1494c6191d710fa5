// crates/console-client/src/components/help.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const SHORTCUTS: &[(&str, Color, &str)] = &[
    ("N/n", Color::Green, "New Order (focus order entry)"),
    ("M/m", Color::Yellow, "Toggle Market/Limit Order"),
    ("Enter", Color::Green, "Submit Order (in order entry)"),
    ("Esc", Color::Gray, "Leave Order Entry"),
    ("←/→", Color::White, "Change Account / Type / Side"),
    ("C/c", Color::Cyan, "Cancel Selected Order"),
    ("R/r", Color::Magenta, "Refresh All Feeds"),
    ("Tab", Color::Blue, "Next Panel"),
    ("Shift+Tab", Color::Blue, "Previous Panel"),
    ("↑/k", Color::White, "Move Up"),
    ("↓/j", Color::White, "Move Down"),
    ("F1", Color::Gray, "Toggle Help"),
    ("Q/q", Color::Red, "Quit"),
];

pub fn draw_help(f: &mut Frame, area: Rect) {
    // Clear the area first for the overlay
    f.render_widget(Clear, area);

    let help_items: Vec<ListItem> = SHORTCUTS
        .iter()
        .map(|(key, color, action)| {
            ListItem::new(Line::from(vec![
                Span::styled(*key, Style::default().fg(*color).add_modifier(Modifier::BOLD)),
                Span::raw(format!(" - {}", action)),
            ]))
        })
        .collect();

    let help_list = List::new(help_items)
        .block(Block::default()
            .title(" Help - Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(help_list, area);

    // Add footer with close instruction
    let footer = Paragraph::new("Press F1 to close help")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let footer_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    f.render_widget(footer, footer_area);
}
