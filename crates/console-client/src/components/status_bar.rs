// crates/console-client/src/components/status_bar.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};
use console_core::MessageKind;

/// Bottom bar: the order message when one is showing, otherwise shortcuts.
pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let (msg, style) = if let Some(message) = app.console.message().visible() {
        let color = match message.kind {
            MessageKind::Success => Color::Green,
            MessageKind::Error => Color::Red,
        };
        let line = Line::from(Span::styled(
            message.text.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        (line, Style::default().fg(color))
    } else {
        match app.input_mode {
            InputMode::Normal => {
                let shortcuts = vec![
                    Span::styled("[N]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                    Span::raw("ew order "),
                    Span::styled("[M]", Style::default().fg(Color::Yellow)),
                    Span::raw("arket/Limit "),
                    Span::styled("[C]", Style::default().fg(Color::Cyan)),
                    Span::raw("ancel order "),
                    Span::styled("[R]", Style::default().fg(Color::Magenta)),
                    Span::raw("efresh "),
                    Span::styled("[Q]", Style::default().fg(Color::Gray)),
                    Span::raw("uit"),
                ];
                (Line::from(shortcuts), Style::default())
            }
            InputMode::Editing => {
                let input = vec![
                    Span::raw("Editing: "),
                    Span::styled(
                        app.console.form().focus().label(),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(" [Enter] Submit [Esc] Leave"),
                ];
                (Line::from(input), Style::default().fg(Color::Yellow))
            }
        }
    };

    let status_block = Block::default()
        .borders(Borders::ALL)
        .border_style(style);

    let paragraph = Paragraph::new(msg)
        .block(status_block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
