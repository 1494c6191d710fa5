// crates/console-client/src/components/feed_table.rs

use console_core::render::{Cell as ViewCell, CellStyle, NoticeKind};
use console_core::{SideTag, StatusTag, Table as FeedView};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

/// Draw a rendered feed. The whole table is rebuilt from the view on every
/// frame, same as the markup.
pub fn draw_feed_table(
    f: &mut Frame,
    area: Rect,
    title: &str,
    view: &FeedView,
    widths: &[Constraint],
    focused: bool,
    selected: Option<usize>,
) {
    let header = Row::new(view.columns.iter().copied())
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = match view.notice() {
        Some((text, kind)) => {
            let style = match kind {
                NoticeKind::Error => Style::default().fg(Color::Red),
                NoticeKind::Empty | NoticeKind::Loading => Style::default().fg(Color::DarkGray),
            };
            vec![Row::new(vec![Cell::from(text).style(style)])]
        }
        None => view
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let base = if selected == Some(i) {
                    Style::default().bg(Color::DarkGray)
                } else {
                    Style::default()
                };
                Row::new(row.iter().map(|cell| view_cell(cell, base)).collect::<Vec<_>>())
            })
            .collect(),
    };

    let table = Table::new(rows, widths.to_vec()).header(header).block(
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused { Color::Yellow } else { Color::White })),
    );

    f.render_widget(table, area);
}

fn view_cell(cell: &ViewCell, base: Style) -> Cell<'static> {
    let style = match &cell.style {
        CellStyle::Plain => base,
        CellStyle::Strong => base.add_modifier(Modifier::BOLD),
        CellStyle::Balance => base.fg(Color::Cyan),
        CellStyle::Side(tag) => base.fg(side_color(*tag)),
        CellStyle::Status(tag) | CellStyle::Badge(tag) => base.fg(status_color(*tag)),
    };
    Cell::from(cell.text.clone()).style(style)
}

pub fn side_color(tag: SideTag) -> Color {
    match tag {
        SideTag::Buy => Color::Green,
        SideTag::Sell => Color::Red,
        SideTag::Unknown => Color::Gray,
    }
}

pub fn status_color(tag: StatusTag) -> Color {
    match tag {
        StatusTag::Active | StatusTag::Executed | StatusTag::Success => Color::Green,
        StatusTag::Pending | StatusTag::PartiallyFilled | StatusTag::Partial | StatusTag::Frozen => {
            Color::Yellow
        }
        StatusTag::Rejected | StatusTag::Failed => Color::Red,
        StatusTag::Closed | StatusTag::Cancelled => Color::DarkGray,
        StatusTag::Unknown => Color::Gray,
    }
}
