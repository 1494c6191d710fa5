// crates/console-client/src/components/execution_log.rs

use ratatui::{
    layout::{Constraint, Rect},
    Frame,
};

use crate::app::{App, Panel};
use crate::components::feed_table::draw_feed_table;

pub fn draw_execution_log(f: &mut Frame, area: Rect, app: &App) {
    let widths = [
        Constraint::Length(5),  // ID
        Constraint::Length(6),  // Order
        Constraint::Length(6),  // Qty
        Constraint::Length(11), // Price
        Constraint::Length(13), // Total
        Constraint::Length(8),  // Status
        Constraint::Min(20),    // Message
        Constraint::Length(20), // Time
    ];

    draw_feed_table(
        f,
        area,
        "Execution Logs (latest 20)",
        &app.console.page().execution_logs,
        &widths,
        app.current_panel == Panel::ExecutionLogs,
        None,
    );
}
