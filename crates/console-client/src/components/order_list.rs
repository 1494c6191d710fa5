// crates/console-client/src/components/order_list.rs

use ratatui::{
    layout::{Constraint, Rect},
    Frame,
};

use crate::app::{App, Panel};
use crate::components::feed_table::draw_feed_table;

pub fn draw_order_list(f: &mut Frame, area: Rect, app: &App) {
    let widths = [
        Constraint::Length(18), // Order #
        Constraint::Length(7),  // Account
        Constraint::Length(7),  // Symbol
        Constraint::Length(7),  // Type
        Constraint::Length(5),  // Side
        Constraint::Length(6),  // Qty
        Constraint::Length(11), // Price
        Constraint::Length(17), // Status
        Constraint::Min(20),    // Time
    ];

    let focused = app.current_panel == Panel::Orders;
    draw_feed_table(
        f,
        area,
        "Orders (latest 20)",
        &app.console.page().orders,
        &widths,
        focused,
        focused.then_some(app.selected_order_index),
    );
}
