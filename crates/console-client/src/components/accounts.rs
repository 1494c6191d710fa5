// crates/console-client/src/components/accounts.rs

use ratatui::{
    layout::{Constraint, Rect},
    Frame,
};

use crate::app::{App, Panel};
use crate::components::feed_table::draw_feed_table;

pub fn draw_accounts(f: &mut Frame, area: Rect, app: &App) {
    let widths = [
        Constraint::Length(12), // Account
        Constraint::Length(14), // Balance
        Constraint::Length(14), // Available
        Constraint::Min(8),     // Status
    ];

    draw_feed_table(
        f,
        area,
        "Accounts",
        &app.console.page().accounts,
        &widths,
        app.current_panel == Panel::Accounts,
        None,
    );
}
