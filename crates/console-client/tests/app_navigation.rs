// crates/console-client/tests/app_navigation.rs
use console_client::app::{App, InputMode, Panel};
use console_core::{
    Account, Command, Event, Feed, FeedData, FormField, Order, OrderSide, OrderType,
};
use tokio::time::Instant;

fn order(id: i64) -> Order {
    Order {
        id,
        order_number: format!("ORD-{}", id),
        status: "PENDING".to_string(),
        created_at: "2024-01-15T10:30:00".to_string(),
        ..Order::default()
    }
}

fn account(id: i64) -> Account {
    Account {
        id,
        account_number: format!("ACC-00{}", id),
        user_id: None,
        balance: 500.0,
        available_balance: 500.0,
        status: "ACTIVE".to_string(),
        created_at: None,
    }
}

/// Answer every fetch of the initial load with the given orders.
fn loaded_app(orders: Vec<Order>) -> App {
    let mut app = App::new("http://localhost:8080/api");
    for command in app.console.initial_load() {
        if let Command::Fetch(ticket) = command {
            let data = match ticket.feed {
                Feed::Accounts => FeedData::Accounts(vec![account(1), account(2)]),
                Feed::Orders => FeedData::Orders(orders.clone()),
                Feed::ExecutionLogs => FeedData::ExecutionLogs(Vec::new()),
            };
            app.handle_event(Event::Fetched(ticket, Ok(data)), Instant::now());
        }
    }
    app
}

#[test]
fn tab_cycles_panels_and_order_entry_edits() {
    let mut app = App::new("http://localhost:8080/api");
    assert_eq!(app.current_panel, Panel::Orders);
    assert_eq!(app.input_mode, InputMode::Normal);

    app.next_panel();
    assert_eq!(app.current_panel, Panel::ExecutionLogs);
    app.next_panel();
    assert_eq!(app.current_panel, Panel::Accounts);
    app.next_panel();
    assert_eq!(app.current_panel, Panel::OrderEntry);
    assert_eq!(app.input_mode, InputMode::Editing);

    app.prev_panel();
    assert_eq!(app.current_panel, Panel::Accounts);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn escape_leaves_order_entry() {
    let mut app = App::new("http://localhost:8080/api");
    app.start_order_entry();
    assert_eq!(app.input_mode, InputMode::Editing);

    app.cancel_input();
    assert_eq!(app.current_panel, Panel::Orders);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn left_right_changes_focused_choice() {
    let mut app = loaded_app(Vec::new());
    app.start_order_entry();
    assert_eq!(app.console.form().focus(), FormField::Account);

    app.cycle_choice(true);
    assert_eq!(app.console.form().account_id(), "1");
    app.cycle_choice(true);
    assert_eq!(app.console.form().account_id(), "2");

    app.move_selection_down(); // symbol
    app.enter_char('m');
    app.move_selection_down(); // type
    app.cycle_choice(true);
    assert_eq!(app.console.form().order_type(), OrderType::Limit);
    app.move_selection_down(); // side
    app.cycle_choice(false);
    assert_eq!(app.console.form().side(), OrderSide::Sell);
    assert_eq!(app.console.form().symbol(), "m");
}

#[test]
fn order_selection_is_clamped_to_visible_rows() {
    let mut app = loaded_app(vec![order(1), order(2), order(3)]);
    assert_eq!(app.fetches, 3);
    assert_eq!(app.failed_fetches, 0);
    assert!(app.last_sync.is_some());

    app.move_selection_down();
    app.move_selection_down();
    app.move_selection_down();
    assert_eq!(app.selected_order_index, 2);

    // orders shrink on the next poll
    let tick = app.tick();
    let Some(Command::Fetch(ticket)) = tick.into_iter().next() else {
        panic!("expected an orders fetch");
    };
    app.handle_event(
        Event::Fetched(ticket, Ok(FeedData::Orders(vec![order(1)]))),
        Instant::now(),
    );
    assert_eq!(app.selected_order_index, 0);
}

#[test]
fn cancel_uses_highlighted_row() {
    // newest first: row 0 is order 3
    let mut app = loaded_app(vec![order(1), order(2), order(3)]);
    app.move_selection_down();

    let commands = app.cancel_selected_order();
    assert!(matches!(commands.as_slice(), [Command::Cancel { order_id: 2 }]));
}

#[test]
fn failed_fetch_is_counted() {
    let mut app = App::new("http://localhost:8080/api");
    let tick = app.tick();
    for command in tick {
        if let Command::Fetch(ticket) = command {
            app.handle_event(
                Event::Fetched(ticket, Err("http 500".to_string())),
                Instant::now(),
            );
        }
    }
    assert_eq!(app.fetches, 2);
    assert_eq!(app.failed_fetches, 2);
}
