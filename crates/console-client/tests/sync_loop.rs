// crates/console-client/tests/sync_loop.rs
//
// Sync-loop timing on tokio's paused clock.
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use console_client::api::{ApiError, Backend};
use console_client::runtime;
use console_core::{
    Account, Command, Console, Event, ExecutionLog, Feed, Order, OrderRequest,
};
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration, Instant};

const PERIOD: Duration = Duration::from_secs(10);

/// Orders take longer than a whole period to come back.
struct SlowOrders;

#[async_trait]
impl Backend for SlowOrders {
    async fn fetch_accounts(&self) -> Result<Vec<Account>, ApiError> {
        Ok(Vec::new())
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, ApiError> {
        sleep(Duration::from_secs(15)).await;
        Ok(Vec::new())
    }

    async fn fetch_execution_logs(&self) -> Result<Vec<ExecutionLog>, ApiError> {
        Ok(Vec::new())
    }

    async fn submit_order(&self, _request: &OrderRequest) -> Result<Order, ApiError> {
        Err(ApiError::Transport("not used".to_string()))
    }

    async fn cancel_order(&self, _order_id: i64) -> Result<Order, ApiError> {
        Err(ApiError::Transport("not used".to_string()))
    }
}

fn orders_ticket(commands: &[Command]) -> u64 {
    commands
        .iter()
        .find_map(|c| match c {
            Command::Fetch(ticket) if ticket.feed == Feed::Orders => Some(ticket.seq),
            _ => None,
        })
        .expect("orders fetch")
}

#[tokio::test(start_paused = true)]
async fn first_tick_waits_one_period() {
    let start = Instant::now();
    let mut sync = runtime::sync_interval(PERIOD);

    sync.tick().await;
    assert_eq!(start.elapsed(), PERIOD);
}

#[tokio::test(start_paused = true)]
async fn slow_handler_skips_missed_ticks_and_keeps_the_grid() {
    let start = Instant::now();
    let mut sync = runtime::sync_interval(PERIOD);

    sync.tick().await;
    assert_eq!(start.elapsed(), Duration::from_secs(10));

    // the handler overruns past the 20s and 30s ticks
    sleep(Duration::from_secs(25)).await;

    // one late tick, not two bunched together
    sync.tick().await;
    assert_eq!(start.elapsed(), Duration::from_secs(35));

    // back on the 10s grid
    sync.tick().await;
    assert_eq!(start.elapsed(), Duration::from_secs(40));
}

#[tokio::test(start_paused = true)]
async fn tick_does_not_wait_for_previous_fetch() {
    let backend: Arc<dyn Backend> = Arc::new(SlowOrders);
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let mut console = Console::new(Utc);
    let mut sync = runtime::sync_interval(PERIOD);

    sync.tick().await;
    let first = console.tick();
    assert_eq!(orders_ticket(&first), 1);
    runtime::spawn_all(first, &backend, &tx);

    sync.tick().await;

    // only the execution logs have come back by now
    while let Ok(event) = rx.try_recv() {
        match &event {
            Event::Fetched(ticket, _) => assert_eq!(ticket.feed, Feed::ExecutionLogs),
            other => panic!("unexpected event {:?}", other),
        }
        console.handle(event, Instant::now());
    }

    let second = console.tick();
    assert_eq!(orders_ticket(&second), 2);
    assert_eq!(console.tokens().pending(Feed::Orders), 2);
    runtime::spawn_all(second, &backend, &tx);

    // both orders fetches land eventually; nothing is left outstanding
    let mut orders_seen = Vec::new();
    while orders_seen.len() < 2 {
        let event = rx.recv().await.expect("event");
        if let Event::Fetched(ticket, _) = &event {
            if ticket.feed == Feed::Orders {
                orders_seen.push(ticket.seq);
            }
        }
        console.handle(event, Instant::now());
    }
    assert_eq!(orders_seen, vec![1, 2]);
    assert_eq!(console.tokens().pending(Feed::Orders), 0);
}
