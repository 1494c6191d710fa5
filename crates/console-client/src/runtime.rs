// crates/console-client/src/runtime.rs
//
// Runs the commands a Console emits against a Backend and turns the results
// into events. The console itself is only ever touched by the task that owns
// it; spawned work reports back over a channel.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::TimeZone;
use console_core::{Command, Console, Event, Feed, FeedData, Order, OrderOutcome};
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};
use tracing::{debug, error, warn};

use crate::api::{ApiError, Backend};

/// Run one command to completion.
pub async fn execute(command: Command, backend: &dyn Backend) -> Event {
    match command {
        Command::Fetch(ticket) => {
            let result = fetch(ticket.feed, backend).await.map_err(|e| {
                warn!("Error loading {}: {}", ticket.feed, e);
                e.to_string()
            });
            Event::Fetched(ticket, result)
        }
        Command::Submit(request) => {
            let result = backend.submit_order(&request).await;
            Event::Submitted(outcome("creating order", result))
        }
        Command::Cancel { order_id } => {
            let result = backend.cancel_order(order_id).await;
            Event::Cancelled(outcome("cancelling order", result))
        }
    }
}

async fn fetch(feed: Feed, backend: &dyn Backend) -> Result<FeedData, ApiError> {
    Ok(match feed {
        Feed::Accounts => FeedData::Accounts(backend.fetch_accounts().await?),
        Feed::Orders => FeedData::Orders(backend.fetch_orders().await?),
        Feed::ExecutionLogs => FeedData::ExecutionLogs(backend.fetch_execution_logs().await?),
    })
}

fn outcome(what: &str, result: Result<Order, ApiError>) -> OrderOutcome {
    match result {
        Ok(order) => {
            debug!("{}: {} -> {}", what, order.order_number, order.status);
            OrderOutcome::Accepted(order)
        }
        Err(ApiError::Rejected { status, message }) => {
            warn!("{}: rejected ({})", what, status);
            OrderOutcome::Rejected(message)
        }
        Err(e) => {
            error!("Error {}: {}", what, e);
            OrderOutcome::TransportFailure(e.to_string())
        }
    }
}

/// The event reported when a command's task dies before producing one.
fn crashed(command: &Command, reason: String) -> Event {
    match command {
        Command::Fetch(ticket) => Event::Fetched(*ticket, Err(reason)),
        Command::Submit(_) => Event::Submitted(OrderOutcome::TransportFailure(reason)),
        Command::Cancel { .. } => Event::Cancelled(OrderOutcome::TransportFailure(reason)),
    }
}

/// Run a command in the background and send its event to `tx`.
///
/// Every command produces exactly one event, even if the request task
/// panics, so a submission can never leave the submit button disabled.
pub fn spawn(command: Command, backend: Arc<dyn Backend>, tx: UnboundedSender<Event>) {
    tokio::spawn(async move {
        let guard = command.clone();
        let task = tokio::spawn(async move { execute(command, backend.as_ref()).await });

        let event = match task.await {
            Ok(event) => event,
            Err(e) => {
                error!("Request task failed: {}", e);
                crashed(&guard, e.to_string())
            }
        };

        if tx.send(event).is_err() {
            debug!("Console gone, dropping event");
        }
    });
}

pub fn spawn_all(commands: Vec<Command>, backend: &Arc<dyn Backend>, tx: &UnboundedSender<Event>) {
    for command in commands {
        spawn(command, Arc::clone(backend), tx.clone());
    }
}

/// Sync-loop timer. The first tick is one period from now (the initial load
/// covers time zero) and ticks stay on the wall-clock grid: a tick that is
/// missed is skipped, not bunched up.
pub fn sync_interval(period: Duration) -> Interval {
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

/// Run `commands`, and everything they lead to, inline until nothing is
/// left. Used for one-shot snapshots and by tests.
pub async fn settle<Tz>(console: &mut Console<Tz>, backend: &dyn Backend, commands: Vec<Command>)
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut queue: VecDeque<Command> = commands.into();
    while let Some(command) = queue.pop_front() {
        let event = execute(command, backend).await;
        queue.extend(console.handle(event, Instant::now()));
    }
}
