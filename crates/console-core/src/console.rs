//! The console state machine.
//!
//! `Console` owns everything the screen shows: the rendered feeds, the order
//! form, its submit button and the message slot. It never does I/O itself.
//! Each operation returns the `Command`s to run; the caller runs them and
//! hands the results back as `Event`s. All mutation happens through
//! `&mut Console` on a single task, so writers are ordered by completion.

use chrono::TimeZone;
use tokio::time::Instant;

use crate::feed::{Feed, FeedData, FeedTokens, Ticket};
use crate::form::{OrderForm, SubmitButton};
use crate::message::{MessageKind, MessageSlot};
use crate::model::{Order, OrderRequest};
use crate::projector::project;
use crate::render::{Renderer, SelectOption, Table};

pub const SUBMIT_REJECTED: &str = "Failed to create order";
pub const CANCEL_REJECTED: &str = "Failed to cancel order";
pub const NETWORK_ERROR: &str = "Network error. Please try again.";

/// Work for the runtime to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Fetch(Ticket),
    Submit(OrderRequest),
    Cancel { order_id: i64 },
}

/// Completed work, fed back into [`Console::handle`].
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A feed fetch finished. The error carries a description for logging.
    Fetched(Ticket, Result<FeedData, String>),
    Submitted(OrderOutcome),
    Cancelled(OrderOutcome),
}

/// How a create or cancel request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    Accepted(Order),
    /// Non-2xx with an error body; the message is absent if the body had none.
    Rejected(Option<String>),
    /// No usable response at all.
    TransportFailure(String),
}

/// Render targets. Each is replaced wholesale on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub accounts: Table,
    pub account_options: Vec<SelectOption>,
    pub orders: Table,
    pub execution_logs: Table,
}

impl Page {
    fn new() -> Self {
        Self {
            accounts: Table::loading(Feed::Accounts),
            account_options: Vec::new(),
            orders: Table::loading(Feed::Orders),
            execution_logs: Table::loading(Feed::ExecutionLogs),
        }
    }
}

pub struct Console<Tz: TimeZone> {
    renderer: Renderer<Tz>,
    page: Page,
    form: OrderForm,
    submit: SubmitButton,
    message: MessageSlot,
    tokens: FeedTokens,
    // ids of the rows currently shown in the orders table, top to bottom
    order_ids: Vec<i64>,
}

impl<Tz> Console<Tz>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    pub fn new(tz: Tz) -> Self {
        Self {
            renderer: Renderer::new(tz),
            page: Page::new(),
            form: OrderForm::new(),
            submit: SubmitButton::default(),
            message: MessageSlot::new(),
            tokens: FeedTokens::new(),
            order_ids: Vec::new(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut OrderForm {
        &mut self.form
    }

    pub fn submit_button(&self) -> &SubmitButton {
        &self.submit
    }

    pub fn message(&self) -> &MessageSlot {
        &self.message
    }

    pub fn tokens(&self) -> &FeedTokens {
        &self.tokens
    }

    pub fn order_count(&self) -> usize {
        self.order_ids.len()
    }

    /// Cycle the account dropdown of the form.
    pub fn cycle_account(&mut self, forward: bool) {
        self.form.cycle_account(&self.page.account_options, forward);
    }

    // --- sync ---

    /// First load: every feed, accounts included.
    pub fn initial_load(&mut self) -> Vec<Command> {
        fetch_commands(&mut self.tokens, &Feed::ALL)
    }

    /// Periodic refresh of the two append-only feeds.
    pub fn tick(&mut self) -> Vec<Command> {
        fetch_commands(&mut self.tokens, &Feed::POLLED)
    }

    /// Out-of-band refresh of every feed.
    pub fn refresh_all(&mut self) -> Vec<Command> {
        fetch_commands(&mut self.tokens, &Feed::ALL)
    }

    pub fn handle(&mut self, event: Event, now: Instant) -> Vec<Command> {
        match event {
            Event::Fetched(ticket, result) => {
                self.apply_feed(ticket, result);
                Vec::new()
            }
            Event::Submitted(outcome) => self.finish_submission(outcome, now),
            Event::Cancelled(outcome) => self.finish_cancel(outcome, now),
        }
    }

    /// Render a fetch result into its target. Returns `false` if the result
    /// was stale and dropped.
    pub fn apply_feed(&mut self, ticket: Ticket, result: Result<FeedData, String>) -> bool {
        if !self.tokens.accept(ticket) {
            return false;
        }

        match result {
            Ok(FeedData::Accounts(accounts)) => {
                self.page.accounts = self.renderer.accounts(&accounts);
                self.page.account_options = self.renderer.account_options(&accounts);
                self.form.retain_account(&self.page.account_options);
            }
            Ok(FeedData::Orders(orders)) => {
                self.page.orders = self.renderer.orders(&orders);
                self.order_ids = project(&orders).into_iter().map(|o| o.id).collect();
            }
            Ok(FeedData::ExecutionLogs(logs)) => {
                self.page.execution_logs = self.renderer.execution_logs(&logs);
            }
            // the dropdown keeps its last good options
            Err(_) => match ticket.feed {
                Feed::Accounts => self.page.accounts = Table::failure(Feed::Accounts),
                Feed::Orders => {
                    self.page.orders = Table::failure(Feed::Orders);
                    self.order_ids.clear();
                }
                Feed::ExecutionLogs => {
                    self.page.execution_logs = Table::failure(Feed::ExecutionLogs)
                }
            },
        }
        true
    }

    // --- order entry ---

    /// Start submitting the form. Returns `None` while a submission is
    /// already in flight or when a required field is empty.
    pub fn submit(&mut self, now: Instant) -> Option<Command> {
        if self.submit.is_disabled() {
            return None;
        }
        if let Err(err) = self.form.check_required() {
            self.message.show(MessageKind::Error, err.to_string(), now);
            return None;
        }

        let request = self.form.gather();
        self.submit.disable();
        Some(Command::Submit(request))
    }

    /// Finish a submission. The submit button is re-enabled on every path,
    /// including a panic while handling the outcome.
    pub fn finish_submission(&mut self, outcome: OrderOutcome, now: Instant) -> Vec<Command> {
        let _enable = self.submit.enable_on_drop();

        match outcome {
            OrderOutcome::Accepted(order) => {
                self.message.show(
                    MessageKind::Success,
                    format!(
                        "Order {} executed successfully! Status: {}",
                        order.order_number, order.status
                    ),
                    now,
                );
                self.form.reset();
                fetch_commands(&mut self.tokens, &Feed::ALL)
            }
            OrderOutcome::Rejected(message) => {
                let text = message.unwrap_or_else(|| SUBMIT_REJECTED.to_string());
                self.message.show(MessageKind::Error, text, now);
                Vec::new()
            }
            OrderOutcome::TransportFailure(_) => {
                self.message.show(MessageKind::Error, NETWORK_ERROR, now);
                Vec::new()
            }
        }
    }

    /// Cancel the order shown on `row` of the orders table.
    pub fn cancel_order(&mut self, row: usize) -> Option<Command> {
        self.order_ids
            .get(row)
            .map(|&order_id| Command::Cancel { order_id })
    }

    pub fn finish_cancel(&mut self, outcome: OrderOutcome, now: Instant) -> Vec<Command> {
        match outcome {
            OrderOutcome::Accepted(order) => {
                self.message.show(
                    MessageKind::Success,
                    format!("Order {} cancelled", order.order_number),
                    now,
                );
                self.refresh_all()
            }
            OrderOutcome::Rejected(message) => {
                let text = message.unwrap_or_else(|| CANCEL_REJECTED.to_string());
                self.message.show(MessageKind::Error, text, now);
                Vec::new()
            }
            OrderOutcome::TransportFailure(_) => {
                self.message.show(MessageKind::Error, NETWORK_ERROR, now);
                Vec::new()
            }
        }
    }

    /// Hide the message once its deadline has passed.
    pub fn expire_message(&mut self, now: Instant) -> bool {
        self.message.expire(now)
    }
}

fn fetch_commands(tokens: &mut FeedTokens, feeds: &[Feed]) -> Vec<Command> {
    feeds
        .iter()
        .map(|&feed| Command::Fetch(tokens.issue(feed)))
        .collect()
}
