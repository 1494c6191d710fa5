//! Rendering of feed snapshots into views and markup.
//!
//! A render call turns a whole collection into a fresh [`Table`]; there is
//! no retained state and no diffing. Applying the result replaces whatever
//! the target held before, so rendering the same snapshot twice gives the
//! same view and byte-identical markup.

use chrono::TimeZone;

use crate::feed::Feed;
use crate::format::{format_currency, format_date_time, format_price};
use crate::model::{Account, ExecutionLog, Order};
use crate::projector::project;
use crate::tag::{SideTag, StatusTag};

pub const ACCOUNT_COLUMNS: &[&str] = &["Account", "Balance", "Available", "Status"];

pub const ORDER_COLUMNS: &[&str] = &[
    "Order #", "Account", "Symbol", "Type", "Side", "Qty", "Price", "Status", "Time",
];

pub const LOG_COLUMNS: &[&str] = &[
    "ID", "Order", "Qty", "Price", "Total", "Status", "Message", "Time",
];

/// How a single cell is decorated.
#[derive(Debug, Clone, PartialEq)]
pub enum CellStyle {
    Plain,
    Strong,
    Balance,
    Side(SideTag),
    Status(StatusTag),
    Badge(StatusTag),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub style: CellStyle,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: CellStyle::Plain }
    }

    fn styled(text: impl Into<String>, style: CellStyle) -> Self {
        Self { text: text.into(), style }
    }

    fn td_html(&self) -> String {
        let text = escape(&self.text);
        match &self.style {
            CellStyle::Plain => format!("<td>{}</td>", text),
            CellStyle::Strong => format!("<td><strong>{}</strong></td>", text),
            CellStyle::Side(tag) => format!("<td class=\"{}\">{}</td>", tag.class(), text),
            CellStyle::Status(tag) => format!("<td class=\"{}\">{}</td>", tag.class(), text),
            CellStyle::Balance | CellStyle::Badge(_) => format!("<td>{}</td>", self.inline_html()),
        }
    }

    fn inline_html(&self) -> String {
        let text = escape(&self.text);
        match &self.style {
            CellStyle::Plain => text,
            CellStyle::Strong => format!("<strong>{}</strong>", text),
            CellStyle::Balance => format!("<span class=\"balance\">{}</span>", text),
            CellStyle::Side(tag) => format!("<span class=\"{}\">{}</span>", tag.class(), text),
            CellStyle::Status(tag) => format!("<span class=\"{}\">{}</span>", tag.class(), text),
            CellStyle::Badge(tag) => {
                format!("<span class=\"status-badge {}\">{}</span>", tag.class(), text)
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    /// The feed is empty.
    Empty,
    /// The feed could not be fetched.
    Error,
    /// Nothing has been fetched yet.
    Loading,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Rows(Vec<Vec<Cell>>),
    Notice { text: &'static str, kind: NoticeKind },
}

/// A rendered feed: column headings plus either data rows or a single
/// explanatory notice.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: &'static [&'static str],
    pub body: Body,
}

impl Table {
    /// Shown for a feed that returned no records.
    pub fn placeholder(feed: Feed) -> Self {
        let text = match feed {
            Feed::Accounts => "No accounts found",
            Feed::Orders => "No orders yet",
            Feed::ExecutionLogs => "No execution logs yet",
        };
        Self {
            columns: columns_for(feed),
            body: Body::Notice { text, kind: NoticeKind::Empty },
        }
    }

    /// Shown until the first fetch of a feed completes.
    pub fn loading(feed: Feed) -> Self {
        Self {
            columns: columns_for(feed),
            body: Body::Notice { text: "Loading...", kind: NoticeKind::Loading },
        }
    }

    /// Shown for a feed whose fetch failed.
    pub fn failure(feed: Feed) -> Self {
        let text = match feed {
            Feed::Accounts => "Failed to load accounts",
            Feed::Orders => "Failed to load orders",
            Feed::ExecutionLogs => "Failed to load logs",
        };
        Self {
            columns: columns_for(feed),
            body: Body::Notice { text, kind: NoticeKind::Error },
        }
    }

    /// Data rows, empty when the table holds a notice.
    pub fn rows(&self) -> &[Vec<Cell>] {
        match &self.body {
            Body::Rows(rows) => rows,
            Body::Notice { .. } => &[],
        }
    }

    pub fn notice(&self) -> Option<(&'static str, NoticeKind)> {
        match &self.body {
            Body::Rows(_) => None,
            Body::Notice { text, kind } => Some((*text, *kind)),
        }
    }

    /// Table body markup: one `<tr>` per row, or a single notice row that
    /// spans every column.
    pub fn to_html(&self) -> String {
        match &self.body {
            Body::Rows(rows) => rows
                .iter()
                .map(|row| {
                    let cells: String = row.iter().map(Cell::td_html).collect();
                    format!("<tr>{}</tr>", cells)
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Body::Notice { text, kind } => format!(
                "<tr><td colspan=\"{}\" class=\"{}\">{}</td></tr>",
                self.columns.len(),
                notice_class(*kind),
                escape(text)
            ),
        }
    }

    /// Card markup: the first cell becomes the heading, every other cell a
    /// `label: value` paragraph. Used for the accounts panel.
    pub fn to_cards_html(&self) -> String {
        match &self.body {
            Body::Rows(rows) => rows
                .iter()
                .map(|row| {
                    let mut card = String::from("<div class=\"account-item\">");
                    let mut cells = row.iter().zip(self.columns.iter());
                    if let Some((heading, _)) = cells.next() {
                        card.push_str(&format!("<h3>{}</h3>", heading.inline_html()));
                    }
                    for (cell, label) in cells {
                        card.push_str(&format!("<p>{}: {}</p>", label, cell.inline_html()));
                    }
                    card.push_str("</div>");
                    card
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Body::Notice { text, kind: NoticeKind::Empty | NoticeKind::Loading } => {
                format!("<p>{}</p>", escape(text))
            }
            Body::Notice { text, kind: NoticeKind::Error } => {
                format!("<div class=\"error\">{}</div>", escape(text))
            }
        }
    }
}

/// One entry of the account dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

pub fn options_html(options: &[SelectOption]) -> String {
    options
        .iter()
        .map(|opt| {
            format!(
                "<option value=\"{}\">{}</option>",
                escape(&opt.value),
                escape(&opt.label)
            )
        })
        .collect()
}

/// Turns snapshots into tables. Timestamps are shown in `tz`.
#[derive(Debug, Clone)]
pub struct Renderer<Tz: TimeZone> {
    tz: Tz,
}

impl<Tz> Renderer<Tz>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// All accounts, in backend order.
    pub fn accounts(&self, accounts: &[Account]) -> Table {
        if accounts.is_empty() {
            return Table::placeholder(Feed::Accounts);
        }

        let rows = accounts
            .iter()
            .map(|account| {
                vec![
                    Cell::plain(account.account_number.clone()),
                    Cell::styled(format_currency(account.balance), CellStyle::Balance),
                    Cell::styled(format_currency(account.available_balance), CellStyle::Balance),
                    Cell::styled(
                        account.status.clone(),
                        CellStyle::Badge(StatusTag::from_raw(&account.status)),
                    ),
                ]
            })
            .collect();

        Table { columns: ACCOUNT_COLUMNS, body: Body::Rows(rows) }
    }

    /// Newest orders first, at most the display window.
    pub fn orders(&self, orders: &[Order]) -> Table {
        if orders.is_empty() {
            return Table::placeholder(Feed::Orders);
        }

        let rows = project(orders)
            .into_iter()
            .map(|order| {
                vec![
                    Cell::plain(order.order_number.clone()),
                    Cell::plain(order.account_id.to_string()),
                    Cell::styled(order.symbol.clone(), CellStyle::Strong),
                    Cell::plain(order.order_type.clone()),
                    Cell::styled(order.side.clone(), CellStyle::Side(SideTag::from_raw(&order.side))),
                    Cell::plain(order.quantity.to_string()),
                    Cell::plain(format_price(order.executed_price)),
                    Cell::styled(
                        order.status.clone(),
                        CellStyle::Status(StatusTag::from_raw(&order.status)),
                    ),
                    Cell::plain(format_date_time(&order.created_at, &self.tz)),
                ]
            })
            .collect();

        Table { columns: ORDER_COLUMNS, body: Body::Rows(rows) }
    }

    /// Newest log entries first, at most the display window.
    pub fn execution_logs(&self, logs: &[ExecutionLog]) -> Table {
        if logs.is_empty() {
            return Table::placeholder(Feed::ExecutionLogs);
        }

        let rows = project(logs)
            .into_iter()
            .map(|log| {
                vec![
                    Cell::plain(log.id.to_string()),
                    Cell::plain(log.order_id.to_string()),
                    Cell::plain(log.quantity.to_string()),
                    Cell::plain(format_currency(log.price)),
                    Cell::styled(format_currency(log.total_amount), CellStyle::Strong),
                    Cell::styled(log.status.clone(), CellStyle::Status(StatusTag::from_raw(&log.status))),
                    Cell::plain(log.message.clone().unwrap_or_default()),
                    Cell::plain(format_date_time(&log.executed_at, &self.tz)),
                ]
            })
            .collect();

        Table { columns: LOG_COLUMNS, body: Body::Rows(rows) }
    }

    /// Dropdown entries: a placeholder with an empty value, then one option
    /// per account.
    pub fn account_options(&self, accounts: &[Account]) -> Vec<SelectOption> {
        let mut options = Vec::with_capacity(accounts.len() + 1);
        options.push(SelectOption {
            value: String::new(),
            label: "Select Account".to_string(),
        });
        options.extend(accounts.iter().map(|account| SelectOption {
            value: account.id.to_string(),
            label: format!("{} - {}", account.account_number, format_currency(account.balance)),
        }));
        options
    }
}

fn columns_for(feed: Feed) -> &'static [&'static str] {
    match feed {
        Feed::Accounts => ACCOUNT_COLUMNS,
        Feed::Orders => ORDER_COLUMNS,
        Feed::ExecutionLogs => LOG_COLUMNS,
    }
}

fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Empty => "empty",
        NoticeKind::Error => "error",
        NoticeKind::Loading => "loading",
    }
}

pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
