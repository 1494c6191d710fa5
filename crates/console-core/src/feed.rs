//! Feeds and per-feed request tokens.
//!
//! Polls are wall-clock anchored, so two requests for the same feed can be in
//! flight at once and complete in either order. Every request carries a
//! [`Ticket`]; a result is applied only when its ticket is newer than the
//! last one applied for that feed, so a slow, older response never replaces
//! a fresher render.

use std::fmt;

use crate::model::{Account, ExecutionLog, Order};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Feed {
    Accounts,
    Orders,
    ExecutionLogs,
}

impl Feed {
    pub const ALL: [Feed; 3] = [Feed::Accounts, Feed::Orders, Feed::ExecutionLogs];

    /// Feeds refreshed on every sync-loop tick. Accounts are only reloaded
    /// on startup and after an order goes through.
    pub const POLLED: [Feed; 2] = [Feed::Orders, Feed::ExecutionLogs];

    /// Path under the API root.
    pub fn path(self) -> &'static str {
        match self {
            Feed::Accounts => "accounts",
            Feed::Orders => "orders",
            Feed::ExecutionLogs => "execution-logs",
        }
    }

    fn index(self) -> usize {
        match self {
            Feed::Accounts => 0,
            Feed::Orders => 1,
            Feed::ExecutionLogs => 2,
        }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A fetched snapshot of one feed.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedData {
    Accounts(Vec<Account>),
    Orders(Vec<Order>),
    ExecutionLogs(Vec<ExecutionLog>),
}

/// Identifies one fetch request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub feed: Feed,
    pub seq: u64,
}

#[derive(Debug, Default, Clone)]
pub struct FeedTokens {
    issued: [u64; 3],
    applied: [u64; 3],
}

impl FeedTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a ticket for a new request. Sequence numbers start at 1.
    pub fn issue(&mut self, feed: Feed) -> Ticket {
        let slot = &mut self.issued[feed.index()];
        *slot += 1;
        Ticket { feed, seq: *slot }
    }

    /// Record a completed request. Returns `false` when a newer request for
    /// the same feed has already been applied, i.e. this result is stale.
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        let applied = &mut self.applied[ticket.feed.index()];
        if ticket.seq <= *applied {
            return false;
        }
        *applied = ticket.seq;
        true
    }

    /// Number of requests for `feed` issued but not yet superseded by an
    /// applied result.
    pub fn pending(&self, feed: Feed) -> u64 {
        let i = feed.index();
        self.issued[i].saturating_sub(self.applied[i])
    }
}
