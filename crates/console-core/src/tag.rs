//! Display tags for backend status and side strings.
//!
//! The backend's vocabulary is mapped onto a closed set here, so a class
//! name in the rendered markup is always one we know about. Anything else
//! becomes `Unknown`.

/// Status of an account, order or execution log entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StatusTag {
    // accounts
    Active,
    Frozen,
    Closed,
    // orders
    Pending,
    Executed,
    PartiallyFilled,
    Rejected,
    Cancelled,
    // execution logs
    Success,
    Failed,
    Partial,
    Unknown,
}

impl StatusTag {
    /// Case-sensitive, like the backend's enum names.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "ACTIVE" => StatusTag::Active,
            "FROZEN" => StatusTag::Frozen,
            "CLOSED" => StatusTag::Closed,
            "PENDING" => StatusTag::Pending,
            "EXECUTED" => StatusTag::Executed,
            "PARTIALLY_FILLED" => StatusTag::PartiallyFilled,
            "REJECTED" => StatusTag::Rejected,
            "CANCELLED" => StatusTag::Cancelled,
            "SUCCESS" => StatusTag::Success,
            "FAILED" => StatusTag::Failed,
            "PARTIAL" => StatusTag::Partial,
            _ => StatusTag::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusTag::Active => "ACTIVE",
            StatusTag::Frozen => "FROZEN",
            StatusTag::Closed => "CLOSED",
            StatusTag::Pending => "PENDING",
            StatusTag::Executed => "EXECUTED",
            StatusTag::PartiallyFilled => "PARTIALLY_FILLED",
            StatusTag::Rejected => "REJECTED",
            StatusTag::Cancelled => "CANCELLED",
            StatusTag::Success => "SUCCESS",
            StatusTag::Failed => "FAILED",
            StatusTag::Partial => "PARTIAL",
            StatusTag::Unknown => "UNKNOWN",
        }
    }

    /// CSS class, e.g. `status-EXECUTED`.
    pub fn class(self) -> String {
        format!("status-{}", self.as_str())
    }
}

/// Order side as a display hint.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SideTag {
    Buy,
    Sell,
    Unknown,
}

impl SideTag {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "BUY" => SideTag::Buy,
            "SELL" => SideTag::Sell,
            _ => SideTag::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SideTag::Buy => "BUY",
            SideTag::Sell => "SELL",
            SideTag::Unknown => "UNKNOWN",
        }
    }

    /// CSS class, e.g. `side-BUY`.
    pub fn class(self) -> String {
        format!("side-{}", self.as_str())
    }
}
