//! console-core
//!
//! Pure state for the order console: backend payload types, display
//! formatting, the most-recent-first projection, markup rendering, the
//! order-entry form and the `Console` state machine that ties them together.
//!
//! Nothing in here performs I/O. The client crate executes the `Command`s a
//! `Console` emits and feeds the results back in as `Event`s.

pub mod console;
pub mod error;
pub mod feed;
pub mod form;
pub mod format;
pub mod message;
pub mod model;
pub mod projector;
pub mod render;
pub mod tag;

pub use console::{Command, Console, Event, OrderOutcome, Page};
pub use error::FormError;
pub use feed::{Feed, FeedData, FeedTokens, Ticket};
pub use form::{FieldState, FormField, OrderForm, SubmitButton, SUBMITTING_LABEL, SUBMIT_LABEL};
pub use message::{Message, MessageKind, MessageSlot};
pub use model::{Account, ExecutionLog, Order, OrderRequest, OrderSide, OrderType, Rejection};
pub use projector::{project, DISPLAY_WINDOW};
pub use render::{Body, Cell, CellStyle, NoticeKind, Renderer, SelectOption, Table};
pub use tag::{SideTag, StatusTag};
