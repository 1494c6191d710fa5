//! Error types for the console core.
//!
//! The core does no I/O, so the only failure it can report is an order form
//! that is missing a required field. Transport and backend errors live in
//! the client crate.

use thiserror::Error;

use crate::form::FormField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A field marked required is empty.
    #[error("Please fill out the {} field", .0.label())]
    MissingField(FormField),
}
