//! Checkout module.
//!
//! The checkout page shows an order summary next to a contact form. The
//! form is never validated and never submitted.

mod form;
mod summary;

pub use form::{CheckoutField, CheckoutForm};
pub use summary::{OrderSummary, SummaryLine};
