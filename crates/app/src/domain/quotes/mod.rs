//! Quotes
//!
//! Turning a drafted cart into a persisted order: validation, order numbering and the
//! single-transaction submission.

pub mod draft;
pub mod errors;
mod priced;
pub mod service;
pub mod validation;

pub use draft::{CustomerSelection, NewCustomerForm, QuoteDraft, QuoteStatus};
pub use errors::{PersistenceError, QuotesServiceError, SubmitStep};
pub use service::*;
pub use validation::{QuoteValidationError, validate};
