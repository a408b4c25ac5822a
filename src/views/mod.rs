//! View state for the two screens of the client.
//!
//! Each view owns its local UI state and exposes an explicit entry point for
//! when it is shown. Rendering is left to the presentation layer.

pub mod list;
pub mod submit;
pub mod validator;

pub use list::{ListView, LoadToken, priority_class, status_class};
pub use submit::{SubmitOutcome, SubmitView};
pub use validator::{FieldError, FormField, FormValues, TicketFormValidator, ValidationResult};
