//! Service layer between the HTTP handlers and the repositories.
//!
//! Services forward to the storage layer unchanged and apply a single
//! logging and error classification policy, so handlers only ever see
//! `ServiceError` and never raw storage errors.

mod error;
mod movie;


pub use error::{ServiceError, ServiceResult};
pub use movie::MovieService;
