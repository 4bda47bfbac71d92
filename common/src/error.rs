//! Domain failures reported by host-inventory services.
//!
//! These travel *inside* response values. A transport sitting on top maps
//! each variant to its own failure vocabulary (status codes, exit codes);
//! nothing in this workspace performs that mapping.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// No host enrolled under this ID.
    #[error("host {id} was not found")]
    NotFound { id: u64 },

    /// The service rejected a request parameter.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// The backing store failed; the cause is opaque to callers.
    #[error("storage backend failure")]
    Storage(#[from] anyhow::Error),
}
