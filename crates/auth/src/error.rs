//! Error taxonomy of the authentication boundary.
//!
//! Every failure here resolves locally into a session state; nothing
//! propagates as an unhandled error past the gate. The variants carry no
//! library error text so that nothing internal can leak into a response
//! body; details go to the log at the failure site.

use thiserror::Error;

/// Why a presented credential was rejected.
///
/// Callers must treat every variant identically to "no credential"; the
/// distinction only drives logging and cookie clearing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    /// The token could not be parsed or its claims are inconsistent.
    #[error("malformed credential")]
    Malformed,

    /// The token parsed but its signature does not verify.
    #[error("credential signature mismatch")]
    BadSignature,

    /// The token is past its expiry.
    #[error("credential expired")]
    Expired,
}

/// Identity-store lookup failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("identity store unavailable: {0}")]
    Unavailable(String),

    #[error("identity store lookup timed out")]
    Timeout,
}
