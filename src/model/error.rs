//! Error types for the udex application.
//!
//! A small hierarchical taxonomy using `thiserror`, composing via `?` and
//! `From` conversions.
//!
//! Fetch errors are terminal for their fetch lifecycle but not for the
//! application: a failed users load replaces the main view with the
//! reason, a failed posts load replaces only the posts sub-section. There
//! is no retry in either case. Terminal errors are fatal.
//!
//! A success response whose body is valid JSON but not the expected array
//! shape is deliberately NOT an error: the decode layer resolves it to an
//! empty record list and the view renders an empty table (see
//! [`crate::fetch::decode_records`]).

use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// An outbound request failed. Surfaced in the affected view with the
    /// reason text; never retried.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Terminal or TUI rendering error. Fatal: without a working terminal
    /// the application cannot continue.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failure of one HTTP fetch (users list or a per-user posts list).
///
/// Each variant carries the request URL so log lines and the on-screen
/// reason identify which endpoint misbehaved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    /// Transport-level failure: connection refused, DNS, timeout while
    /// connecting. Carries the transport error text verbatim.
    #[error("request to {url} failed: {reason}")]
    Request {
        /// The URL that was being fetched.
        url: String,
        /// Transport error message.
        reason: String,
    },

    /// The server answered with a non-2xx status.
    #[error("request to {url} failed with status {code}")]
    Status {
        /// The URL that was being fetched.
        url: String,
        /// HTTP status code.
        code: u16,
    },

    /// The success body could not be read or was not valid JSON.
    #[error("could not read response from {url}: {reason}")]
    Body {
        /// The URL that was being fetched.
        url: String,
        /// Decode error message.
        reason: String,
    },
}
