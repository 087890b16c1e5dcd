//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. An event without a usable start is not an
//! error: the grouper drops it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Network failure or non-success status from the calendar provider.
    #[error("Calendar provider error: {0}")]
    Transport(String),

    /// Failure while building or delivering a page.
    #[error("Presentation error: {0}")]
    Presentation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Discord API error: {0}")]
    Discord(String),
}
