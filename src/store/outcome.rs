use std::fmt;

use super::status::FetchStatus;

/// The three lifecycle events an async action reports.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Emitted before the request is sent.
    Pending,
    /// Decoded response body.
    Fulfilled(T),
    /// Normalized error message.
    Rejected(String),
}

/// Payload-free view of an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pending,
    Fulfilled,
    Rejected,
}

impl<T> Outcome<T> {
    pub fn phase(&self) -> Phase {
        match self {
            Outcome::Pending => Phase::Pending,
            Outcome::Fulfilled(_) => Phase::Fulfilled,
            Outcome::Rejected(_) => Phase::Rejected,
        }
    }

    /// Store status after this event.
    pub fn status(&self) -> FetchStatus {
        match self {
            Outcome::Pending => FetchStatus::Loading,
            Outcome::Fulfilled(_) => FetchStatus::Succeeded,
            Outcome::Rejected(message) => FetchStatus::Failed {
                message: message.clone(),
            },
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Pending => "pending",
            Phase::Fulfilled => "fulfilled",
            Phase::Rejected => "rejected",
        })
    }
}
