//! Error payload types for outcomes

use std::io;

/// Message-bearing error description, the default failure payload for
/// [`Outcome`](crate::outcome::Outcome).
///
/// `Message` carries nothing but human-readable text. Operations with richer
/// failure modes should define their own error type and use it as the `E`
/// parameter instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct Message(String);

impl Message {
    /// Create a message from anything string-like
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Get the message text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Message {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}

impl From<String> for Message {
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<io::Error> for Message {
    fn from(error: io::Error) -> Self {
        Self(error.to_string())
    }
}
