// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for entity store access.

/// Errors that can occur while talking to the entity store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a usable response.
    Transport(String),
    /// The store answered with a non-success status.
    Rejected {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },
    /// A record could not be serialized or deserialized.
    Serialization(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "HTTP transport error: {msg}"),
            Self::Rejected { status, message } => {
                write!(f, "Entity store rejected the request ({status}): {message}")
            }
            Self::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Serialization(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
