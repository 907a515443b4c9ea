//! Error types
//!
//! Entity lookups and creations never fail with an error: an absent result is
//! an invalid [`Identity`](crate::Identity) at the contract boundary and a
//! null handle at the surface. The errors here cover everything around that
//! core: configuration, I/O and bringing an engine up.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for gantry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the gantry runtime
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (reading config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be parsed or holds an unsupported value
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The backend refused to initiate an engine
    #[error("Engine initiation failed for backend '{backend}'")]
    EngineInitiation {
        /// Name reported by the backend
        backend: String,
    },
}

impl Error {
    /// Create an invalid-config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig(message.into())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::InvalidConfig(e.to_string())
    }
}
