//! Backend instance identifiers

use std::fmt;
use uuid::Uuid;

/// Unique identifier for a backend instance
///
/// Every [`Identity`](crate::Identity) a backend issues carries its
/// BackendId, so an Identity handed to a different backend is detectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackendId(Uuid);

impl BackendId {
    /// Issuer of the invalid Identity; never assigned to a backend
    pub const NIL: BackendId = BackendId(Uuid::nil());

    /// Create a new random BackendId using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BackendId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
