//! Opaque backend-issued identity tokens
//!
//! An [`Identity`] is the only thing a backend hands back to the runtime when
//! it creates or looks up an object. The runtime never interprets the payload:
//! it only asks whether the token is valid, and which backend issued it.
//!
//! ## Validity
//!
//! The invalid Identity is the uniform "absent result" signal. A contract
//! method returns it for "not found" and "could not create" alike, and the
//! caller-facing surface turns it into a null entity handle.
//!
//! ## Issuer
//!
//! Every valid Identity carries the [`BackendId`] of the backend that issued
//! it. Entity handles only accept Identities issued by their own backend; an
//! Identity presented to any other backend yields the null handle.
//!
//! ## Staleness
//!
//! An Identity is a value, not a resource. It is never destroyed, but it goes
//! stale when the backend destroys the object it names. Detecting that is the
//! backend's job; holding an Identity keeps nothing alive.

use crate::types::BackendId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Payload reserved for the invalid Identity
pub const INVALID_ENTITY_ID: u64 = u64::MAX;

/// Opaque token denoting "this object exists in backend state"
///
/// Only the backend that issued an Identity may interpret its payload. Two
/// valid Identities are equal iff they have the same issuer and payload; all
/// invalid Identities are equal.
///
/// # Example
///
/// ```
/// use gantry_core::{BackendId, Identity};
///
/// let missing = Identity::default();
/// assert!(!missing.is_valid());
///
/// let backend = BackendId::new();
/// let link = Identity::new(backend, 7);
/// assert!(link.is_valid());
/// assert!(link.issued_by(backend));
/// assert!(bool::from(link));
/// ```
#[derive(Clone, Copy)]
pub struct Identity {
    issuer: BackendId,
    id: u64,
}

impl Identity {
    /// The invalid Identity
    pub const INVALID: Identity = Identity {
        issuer: BackendId::NIL,
        id: INVALID_ENTITY_ID,
    };

    /// Wrap a backend-private id issued by `issuer`
    ///
    /// Passing [`INVALID_ENTITY_ID`] produces the invalid Identity.
    pub const fn new(issuer: BackendId, id: u64) -> Self {
        if id == INVALID_ENTITY_ID {
            Self::INVALID
        } else {
            Self { issuer, id }
        }
    }

    /// The invalid Identity, used to report an absent result
    pub const fn invalid() -> Self {
        Self::INVALID
    }

    /// Backend-private payload
    ///
    /// Only meaningful to the backend that issued this Identity.
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Backend that issued this Identity
    ///
    /// [`BackendId::NIL`] for the invalid Identity.
    pub const fn issuer(&self) -> BackendId {
        self.issuer
    }

    /// Check whether this Identity refers to an object
    pub const fn is_valid(&self) -> bool {
        self.id != INVALID_ENTITY_ID
    }

    /// Check whether this is a valid Identity issued by `backend`
    pub fn issued_by(&self, backend: BackendId) -> bool {
        self.is_valid() && self.issuer == backend
    }

    /// Convert to `Some(self)` when valid
    pub fn valid(self) -> Option<Self> {
        self.is_valid().then_some(self)
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::INVALID
    }
}

impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && (!self.is_valid() || self.issuer == other.issuer)
    }
}

impl Eq for Identity {}

impl Hash for Identity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        if self.is_valid() {
            self.issuer.hash(state);
        }
    }
}

impl From<Identity> for bool {
    fn from(identity: Identity) -> bool {
        identity.is_valid()
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Identity({})", self.id)
        } else {
            f.write_str("Identity(invalid)")
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.id)
        } else {
            f.write_str("#invalid")
        }
    }
}
