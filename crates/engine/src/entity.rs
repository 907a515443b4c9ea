//! Entity handles
//!
//! ## Design
//!
//! An entity handle couples an [`Identity`] with shared ownership of the
//! backend that issued it:
//!
//! - [`Entity`] is a live reference: `Arc` of the composite backend plus a
//!   valid Identity. Feature surfaces are implemented on it.
//! - [`EntityPtr`] is the nullable form returned by create/get surfaces.
//!   Built from an invalid Identity it is the canonical null handle, never a
//!   wrapper around an invalid Identity.
//!
//! Every backend `Arc` clone lives in a handle; the backend is torn down when
//! the last handle (or the engine) drops.
//!
//! ## Issuer check
//!
//! Handles are only ever built from an Identity whose issuer is the handle's
//! own backend. An Identity issued by another backend, like an invalid one,
//! yields the null handle, so a handle can never alias an unrelated entity.
//!
//! ## Equality
//!
//! Two handles are equal iff both are null, or they share the same backend
//! instance and carry equal Identities.
//!
//! ## Staleness
//!
//! A handle does not notice when the backend destroys its entity. Validity
//! of an [`EntityPtr`] only reflects whether the backend returned a valid
//! Identity at the time the handle was made.

use crate::feature::{Feature, Interface};
use crate::feature_list::{EngineBackend, FeatureList};
use gantry_core::{BackendId, EngineKind, EntityKind, Identity, JointKind, Kind, LinkKind, Policy};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::warn;

// ============================================================================
// Entity
// ============================================================================

/// Live reference to one object inside a backend
///
/// `P` is the numeric policy, `L` the composed feature list and `K` the
/// entity kind. Surfaces for features in `L` become methods on this type.
pub struct Entity<P: Policy, L: FeatureList<P>, K: Kind> {
    backend: Arc<L::Backend>,
    identity: Identity,
    _marker: PhantomData<fn() -> (P, L, K)>,
}

impl<P: Policy, L: FeatureList<P>, K: Kind> Entity<P, L, K> {
    /// Pair a backend with an Identity it issued
    ///
    /// Returns `None` when the Identity is invalid or was issued by another
    /// backend.
    pub(crate) fn from_parts(backend: Arc<L::Backend>, identity: Identity) -> Option<Self> {
        if !identity.is_valid() {
            return None;
        }
        let backend_id = backend.backend_id();
        if !identity.issued_by(backend_id) {
            warn!(
                target: "gantry::engine",
                backend_id = %backend_id,
                issuer = %identity.issuer(),
                kind = %K::KIND,
                "Identity issued by another backend refused"
            );
            return None;
        }
        Some(Self {
            backend,
            identity,
            _marker: PhantomData,
        })
    }

    /// Identity of this entity under its backend
    ///
    /// Only meaningful when handed back to this entity's own backend.
    pub fn identity(&self) -> Identity {
        self.identity
    }

    /// Runtime kind tag
    pub fn kind(&self) -> EntityKind {
        K::KIND
    }

    /// Name of the backend implementation
    pub fn backend_name(&self) -> &str {
        self.backend.backend_name()
    }

    /// Identifier of the backend instance
    pub fn backend_id(&self) -> BackendId {
        self.backend.backend_id()
    }

    /// Check whether another entity lives in the same backend instance
    pub fn same_backend<K2: Kind>(&self, other: &Entity<P, L, K2>) -> bool {
        same_instance::<P, L>(&self.backend, &other.backend)
    }

    /// Resolve the contract of feature `F` in this entity's backend
    ///
    /// Does not compile unless `F` is part of the feature list `L`.
    pub fn interface<F: Feature>(&self) -> &F::Contract<P>
    where
        L::Backend: Interface<F, P>,
    {
        <L::Backend as Interface<F, P>>::interface(&self.backend)
    }

    /// Wrap an Identity issued by this entity's backend
    ///
    /// This is how surfaces turn a contract result into a typed handle. An
    /// Identity that is invalid, or that another backend issued, yields the
    /// null handle.
    pub fn handle<K2: Kind>(&self, identity: Identity) -> EntityPtr<P, L, K2> {
        EntityPtr::new(Arc::clone(&self.backend), identity)
    }

    /// Number of handles sharing this entity's backend
    pub fn backend_refs(&self) -> usize {
        Arc::strong_count(&self.backend)
    }
}

fn same_instance<P: Policy, L: FeatureList<P>>(a: &Arc<L::Backend>, b: &Arc<L::Backend>) -> bool {
    // Data addresses only
    std::ptr::eq(
        Arc::as_ptr(a) as *const u8,
        Arc::as_ptr(b) as *const u8,
    )
}

impl<P: Policy, L: FeatureList<P>, K: Kind> Clone for Entity<P, L, K> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            identity: self.identity,
            _marker: PhantomData,
        }
    }
}

impl<P: Policy, L: FeatureList<P>, K: Kind> PartialEq for Entity<P, L, K> {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity && self.same_backend(other)
    }
}

impl<P: Policy, L: FeatureList<P>, K: Kind> Eq for Entity<P, L, K> {}

impl<P: Policy, L: FeatureList<P>, K: Kind> Hash for Entity<P, L, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.backend) as *const u8 as usize).hash(state);
        self.identity.hash(state);
    }
}

impl<P: Policy, L: FeatureList<P>, K: Kind> fmt::Debug for Entity<P, L, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("kind", &K::KIND)
            .field("identity", &self.identity)
            .field("backend", &self.backend.backend_name())
            .finish()
    }
}

// ============================================================================
// EntityPtr
// ============================================================================

/// Nullable entity handle
///
/// Returned by every create/get surface, for every entity kind. Callers
/// check [`is_valid`](Self::is_valid) (or use [`get`](Self::get)) before
/// using the entity; the runtime never substitutes a default entity for a
/// missing one.
pub struct EntityPtr<P: Policy, L: FeatureList<P>, K: Kind> {
    entity: Option<Entity<P, L, K>>,
}

impl<P: Policy, L: FeatureList<P>, K: Kind> EntityPtr<P, L, K> {
    /// Pair a backend with an Identity it issued
    ///
    /// An invalid or foreign Identity yields the null handle.
    pub(crate) fn new(backend: Arc<L::Backend>, identity: Identity) -> Self {
        Self {
            entity: Entity::from_parts(backend, identity),
        }
    }

    /// The null handle ("no entity")
    pub fn null() -> Self {
        Self { entity: None }
    }

    /// Check whether this handle refers to an entity
    ///
    /// O(1); never touches backend state.
    pub fn is_valid(&self) -> bool {
        self.entity.is_some()
    }

    /// Check whether this is the null handle
    pub fn is_null(&self) -> bool {
        self.entity.is_none()
    }

    /// Borrow the entity, if any
    pub fn get(&self) -> Option<&Entity<P, L, K>> {
        self.entity.as_ref()
    }

    /// Take the entity, if any
    pub fn into_entity(self) -> Option<Entity<P, L, K>> {
        self.entity
    }

    /// Identity of the entity, or the invalid Identity for the null handle
    pub fn identity(&self) -> Identity {
        self.entity
            .as_ref()
            .map_or(Identity::INVALID, Entity::identity)
    }
}

impl<P: Policy, L: FeatureList<P>, K: Kind> Default for EntityPtr<P, L, K> {
    fn default() -> Self {
        Self::null()
    }
}

impl<P: Policy, L: FeatureList<P>, K: Kind> Clone for EntityPtr<P, L, K> {
    fn clone(&self) -> Self {
        Self {
            entity: self.entity.clone(),
        }
    }
}

impl<P: Policy, L: FeatureList<P>, K: Kind> PartialEq for EntityPtr<P, L, K> {
    fn eq(&self, other: &Self) -> bool {
        self.entity == other.entity
    }
}

impl<P: Policy, L: FeatureList<P>, K: Kind> Eq for EntityPtr<P, L, K> {}

impl<P: Policy, L: FeatureList<P>, K: Kind> Hash for EntityPtr<P, L, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entity.hash(state);
    }
}

impl<P: Policy, L: FeatureList<P>, K: Kind> From<Entity<P, L, K>> for EntityPtr<P, L, K> {
    fn from(entity: Entity<P, L, K>) -> Self {
        Self {
            entity: Some(entity),
        }
    }
}

impl<P: Policy, L: FeatureList<P>, K: Kind> fmt::Debug for EntityPtr<P, L, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entity {
            Some(entity) => fmt::Debug::fmt(entity, f),
            None => write!(f, "EntityPtr::null({})", K::KIND),
        }
    }
}

// ============================================================================
// Kind aliases
// ============================================================================

/// Live reference to a link
pub type Link<P, L> = Entity<P, L, LinkKind>;

/// Live reference to a joint
pub type Joint<P, L> = Entity<P, L, JointKind>;

/// Nullable link handle
pub type LinkPtr<P, L> = EntityPtr<P, L, LinkKind>;

/// Nullable joint handle
pub type JointPtr<P, L> = EntityPtr<P, L, JointKind>;

/// Nullable engine handle
pub type EnginePtr<P, L> = EntityPtr<P, L, EngineKind>;
