//! CreateEntities: create and retrieve named entities
//!
//! ## Contract
//!
//! [`CreateEntitiesContract`] is what a backend implements. Both methods
//! return an invalid [`Identity`] for an absent result (name not found,
//! creation refused) and never panic for those cases.
//!
//! ## Surface
//!
//! [`CreateEntitiesExt`] is implemented for every engine whose feature list
//! includes [`CreateEntities`]. Each method resolves the contract, delegates,
//! and wraps the Identity into a typed handle; an invalid Identity becomes the
//! null handle.
//!
//! ```rust,ignore
//! let link = engine.create_link("link_a", &FrameData::at([0.0, 0.0, 1.0]));
//! assert!(link.is_valid());
//! assert_eq!(engine.get_link("link_a"), link);
//! assert!(engine.get_link("link_b").is_null());
//! ```
//!
//! Creation failure and lookup failure look the same at the surface: both
//! are an absent result.

use crate::engine::Engine;
use crate::entity::{EntityPtr, JointPtr, LinkPtr};
use crate::feature::{Feature, Interface};
use crate::feature_list::FeatureList;
use gantry_core::{EntityKind, FrameData, Identity, JointKind, LinkKind, NamedKind, Policy};

/// Feature marker: create and retrieve named links and joints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CreateEntities;

impl Feature for CreateEntities {
    const NAME: &'static str = "CreateEntities";
    type Contract<P: Policy> = dyn CreateEntitiesContract<P>;
}

/// Backend contract for [`CreateEntities`]
pub trait CreateEntitiesContract<P: Policy>: Send + Sync {
    /// Create a named entity of the given kind
    ///
    /// `frame_data` is relative to the world frame. Returns an invalid
    /// Identity if the backend refuses the creation.
    fn create_entity(&self, kind: EntityKind, name: &str, frame_data: &FrameData<P>) -> Identity;

    /// Look up a named entity of the given kind
    ///
    /// Returns an invalid Identity if no such entity exists.
    fn get_entity(&self, kind: EntityKind, name: &str) -> Identity;
}

impl<P, B> Interface<CreateEntities, P> for B
where
    P: Policy,
    B: CreateEntitiesContract<P> + 'static,
{
    fn interface(&self) -> &(dyn CreateEntitiesContract<P> + 'static) {
        self
    }
}

/// Caller-facing surface of [`CreateEntities`]
pub trait CreateEntitiesExt<P: Policy, L: FeatureList<P>> {
    /// Create a named entity of kind `K`
    ///
    /// Returns the null handle if the backend refuses the creation.
    fn create_entity<K: NamedKind>(&self, name: &str, frame_data: &FrameData<P>) -> EntityPtr<P, L, K>;

    /// Retrieve a named entity of kind `K`
    ///
    /// Returns the null handle if no such entity exists.
    fn get_entity<K: NamedKind>(&self, name: &str) -> EntityPtr<P, L, K>;

    /// Create a link, giving it a name and data relative to the world frame
    fn create_link(&self, name: &str, frame_data: &FrameData<P>) -> LinkPtr<P, L> {
        self.create_entity::<LinkKind>(name, frame_data)
    }

    /// Create a joint, giving it a name and data relative to the world frame
    fn create_joint(&self, name: &str, frame_data: &FrameData<P>) -> JointPtr<P, L> {
        self.create_entity::<JointKind>(name, frame_data)
    }

    /// Retrieve a link that was created earlier
    fn get_link(&self, name: &str) -> LinkPtr<P, L> {
        self.get_entity::<LinkKind>(name)
    }

    /// Retrieve a joint that was created earlier
    fn get_joint(&self, name: &str) -> JointPtr<P, L> {
        self.get_entity::<JointKind>(name)
    }
}

impl<P, L> CreateEntitiesExt<P, L> for Engine<P, L>
where
    P: Policy,
    L: FeatureList<P>,
    L::Backend: Interface<CreateEntities, P>,
{
    fn create_entity<K: NamedKind>(&self, name: &str, frame_data: &FrameData<P>) -> EntityPtr<P, L, K> {
        let identity = self
            .interface::<CreateEntities>()
            .create_entity(K::KIND, name, frame_data);
        self.handle(identity)
    }

    fn get_entity<K: NamedKind>(&self, name: &str) -> EntityPtr<P, L, K> {
        let identity = self.interface::<CreateEntities>().get_entity(K::KIND, name);
        self.handle(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature_list::EngineBackend;
    use gantry_core::{BackendId, FeaturePolicy3d};
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;

    crate::feature_list! {
        struct Creation: CreationBackend { CreateEntities }
    }

    type P = FeaturePolicy3d;

    /// Hands out sequential ids and refuses duplicate names
    #[derive(Default)]
    struct Table {
        id: BackendId,
        entries: Mutex<HashMap<(EntityKind, String), u64>>,
    }

    impl EngineBackend for Table {
        fn backend_name(&self) -> &str {
            "table"
        }

        fn backend_id(&self) -> BackendId {
            self.id
        }

        fn initiate_engine(&self) -> Identity {
            Identity::new(self.id, 0)
        }
    }

    impl CreateEntitiesContract<P> for Table {
        fn create_entity(&self, kind: EntityKind, name: &str, _frame_data: &FrameData<P>) -> Identity {
            let mut entries = self.entries.lock();
            let key = (kind, name.to_string());
            if entries.contains_key(&key) {
                return Identity::INVALID;
            }
            let id = entries.len() as u64 + 1;
            entries.insert(key, id);
            Identity::new(self.id, id)
        }

        fn get_entity(&self, kind: EntityKind, name: &str) -> Identity {
            self.entries
                .lock()
                .get(&(kind, name.to_string()))
                .map_or(Identity::INVALID, |id| Identity::new(self.id, *id))
        }
    }

    fn engine() -> Engine<P, Creation> {
        let backend: Arc<dyn CreationBackend<P>> = Arc::new(Table::default());
        Engine::new(backend).unwrap()
    }

    #[test]
    fn test_create_then_get_link() {
        let engine = engine();
        let created = engine.create_link("link_a", &FrameData::default());
        assert!(created.is_valid());

        let fetched = engine.get_link("link_a");
        assert_eq!(created, fetched);
    }

    #[test]
    fn test_missing_link_is_null() {
        let engine = engine();
        assert!(engine.get_link("link_b").is_null());
    }

    #[test]
    fn test_refused_creation_is_null() {
        let engine = engine();
        assert!(engine.create_joint("j", &FrameData::default()).is_valid());
        assert!(engine.create_joint("j", &FrameData::default()).is_null());
    }

    #[test]
    fn test_kinds_are_separate_namespaces() {
        let engine = engine();
        engine.create_link("shared", &FrameData::default());
        assert!(engine.get_joint("shared").is_null());
        assert!(engine.get_link("shared").is_valid());
    }

    #[test]
    fn test_handles_share_engine_backend() {
        let engine = engine();
        let link = engine.create_link("a", &FrameData::default());
        assert!(engine.same_backend(link.get().unwrap()));
        assert_eq!(engine.backend_refs(), 2);
    }
}
