//! GetEntityName: read back the name of an entity
//!
//! Unlike [`CreateEntities`](super::CreateEntities), this surface lives on
//! entities rather than on the engine: any `Entity<P, L, K>` whose list
//! includes [`GetEntityName`] gains a `name()` method. Nullable handles get
//! it too, returning `None` for the null handle.

use crate::entity::{Entity, EntityPtr};
use crate::feature::{Feature, Interface};
use crate::feature_list::FeatureList;
use gantry_core::{EntityKind, Identity, Kind, Policy};

/// Feature marker: entities can report their names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GetEntityName;

impl Feature for GetEntityName {
    const NAME: &'static str = "GetEntityName";
    type Contract<P: Policy> = dyn GetEntityNameContract;
}

/// Backend contract for [`GetEntityName`]
pub trait GetEntityNameContract: Send + Sync {
    /// Name of the entity, or `None` if the Identity no longer refers to one
    fn get_entity_name(&self, kind: EntityKind, entity: Identity) -> Option<String>;
}

impl<P, B> Interface<GetEntityName, P> for B
where
    P: Policy,
    B: GetEntityNameContract + 'static,
{
    fn interface(&self) -> &(dyn GetEntityNameContract + 'static) {
        self
    }
}

/// Caller-facing surface of [`GetEntityName`]
pub trait GetEntityNameExt {
    /// Name of this entity
    ///
    /// `None` when the backend no longer knows the entity.
    fn name(&self) -> Option<String>;
}

impl<P, L, K> GetEntityNameExt for Entity<P, L, K>
where
    P: Policy,
    L: FeatureList<P>,
    L::Backend: Interface<GetEntityName, P>,
    K: Kind,
{
    fn name(&self) -> Option<String> {
        self.interface::<GetEntityName>()
            .get_entity_name(K::KIND, self.identity())
    }
}

impl<P, L, K> GetEntityNameExt for EntityPtr<P, L, K>
where
    P: Policy,
    L: FeatureList<P>,
    L::Backend: Interface<GetEntityName, P>,
    K: Kind,
{
    fn name(&self) -> Option<String> {
        self.get().and_then(GetEntityNameExt::name)
    }
}
