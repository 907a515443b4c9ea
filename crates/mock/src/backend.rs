//! In-memory reference backend
//!
//! ## Design
//!
//! `MockBackend` keeps every entity in a table keyed by a monotonically
//! increasing id. Ids are never reused, so an Identity that outlives its
//! entity stays detectably stale: lookups through it find nothing.
//!
//! ## Thread Safety
//!
//! Contracts take `&self`; the tables live behind a `parking_lot::RwLock`.
//! Reads (`get_entity`, `get_entity_name`) share the lock, creation takes it
//! exclusively, so concurrent surface calls against one backend are
//! serialized here rather than in the runtime.

use crate::config::{DuplicatePolicy, MockConfig};
use crate::{MockEngine, MockFeaturesBackend};
use gantry_core::{BackendId, EntityKind, FrameData, Identity, Policy, Result};
use gantry_engine::{CreateEntitiesContract, EngineBackend, Engine, GetEntityNameContract};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

struct EntityRecord<P: Policy> {
    kind: EntityKind,
    name: String,
    frame_data: FrameData<P>,
}

struct MockState<P: Policy> {
    next_id: u64,
    engine: Option<u64>,
    entities: HashMap<u64, EntityRecord<P>>,
    by_name: HashMap<(EntityKind, String), u64>,
}

impl<P: Policy> MockState<P> {
    fn new() -> Self {
        Self {
            next_id: 0,
            engine: None,
            entities: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    fn insert(&mut self, kind: EntityKind, name: &str, frame_data: FrameData<P>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entities.insert(
            id,
            EntityRecord {
                kind,
                name: name.to_string(),
                frame_data,
            },
        );
        id
    }
}

/// In-memory backend implementing every built-in contract
///
/// # Example
///
/// ```ignore
/// use gantry_mock::{MockBackend, MockConfig};
/// use gantry_core::FeaturePolicy3d;
///
/// let backend = Arc::new(MockBackend::<FeaturePolicy3d>::new(MockConfig::default())?);
/// let engine = backend.clone().into_engine()?;
/// let link = engine.create_link("base", &FrameData::default());
/// assert_eq!(backend.entity_count(EntityKind::Link), 1);
/// ```
pub struct MockBackend<P: Policy> {
    id: BackendId,
    name: String,
    duplicates: DuplicatePolicy,
    state: RwLock<MockState<P>>,
}

impl<P: Policy> MockBackend<P> {
    /// Create an empty backend
    ///
    /// # Errors
    ///
    /// Returns an error if the config holds an unknown duplicate policy.
    pub fn new(config: MockConfig) -> Result<Self> {
        let duplicates = config.duplicate_policy()?;
        Ok(Self {
            id: BackendId::new(),
            name: config.name,
            duplicates,
            state: RwLock::new(MockState::new()),
        })
    }

    /// Create an empty backend configured from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::new(MockConfig::from_file(path)?)
    }

    /// Duplicate-name policy in effect
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Bring up an engine that shares this backend
    pub fn into_engine(self: Arc<Self>) -> Result<MockEngine<P>> {
        let backend: Arc<dyn MockFeaturesBackend<P>> = self;
        Engine::new(backend)
    }

    /// Number of live entities of the given kind
    pub fn entity_count(&self, kind: EntityKind) -> usize {
        self.state
            .read()
            .entities
            .values()
            .filter(|record| record.kind == kind)
            .count()
    }

    /// Frame data the named entity was created with
    pub fn frame_data(&self, kind: EntityKind, name: &str) -> Option<FrameData<P>> {
        let state = self.state.read();
        let id = state.by_name.get(&(kind, name.to_string()))?;
        state.entities.get(id).map(|record| record.frame_data)
    }

    /// Destroy every entity of the given kind and name
    ///
    /// Under [`DuplicatePolicy::Distinct`] several entities may share a
    /// name; all of them are removed. Returns the number removed. Identities
    /// that referred to them go stale: their names can no longer be read, and
    /// the name is free again. The engine object is never removed.
    pub fn remove_entity(&self, kind: EntityKind, name: &str) -> usize {
        if !kind.is_nameable() {
            return 0;
        }
        let mut state = self.state.write();
        state.by_name.remove(&(kind, name.to_string()));

        let before = state.entities.len();
        state
            .entities
            .retain(|_, record| !(record.kind == kind && record.name == name));
        let removed = before - state.entities.len();

        if removed > 0 {
            debug!(target: "gantry::mock", backend_id = %self.id, %kind, name, removed, "Entities removed");
        }
        removed
    }
}

impl<P: Policy> Default for MockBackend<P> {
    fn default() -> Self {
        Self {
            id: BackendId::new(),
            name: MockConfig::default().name,
            duplicates: DuplicatePolicy::default(),
            state: RwLock::new(MockState::new()),
        }
    }
}

impl<P: Policy> EngineBackend for MockBackend<P> {
    fn backend_name(&self) -> &str {
        &self.name
    }

    fn backend_id(&self) -> BackendId {
        self.id
    }

    fn initiate_engine(&self) -> Identity {
        let mut state = self.state.write();
        if let Some(id) = state.engine {
            return Identity::new(self.id, id);
        }
        let id = state.insert(EntityKind::Engine, &self.name, FrameData::default());
        state.engine = Some(id);
        Identity::new(self.id, id)
    }
}

impl<P: Policy> CreateEntitiesContract<P> for MockBackend<P> {
    fn create_entity(&self, kind: EntityKind, name: &str, frame_data: &FrameData<P>) -> Identity {
        if !kind.is_nameable() {
            warn!(target: "gantry::mock", backend_id = %self.id, %kind, name, "Entity kind cannot be created by name");
            return Identity::INVALID;
        }

        let mut state = self.state.write();
        let key = (kind, name.to_string());
        if state.by_name.contains_key(&key) && self.duplicates == DuplicatePolicy::Reject {
            warn!(target: "gantry::mock", backend_id = %self.id, %kind, name, "Duplicate entity name refused");
            return Identity::INVALID;
        }

        let id = state.insert(kind, name, *frame_data);
        state.by_name.insert(key, id);
        debug!(target: "gantry::mock", backend_id = %self.id, %kind, name, entity = id, "Entity created");
        Identity::new(self.id, id)
    }

    fn get_entity(&self, kind: EntityKind, name: &str) -> Identity {
        let state = self.state.read();
        match state.by_name.get(&(kind, name.to_string())) {
            Some(id) => Identity::new(self.id, *id),
            None => {
                debug!(target: "gantry::mock", backend_id = %self.id, %kind, name, "Entity not found");
                Identity::INVALID
            }
        }
    }
}

impl<P: Policy> GetEntityNameContract for MockBackend<P> {
    fn get_entity_name(&self, kind: EntityKind, entity: Identity) -> Option<String> {
        if !entity.issued_by(self.id) {
            return None;
        }
        let state = self.state.read();
        state
            .entities
            .get(&entity.id())
            .filter(|record| record.kind == kind)
            .map(|record| record.name.clone())
    }
}
