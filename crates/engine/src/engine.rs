//! The engine object
//!
//! An [`Engine`] is the root entity of a backend: the entity of kind
//! [`EngineKind`] that the backend issues when it is brought up. Engine-level
//! feature surfaces (creating entities, for example) are implemented on it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let backend: Arc<dyn MockFeaturesBackend<FeaturePolicy3d>> = Arc::new(MockBackend::default());
//! let engine = Engine::<FeaturePolicy3d, MockFeatures>::new(backend)?;
//! let link = engine.create_link("base", &FrameData::default());
//! ```

use crate::entity::Entity;
use crate::feature_list::{EngineBackend, FeatureList};
use gantry_core::{EngineKind, Error, Policy, Result};
use std::sync::Arc;
use tracing::{info, warn};

/// Root entity of a backend, exposing the surfaces of the feature list `L`
pub type Engine<P, L> = Entity<P, L, EngineKind>;

impl<P: Policy, L: FeatureList<P>> Entity<P, L, EngineKind> {
    /// Bring up an engine on a backend
    ///
    /// The engine shares ownership of the backend with every handle it
    /// produces.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EngineInitiation`] if the backend returns an invalid
    /// engine Identity, or one it did not issue itself.
    pub fn new(backend: Arc<L::Backend>) -> Result<Self> {
        let identity = backend.initiate_engine();
        let backend_name = backend.backend_name().to_string();
        let backend_id = backend.backend_id();

        match Entity::from_parts(backend, identity) {
            Some(engine) => {
                info!(
                    target: "gantry::engine",
                    backend = %backend_name,
                    backend_id = %backend_id,
                    policy = P::LABEL,
                    features = ?L::FEATURES,
                    engine = %identity,
                    "Engine initiated"
                );
                Ok(engine)
            }
            None => {
                warn!(
                    target: "gantry::engine",
                    backend = %backend_name,
                    backend_id = %backend_id,
                    "Backend refused to initiate engine"
                );
                Err(Error::EngineInitiation {
                    backend: backend_name,
                })
            }
        }
    }

    /// Names of the features compiled into this engine
    pub fn feature_names(&self) -> &'static [&'static str] {
        L::FEATURES
    }
}
