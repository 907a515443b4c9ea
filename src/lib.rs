//! Gantry - compile-time feature composition for simulation backends
//!
//! Gantry lets independently written features (capabilities such as
//! "create entities" or "read entity names") be composed into one typed
//! engine per build. Callers use typed entity handles; backends see only
//! primitive data and Identities.
//!
//! # Quick Start
//!
//! ```ignore
//! use gantry::prelude::*;
//!
//! let engine = load_engine::<FeaturePolicy3d>(MockConfig::default())?;
//!
//! let link = engine.create_link("link_a", &FrameData::at([0.0, 0.0, 1.0]));
//! assert!(link.is_valid());
//! assert_eq!(engine.get_link("link_a"), link);
//! assert!(engine.get_link("link_b").is_null());
//! ```
//!
//! # Architecture
//!
//! - `gantry-core`: Identity, numeric policies, frame data, entity kinds, errors
//! - `gantry-engine`: features, interface resolution, feature lists, handles
//! - `gantry-mock`: in-memory reference backend and its feature list

pub use gantry_core as core;
pub use gantry_engine as engine;
pub use gantry_mock as mock;

pub use gantry_core::{Error, Result};
pub use gantry_engine::feature_list;

/// Everything needed to drive an engine
pub mod prelude {
    pub use gantry_core::{
        EntityKind, FeaturePolicy2d, FeaturePolicy2f, FeaturePolicy3d, FeaturePolicy3f, FrameData,
        Identity, Policy, Pose,
    };
    pub use gantry_engine::{
        CreateEntitiesExt, Engine, Entity, EntityPtr, GetEntityNameExt, JointPtr, LinkPtr,
    };
    pub use gantry_mock::{load_engine, load_engine_from_file, DuplicatePolicy, MockConfig, MockEngine};
}
