//! In-memory mock backend for gantry
//!
//! Provides a reference backend implementing every built-in contract, and
//! the feature list that composes them:
//! - **MockBackend**: entity tables behind a `parking_lot::RwLock`
//! - **MockFeatures**: `CreateEntities` + `GetEntityName`
//! - **MockConfig**: duplicate-name policy loaded from `gantry-mock.toml`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gantry_mock::{load_engine, MockConfig};
//!
//! let engine = load_engine::<FeaturePolicy3d>(MockConfig::default())?;
//! // or: load_engine_from_file::<FeaturePolicy3d>(Path::new(CONFIG_FILE_NAME))?
//! let link = engine.create_link("link_a", &FrameData::default());
//! assert_eq!(link.name().as_deref(), Some("link_a"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod config;

pub use backend::MockBackend;
pub use config::{DuplicatePolicy, MockConfig, CONFIG_FILE_NAME};

use gantry_core::{Policy, Result};
use gantry_engine::{CreateEntities, Engine, GetEntityName};
use std::path::Path;
use std::sync::Arc;

gantry_engine::feature_list! {
    /// Every built-in feature
    pub struct MockFeatures: MockFeaturesBackend {
        CreateEntities,
        GetEntityName,
    }
}

/// Engine composed of [`MockFeatures`]
pub type MockEngine<P> = Engine<P, MockFeatures>;

/// Bring up an engine on a fresh mock backend
///
/// # Errors
///
/// Returns an error if the config is invalid.
pub fn load_engine<P: Policy>(config: MockConfig) -> Result<MockEngine<P>> {
    Arc::new(MockBackend::<P>::new(config)?).into_engine()
}

/// Bring up an engine on a fresh mock backend configured from a TOML file
///
/// Writes [`MockConfig::default_toml`] to `path` first if no file exists
/// there.
///
/// # Errors
///
/// Returns an error if the file cannot be read, written or parsed.
pub fn load_engine_from_file<P: Policy>(path: &Path) -> Result<MockEngine<P>> {
    MockConfig::write_default_if_missing(path)?;
    Arc::new(MockBackend::<P>::from_file(path)?).into_engine()
}
