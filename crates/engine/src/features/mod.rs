//! Built-in features
//!
//! - **CreateEntities**: create and look up named links and joints
//! - **GetEntityName**: read back the name of any entity
//!
//! Each feature module holds the marker type, the contract a backend
//! implements, the blanket interface impl and the caller-facing surface.

pub mod create_entities;
pub mod entity_names;

pub use create_entities::{CreateEntities, CreateEntitiesContract, CreateEntitiesExt};
pub use entity_names::{GetEntityName, GetEntityNameContract, GetEntityNameExt};
