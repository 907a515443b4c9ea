//! Entity kinds
//!
//! Entities come in kinds. The runtime tracks the kind twice:
//!
//! - At compile time, through zero-sized markers implementing [`Kind`], so an
//!   entity handle for a link can never be mistaken for a handle to a joint.
//! - At runtime, through [`EntityKind`], which is what a backend contract
//!   receives so one create/get contract can serve every kind.
//!
//! | Kind | Marker | Created by |
//! |------|--------|------------|
//! | Engine | [`EngineKind`] | the backend, when an engine is initiated |
//! | Link | [`LinkKind`] | `create_entity` |
//! | Joint | [`JointKind`] | `create_entity` |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime tag of an entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// The engine object itself
    Engine,

    /// A rigid body
    Link,

    /// A constraint between links
    Joint,
}

impl EntityKind {
    /// All entity kinds (for iteration)
    pub const ALL: [EntityKind; 3] = [EntityKind::Engine, EntityKind::Link, EntityKind::Joint];

    /// Short identifier (for logs and config)
    pub const fn id(&self) -> &'static str {
        match self {
            EntityKind::Engine => "engine",
            EntityKind::Link => "link",
            EntityKind::Joint => "joint",
        }
    }

    /// Parse from short identifier
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "engine" => Some(EntityKind::Engine),
            "link" => Some(EntityKind::Link),
            "joint" => Some(EntityKind::Joint),
            _ => None,
        }
    }

    /// Whether callers may create entities of this kind by name
    ///
    /// The engine object is created by the backend, never by name.
    pub const fn is_nameable(&self) -> bool {
        !matches!(self, EntityKind::Engine)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Compile-time entity kind marker
pub trait Kind: Send + Sync + 'static {
    /// Runtime tag for this kind
    const KIND: EntityKind;
}

/// Marker for the engine object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EngineKind;

/// Marker for links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LinkKind;

/// Marker for joints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct JointKind;

/// Kinds that callers may create and look up by name
///
/// The engine kind is not one of them; creating an engine by name does not
/// compile.
pub trait NamedKind: Kind {}

impl NamedKind for LinkKind {}

impl NamedKind for JointKind {}

impl Kind for EngineKind {
    const KIND: EntityKind = EntityKind::Engine;
}

impl Kind for LinkKind {
    const KIND: EntityKind = EntityKind::Link;
}

impl Kind for JointKind {
    const KIND: EntityKind = EntityKind::Joint;
}
