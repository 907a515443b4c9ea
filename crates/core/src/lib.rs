//! Core types for gantry
//!
//! This crate defines the plain data every other layer shares:
//! - Identity: Opaque backend-issued token, invalid by default
//! - Policy: Compile-time scalar type and dimensionality
//! - FrameData: Kinematic state carried from surfaces into contracts
//! - EntityKind: Runtime and compile-time entity kind tags
//! - BackendId: Unique identifier of a backend instance
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod frame;
pub mod identity;
pub mod kind;
pub mod policy;
pub mod types;

pub use error::{Error, Result};
pub use frame::{FrameData, Pose};
pub use identity::{Identity, INVALID_ENTITY_ID};
pub use kind::{EngineKind, EntityKind, JointKind, Kind, LinkKind, NamedKind};
pub use policy::{FeaturePolicy2d, FeaturePolicy2f, FeaturePolicy3d, FeaturePolicy3f, Policy, Scalar};
pub use types::BackendId;
