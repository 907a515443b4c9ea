//! Feature composition runtime for gantry
//!
//! This crate turns independently written features into one typed engine:
//! - Feature: Surface/Contract pair describing one capability
//! - Interface: Compile-time resolution of a feature's contract in a backend
//! - FeatureList: Closed set of features and its composite backend type
//! - Entity / EntityPtr: Handles pairing an Identity with shared backend ownership
//! - Engine: Root entity of a backend
//! - features: Built-in features (CreateEntities, GetEntityName)
//!
//! Callers only ever see typed handles. Backends only ever see primitive data
//! and Identities. The seam between them is [`Interface`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod entity;
pub mod feature;
pub mod feature_list;
pub mod features;

// Used by `feature_list!` expansions in downstream crates
#[doc(hidden)]
pub use gantry_core;

pub use engine::Engine;
pub use entity::{EnginePtr, Entity, EntityPtr, Joint, JointPtr, Link, LinkPtr};
pub use feature::{Feature, Interface};
pub use feature_list::{EngineBackend, FeatureList};
pub use features::{
    CreateEntities, CreateEntitiesContract, CreateEntitiesExt, GetEntityName,
    GetEntityNameContract, GetEntityNameExt,
};
