//! Integration tests for the engine surfaces over the mock backend
//!
//! These tests verify the caller-visible behavior of a composed engine:
//! - Created entities can be looked up again by name
//! - Missing names yield null handles
//! - Duplicate creation is deterministic under both policies
//! - Handles share and release the backend

use gantry_core::{EntityKind, FeaturePolicy2d, FeaturePolicy3d, FrameData, LinkKind};
use gantry_engine::{CreateEntitiesExt, GetEntityNameExt, LinkPtr};
use gantry_mock::{load_engine, DuplicatePolicy, MockBackend, MockConfig, MockEngine, MockFeatures};
use std::sync::Arc;
use std::thread;

type P = FeaturePolicy3d;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn engine(policy: DuplicatePolicy) -> MockEngine<P> {
    load_engine(MockConfig::with_duplicate_policy(policy)).expect("Failed to load engine")
}

#[test]
fn test_scenario_create_get_missing() {
    init_tracing();
    let engine = engine(DuplicatePolicy::Reject);

    let h1 = engine.create_link("link_a", &FrameData::at([0.0, 0.0, 1.0]));
    assert!(h1.is_valid());

    let h2 = engine.get_link("link_a");
    assert_eq!(h1, h2);

    let missing = engine.get_link("link_b");
    assert!(missing.is_null());
    assert_eq!(missing, LinkPtr::null());
}

#[test]
fn test_round_trip_through_name() {
    let engine = engine(DuplicatePolicy::Reject);
    let created = engine.create_link("upper_arm", &FrameData::default());

    let name = created.name().expect("created link has a name");
    assert_eq!(name, "upper_arm");
    assert_eq!(engine.get_link(&name), created);
}

#[test]
fn test_repeated_get_is_equal() {
    let engine = engine(DuplicatePolicy::Reject);
    engine.create_joint("elbow", &FrameData::default());

    let first = engine.get_joint("elbow");
    let second = engine.get_joint("elbow");
    assert!(first.is_valid());
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_rejected() {
    let engine = engine(DuplicatePolicy::Reject);
    let first = engine.create_link("base", &FrameData::default());
    let second = engine.create_link("base", &FrameData::at([1.0, 0.0, 0.0]));

    assert!(first.is_valid());
    assert!(second.is_null());
    assert_eq!(engine.get_link("base"), first);
}

#[test]
fn test_duplicate_distinct() {
    let engine = engine(DuplicatePolicy::Distinct);
    let first = engine.create_link("base", &FrameData::default());
    let second = engine.create_link("base", &FrameData::at([1.0, 0.0, 0.0]));

    assert!(first.is_valid());
    assert!(second.is_valid());
    assert_ne!(first, second);
    assert_eq!(engine.get_link("base"), second);
    assert_eq!(first.name().as_deref(), Some("base"));
}

#[test]
fn test_links_and_joints_do_not_collide() {
    let engine = engine(DuplicatePolicy::Reject);
    let link = engine.create_link("hinge", &FrameData::default());
    let joint = engine.create_joint("hinge", &FrameData::default());

    assert!(link.is_valid());
    assert!(joint.is_valid());
    assert_ne!(link.identity(), joint.identity());
    assert_eq!(engine.get_link("hinge"), link);
    assert_eq!(engine.get_joint("hinge"), joint);
}

#[test]
fn test_engine_name() {
    let config = MockConfig {
        name: "bench".to_string(),
        ..MockConfig::default()
    };
    let engine = load_engine::<P>(config).unwrap();
    assert_eq!(engine.backend_name(), "bench");
    assert_eq!(engine.name().as_deref(), Some("bench"));
    assert_eq!(engine.feature_names(), &["CreateEntities", "GetEntityName"]);
}

#[test]
fn test_frame_data_reaches_backend_unchanged() {
    let backend = Arc::new(MockBackend::<P>::default());
    let engine = Arc::clone(&backend).into_engine().unwrap();

    let data = FrameData::<P>::at([0.5, -0.5, 2.0])
        .with_linear_velocity([1.0, 0.0, 0.0])
        .with_angular_velocity([0.0, 0.0, 3.0]);
    engine.create_link("moving", &data);

    assert_eq!(backend.frame_data(EntityKind::Link, "moving"), Some(data));
}

#[test]
fn test_stale_handle_after_removal() {
    let backend = Arc::new(MockBackend::<P>::default());
    let engine = Arc::clone(&backend).into_engine().unwrap();
    let link = engine.create_link("temp", &FrameData::default());

    assert_eq!(backend.remove_entity(EntityKind::Link, "temp"), 1);

    // The handle keeps its Identity; the backend no longer knows it
    assert!(link.is_valid());
    assert_eq!(link.name(), None);
    assert!(engine.get_link("temp").is_null());
}

#[test]
fn test_last_handle_tears_down_backend() {
    let backend = Arc::new(MockBackend::<P>::default());
    let weak = Arc::downgrade(&backend);
    let engine = backend.into_engine().unwrap();
    let link = engine.create_link("survivor", &FrameData::default());

    drop(engine);
    assert!(weak.upgrade().is_some());
    assert_eq!(link.name().as_deref(), Some("survivor"));

    drop(link);
    assert!(weak.upgrade().is_none());
}

#[test]
fn test_null_handle_does_not_hold_backend() {
    let backend = Arc::new(MockBackend::<P>::default());
    let weak = Arc::downgrade(&backend);
    let engine = backend.into_engine().unwrap();
    let missing = engine.get_link("nothing");

    drop(engine);
    assert!(missing.is_null());
    assert!(weak.upgrade().is_none());
}

#[test]
fn test_two_backends_never_compare_equal() {
    let a = engine(DuplicatePolicy::Reject);
    let b = engine(DuplicatePolicy::Reject);

    let from_a = a.create_link("same", &FrameData::default());
    let from_b = b.create_link("same", &FrameData::default());

    // Both backends issue the same payload for their first link
    assert_eq!(from_a.identity().id(), from_b.identity().id());
    assert_ne!(from_a.identity(), from_b.identity());
    assert_ne!(from_a, from_b);
}

#[test]
fn test_identity_from_other_backend_is_refused() {
    let a = engine(DuplicatePolicy::Reject);
    let b = engine(DuplicatePolicy::Reject);

    let link_a = a.create_link("only_in_a", &FrameData::default());
    let link_b = b.create_link("only_in_b", &FrameData::default());
    assert_eq!(link_a.identity().id(), link_b.identity().id());

    let rewrapped = b.handle::<LinkKind>(link_a.identity());
    assert!(rewrapped.is_null());
    assert_eq!(rewrapped.name(), None);
    assert_ne!(rewrapped, link_b);
}

#[test]
fn test_remove_under_distinct_policy_clears_all_duplicates() {
    let backend = Arc::new(
        MockBackend::<P>::new(MockConfig::with_duplicate_policy(DuplicatePolicy::Distinct)).unwrap(),
    );
    let engine = Arc::clone(&backend).into_engine().unwrap();

    let first = engine.create_link("l", &FrameData::default());
    let second = engine.create_link("l", &FrameData::default());

    assert_eq!(backend.remove_entity(EntityKind::Link, "l"), 2);
    assert_eq!(backend.entity_count(EntityKind::Link), 0);
    assert_eq!(first.name(), None);
    assert_eq!(second.name(), None);
    assert!(engine.get_link("l").is_null());
    assert_eq!(backend.remove_entity(EntityKind::Link, "l"), 0);
}

#[test]
fn test_concurrent_creation() {
    init_tracing();
    let engine = engine(DuplicatePolicy::Reject);

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let engine = engine.clone();
            thread::spawn(move || {
                (0..25)
                    .map(|i| engine.create_link(&format!("w{}_l{}", worker, i), &FrameData::default()))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let links: Vec<_> = handles
        .into_iter()
        .flat_map(|h| h.join().expect("worker panicked"))
        .collect();

    assert_eq!(links.len(), 200);
    assert!(links.iter().all(|link| link.is_valid()));
    for link in &links {
        let name = link.name().unwrap();
        assert_eq!(&engine.get_link(&name), link);
    }
}

#[test]
fn test_concurrent_duplicate_creation_yields_one_winner() {
    let engine = engine(DuplicatePolicy::Reject);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = engine.clone();
            thread::spawn(move || engine.create_joint("contested", &FrameData::default()))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners: Vec<_> = results.iter().filter(|j| j.is_valid()).collect();

    assert_eq!(winners.len(), 1);
    assert_eq!(&engine.get_joint("contested"), winners[0]);
}

#[test]
fn test_two_dimensional_policy() {
    let engine = load_engine::<FeaturePolicy2d>(MockConfig::default()).unwrap();
    let link = engine.create_link("planar", &FrameData::at([1.0, 2.0]));
    assert_eq!(engine.get_link("planar"), link);
    let _: &LinkPtr<FeaturePolicy2d, MockFeatures> = &link;
}
