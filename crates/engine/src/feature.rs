//! Feature trait shape and interface resolution
//!
//! ## Design Principle
//!
//! A feature is one capability, described twice:
//!
//! - **Contract**: an object-safe trait over primitive and [`Identity`] data.
//!   This is the only thing a backend author implements.
//! - **Surface**: an extension trait implemented for entity handles. Its
//!   methods resolve the contract, delegate to it, and wrap the returned
//!   Identity into a typed handle.
//!
//! The [`Feature`] marker ties the two together by naming the contract type.
//!
//! ## Resolution
//!
//! [`Interface<F, P>`] is the single seam where "which capability, which
//! backend" is decided. It is a pure structural lookup on the composite
//! backend type: no registry, no name matching. If a composition does not
//! list `F`, its backend type does not implement `Interface<F, P>` and any
//! surface call that needs it fails to compile.
//!
//! ## Writing a Feature
//!
//! ```rust,ignore
//! pub struct CreateEntities;
//!
//! impl Feature for CreateEntities {
//!     const NAME: &'static str = "CreateEntities";
//!     type Contract<P: Policy> = dyn CreateEntitiesContract<P>;
//! }
//!
//! // Any concrete backend implementing the contract can resolve it
//! impl<P: Policy, B: CreateEntitiesContract<P> + 'static> Interface<CreateEntities, P> for B {
//!     fn interface(&self) -> &(dyn CreateEntitiesContract<P> + 'static) {
//!         self
//!     }
//! }
//! ```
//!
//! [`Identity`]: gantry_core::Identity

use gantry_core::Policy;

/// A named capability: a Surface/Contract pair
///
/// Features are zero-sized markers. They never exist at runtime.
pub trait Feature: 'static {
    /// Human-readable feature name (for logs and introspection)
    const NAME: &'static str;

    /// Backend-facing contract, usually `dyn SomeContract<P>`
    type Contract<P: Policy>: ?Sized + 'static;
}

/// Resolve the contract of feature `F` inside a backend
///
/// Implemented by every concrete backend that implements `F`'s contract, and
/// inherited by composite backend trait objects through their supertraits.
pub trait Interface<F: Feature, P: Policy> {
    /// The contract implementation for `F`
    fn interface(&self) -> &F::Contract<P>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::FeaturePolicy3d;

    struct Counting;

    trait CountingContract<P: Policy>: Send + Sync {
        fn count(&self) -> usize;
    }

    impl Feature for Counting {
        const NAME: &'static str = "Counting";
        type Contract<P: Policy> = dyn CountingContract<P>;
    }

    impl<P: Policy, B: CountingContract<P> + 'static> Interface<Counting, P> for B {
        fn interface(&self) -> &(dyn CountingContract<P> + 'static) {
            self
        }
    }

    struct Fixed(usize);

    impl<P: Policy> CountingContract<P> for Fixed {
        fn count(&self) -> usize {
            self.0
        }
    }

    fn resolve<B: Interface<Counting, FeaturePolicy3d>>(backend: &B) -> usize {
        backend.interface().count()
    }

    #[test]
    fn test_interface_resolves_contract() {
        assert_eq!(resolve(&Fixed(3)), 3);
    }

    #[test]
    fn test_feature_name() {
        assert_eq!(Counting::NAME, "Counting");
    }
}
