//! Feature lists: composing features into one engine type
//!
//! ## Composition
//!
//! A feature list is a closed set of features chosen per build. It names
//! a composite backend type that structurally provides every listed
//! contract, so the lookup "which contract backs this surface call" is
//! resolved from types alone.
//!
//! The [`feature_list!`](crate::feature_list) macro declares:
//! - the list marker type,
//! - a composite backend trait whose supertraits are [`EngineBackend`] and
//!   [`Interface<F, P>`](crate::Interface) for every listed feature,
//! - a blanket impl of that trait for every concrete backend that conforms,
//! - the [`FeatureList`] impl with `Backend = dyn Composite<P>`.
//!
//! Any concrete backend implementing the listed contracts can be chosen at
//! runtime and erased into `Arc<dyn Composite<P>>`. A backend is never asked
//! to implement a contract its list does not name.
//!
//! ## Usage
//!
//! ```rust,ignore
//! feature_list! {
//!     /// Links and joints with names
//!     pub struct NamedEntities: NamedEntitiesBackend {
//!         CreateEntities,
//!         GetEntityName,
//!     }
//! }
//!
//! let engine = Engine::<FeaturePolicy3d, NamedEntities>::new(backend)?;
//! ```

use gantry_core::{BackendId, Identity, Policy};

/// Base contract every backend implements, whatever its feature list
pub trait EngineBackend: Send + Sync + 'static {
    /// Name of the backend implementation (for logs)
    fn backend_name(&self) -> &str;

    /// Unique identifier of this backend instance
    fn backend_id(&self) -> BackendId;

    /// Bring up the engine object and return its Identity
    ///
    /// Returns an invalid Identity if the engine cannot be initiated.
    fn initiate_engine(&self) -> Identity;
}

/// A closed, compile-time set of features
pub trait FeatureList<P: Policy>: 'static {
    /// Composite backend type providing every listed contract
    type Backend: ?Sized + EngineBackend;

    /// Names of the listed features, in declaration order
    const FEATURES: &'static [&'static str];

    /// Check whether a feature with the given name is listed
    fn contains(name: &str) -> bool {
        Self::FEATURES.contains(&name)
    }
}

/// Declare a feature list and its composite backend trait
///
/// See the [module documentation](crate::feature_list) for what is generated.
#[macro_export]
macro_rules! feature_list {
    (
        $(#[$meta:meta])*
        $vis:vis struct $list:ident : $backend:ident {
            $($feature:ty),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $list;

        #[doc = concat!("Composite backend contract of [`", stringify!($list), "`]")]
        $vis trait $backend<P: $crate::gantry_core::Policy>:
            $crate::EngineBackend $(+ $crate::Interface<$feature, P>)+
        {
        }

        impl<P, B> $backend<P> for B
        where
            P: $crate::gantry_core::Policy,
            B: $crate::EngineBackend $(+ $crate::Interface<$feature, P>)+,
        {
        }

        impl<P: $crate::gantry_core::Policy> $crate::FeatureList<P> for $list {
            type Backend = dyn $backend<P>;

            const FEATURES: &'static [&'static str] =
                &[$(<$feature as $crate::Feature>::NAME),+];
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{CreateEntities, GetEntityName};
    use gantry_core::FeaturePolicy3d;

    crate::feature_list! {
        /// Both built-in features
        struct Full: FullBackend {
            CreateEntities,
            GetEntityName,
        }
    }

    crate::feature_list! {
        struct NamesOnly: NamesOnlyBackend { GetEntityName }
    }

    #[test]
    fn test_feature_names_in_declaration_order() {
        assert_eq!(
            <Full as FeatureList<FeaturePolicy3d>>::FEATURES,
            &["CreateEntities", "GetEntityName"]
        );
        assert_eq!(
            <NamesOnly as FeatureList<FeaturePolicy3d>>::FEATURES,
            &["GetEntityName"]
        );
    }

    #[test]
    fn test_contains() {
        assert!(<Full as FeatureList<FeaturePolicy3d>>::contains("CreateEntities"));
        assert!(!<NamesOnly as FeatureList<FeaturePolicy3d>>::contains("CreateEntities"));
        assert!(!<NamesOnly as FeatureList<FeaturePolicy3d>>::contains("createentities"));
    }
}
