//! Numeric policies
//!
//! A [`Policy`] fixes the scalar type and dimensionality an engine is
//! compiled for. Every feature surface and every contract is generic over it,
//! so a 2D `f32` engine and a 3D `f64` engine share the same feature code.

use std::fmt::Debug;

/// Floating point scalar usable in a policy
pub trait Scalar: Copy + Debug + Default + PartialEq + PartialOrd + Send + Sync + 'static {
    /// Additive identity
    const ZERO: Self;
    /// Multiplicative identity
    const ONE: Self;
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
}

/// Compile-time choice of scalar type and dimensionality
///
/// Policies are zero-sized markers; they never exist at runtime.
pub trait Policy: Send + Sync + 'static {
    /// Scalar type of every quantity
    type Scalar: Scalar;

    /// Linear quantities (position, linear velocity, linear acceleration)
    type Vector: Copy + Debug + Default + PartialEq + Send + Sync + 'static;

    /// Orientation
    type Rotation: Copy + Debug + PartialEq + Send + Sync + 'static;

    /// Angular quantities (angular velocity, angular acceleration)
    type Angular: Copy + Debug + Default + PartialEq + Send + Sync + 'static;

    /// Number of spatial dimensions
    const DIM: usize;

    /// Short label used in logs
    const LABEL: &'static str;

    /// Orientation with no rotation
    fn identity_rotation() -> Self::Rotation;
}

macro_rules! define_policy {
    (
        $(#[$meta:meta])*
        $name:ident, $scalar:ty, dim = 3
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name;

        impl Policy for $name {
            type Scalar = $scalar;
            type Vector = [$scalar; 3];
            /// Unit quaternion stored as `[w, x, y, z]`
            type Rotation = [$scalar; 4];
            type Angular = [$scalar; 3];

            const DIM: usize = 3;
            const LABEL: &'static str = stringify!($name);

            fn identity_rotation() -> Self::Rotation {
                [<$scalar as Scalar>::ONE, 0.0, 0.0, 0.0]
            }
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident, $scalar:ty, dim = 2
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name;

        impl Policy for $name {
            type Scalar = $scalar;
            type Vector = [$scalar; 2];
            /// Heading angle in radians
            type Rotation = $scalar;
            type Angular = $scalar;

            const DIM: usize = 2;
            const LABEL: &'static str = stringify!($name);

            fn identity_rotation() -> Self::Rotation {
                <$scalar as Scalar>::ZERO
            }
        }
    };
}

define_policy!(
    /// Three dimensions, double precision
    FeaturePolicy3d, f64, dim = 3
);
define_policy!(
    /// Three dimensions, single precision
    FeaturePolicy3f, f32, dim = 3
);
define_policy!(
    /// Two dimensions, double precision
    FeaturePolicy2d, f64, dim = 2
);
define_policy!(
    /// Two dimensions, single precision
    FeaturePolicy2f, f32, dim = 2
);
