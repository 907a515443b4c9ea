//! Kinematic frame data
//!
//! [`FrameData`] is plain kinematic state: a pose plus first and second
//! derivatives, expressed in some reference frame. The runtime treats it as
//! opaque cargo passed from a feature surface into a backend contract. No
//! frame math lives here.

use crate::policy::Policy;
use std::fmt;

/// Position and orientation
pub struct Pose<P: Policy> {
    /// Translation from the reference frame origin
    pub translation: P::Vector,
    /// Orientation relative to the reference frame
    pub rotation: P::Rotation,
}

impl<P: Policy> Pose<P> {
    /// Pose at the given translation with no rotation
    pub fn from_translation(translation: P::Vector) -> Self {
        Self {
            translation,
            rotation: P::identity_rotation(),
        }
    }
}

impl<P: Policy> Default for Pose<P> {
    fn default() -> Self {
        Self::from_translation(P::Vector::default())
    }
}

impl<P: Policy> Clone for Pose<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Policy> Copy for Pose<P> {}

impl<P: Policy> PartialEq for Pose<P> {
    fn eq(&self, other: &Self) -> bool {
        self.translation == other.translation && self.rotation == other.rotation
    }
}

impl<P: Policy> fmt::Debug for Pose<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pose")
            .field("translation", &self.translation)
            .field("rotation", &self.rotation)
            .finish()
    }
}

/// Pose, velocity and acceleration of a frame
///
/// The default value is the identity pose at rest.
///
/// # Example
///
/// ```
/// use gantry_core::{FeaturePolicy3d, FrameData};
///
/// let data = FrameData::<FeaturePolicy3d>::at([1.0, 2.0, 3.0]);
/// assert_eq!(data.pose.translation, [1.0, 2.0, 3.0]);
/// assert_eq!(data.linear_velocity, [0.0; 3]);
/// ```
pub struct FrameData<P: Policy> {
    /// Pose of the frame
    pub pose: Pose<P>,
    /// Linear velocity of the frame origin
    pub linear_velocity: P::Vector,
    /// Angular velocity of the frame
    pub angular_velocity: P::Angular,
    /// Linear acceleration of the frame origin
    pub linear_acceleration: P::Vector,
    /// Angular acceleration of the frame
    pub angular_acceleration: P::Angular,
}

impl<P: Policy> FrameData<P> {
    /// Frame at rest with the given pose
    pub fn with_pose(pose: Pose<P>) -> Self {
        Self {
            pose,
            linear_velocity: P::Vector::default(),
            angular_velocity: P::Angular::default(),
            linear_acceleration: P::Vector::default(),
            angular_acceleration: P::Angular::default(),
        }
    }

    /// Frame at rest at the given translation
    pub fn at(translation: P::Vector) -> Self {
        Self::with_pose(Pose::from_translation(translation))
    }

    /// Replace the linear velocity
    pub fn with_linear_velocity(mut self, velocity: P::Vector) -> Self {
        self.linear_velocity = velocity;
        self
    }

    /// Replace the angular velocity
    pub fn with_angular_velocity(mut self, velocity: P::Angular) -> Self {
        self.angular_velocity = velocity;
        self
    }
}

impl<P: Policy> Default for FrameData<P> {
    fn default() -> Self {
        Self::with_pose(Pose::default())
    }
}

impl<P: Policy> Clone for FrameData<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Policy> Copy for FrameData<P> {}

impl<P: Policy> PartialEq for FrameData<P> {
    fn eq(&self, other: &Self) -> bool {
        self.pose == other.pose
            && self.linear_velocity == other.linear_velocity
            && self.angular_velocity == other.angular_velocity
            && self.linear_acceleration == other.linear_acceleration
            && self.angular_acceleration == other.angular_acceleration
    }
}

impl<P: Policy> fmt::Debug for FrameData<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameData")
            .field("pose", &self.pose)
            .field("linear_velocity", &self.linear_velocity)
            .field("angular_velocity", &self.angular_velocity)
            .field("linear_acceleration", &self.linear_acceleration)
            .field("angular_acceleration", &self.angular_acceleration)
            .finish()
    }
}
