//! Body motion kinds and the handle pairing a body with its single fixture

use crate::material::CollisionInfo;
use rapier2d::math::Real;
use rapier2d::prelude::{
    CoefficientCombineRule, ColliderBuilder, ColliderHandle, RigidBodyBuilder, RigidBodyHandle,
    RigidBodyType,
};

/// Friction of static and kinematic fixtures, which carry no material
pub const SURFACE_FRICTION: Real = 0.2;

/// How a body is moved
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionKind {
    /// Immovable, infinite mass
    Static,
    /// Infinite mass, moved by game code through its velocity
    Kinematic,
    /// Fully simulated: forces, gravity and collisions
    Dynamic,
}

impl MotionKind {
    /// Engine body type for this motion kind
    pub fn body_type(self) -> RigidBodyType {
        match self {
            MotionKind::Static => RigidBodyType::Fixed,
            MotionKind::Kinematic => RigidBodyType::KinematicVelocityBased,
            MotionKind::Dynamic => RigidBodyType::Dynamic,
        }
    }

    /// Whether bodies of this kind carry material properties
    pub fn has_material(self) -> bool {
        matches!(self, MotionKind::Dynamic)
    }
}

/// Construction-time motion request
///
/// A dynamic body cannot be requested without its material, and there is no
/// way to name an unknown kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    Static,
    Kinematic,
    Dynamic(CollisionInfo),
}

impl Motion {
    /// The motion kind tag of this request
    pub fn kind(&self) -> MotionKind {
        match self {
            Motion::Static => MotionKind::Static,
            Motion::Kinematic => MotionKind::Kinematic,
            Motion::Dynamic(_) => MotionKind::Dynamic,
        }
    }

    /// Engine body builder for this motion
    ///
    /// Dynamic bodies sweep against everything they hit, so thin fixtures
    /// cannot tunnel through walls at speed.
    pub(crate) fn body_builder(&self) -> RigidBodyBuilder {
        RigidBodyBuilder::new(self.kind().body_type())
            .ccd_enabled(matches!(self, Motion::Dynamic(_)))
    }

    /// Apply the material to a fixture builder
    ///
    /// Static and kinematic fixtures get the fixed [`SURFACE_FRICTION`].
    pub(crate) fn apply_material(&self, builder: ColliderBuilder) -> ColliderBuilder {
        let builder = builder.restitution_combine_rule(CoefficientCombineRule::Max);
        match self {
            Motion::Dynamic(info) => builder
                .density(info.density)
                .friction(info.friction)
                .restitution(info.restitution),
            Motion::Static | Motion::Kinematic => builder.friction(SURFACE_FRICTION),
        }
    }
}

/// Handle to one physics body and the single fixture attached to it
///
/// Copyable: the handle names the body, it does not own it. Destruction goes
/// through [`crate::PhysicsWorld::destroy_body`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle {
    pub(crate) body: RigidBodyHandle,
    pub(crate) collider: ColliderHandle,
    pub(crate) kind: MotionKind,
}

impl BodyHandle {
    /// Engine handle of the body
    pub fn rigid_body(&self) -> RigidBodyHandle {
        self.body
    }

    /// Engine handle of the fixture
    pub fn collider(&self) -> ColliderHandle {
        self.collider
    }

    /// Motion kind the body was created with
    pub fn kind(&self) -> MotionKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_kind_tags() {
        assert_eq!(Motion::Static.kind(), MotionKind::Static);
        assert_eq!(Motion::Kinematic.kind(), MotionKind::Kinematic);
        assert_eq!(
            Motion::Dynamic(CollisionInfo::default()).kind(),
            MotionKind::Dynamic
        );
    }

    #[test]
    fn test_body_types() {
        assert_eq!(MotionKind::Static.body_type(), RigidBodyType::Fixed);
        assert_eq!(
            MotionKind::Kinematic.body_type(),
            RigidBodyType::KinematicVelocityBased
        );
        assert_eq!(MotionKind::Dynamic.body_type(), RigidBodyType::Dynamic);
    }

    #[test]
    fn test_only_dynamic_has_material() {
        assert!(!MotionKind::Static.has_material());
        assert!(!MotionKind::Kinematic.has_material());
        assert!(MotionKind::Dynamic.has_material());
    }

    #[test]
    fn test_dynamic_material_applied_to_fixture() {
        let info = CollisionInfo::new(2.0, 0.3, 0.7);
        let collider = Motion::Dynamic(info)
            .apply_material(ColliderBuilder::ball(1.0))
            .build();

        assert_eq!(collider.density(), 2.0);
        assert_eq!(collider.friction(), 0.3);
        assert_eq!(collider.restitution(), 0.7);
    }

    #[test]
    fn test_only_dynamic_bodies_use_ccd() {
        assert!(Motion::Dynamic(CollisionInfo::default())
            .body_builder()
            .build()
            .is_ccd_enabled());
        assert!(!Motion::Static.body_builder().build().is_ccd_enabled());
        assert!(!Motion::Kinematic.body_builder().build().is_ccd_enabled());
    }

    #[test]
    fn test_surface_friction_on_static_and_kinematic() {
        for motion in [Motion::Static, Motion::Kinematic] {
            let collider = motion.apply_material(ColliderBuilder::ball(1.0)).build();
            assert_eq!(collider.friction(), SURFACE_FRICTION);
        }
    }
}
