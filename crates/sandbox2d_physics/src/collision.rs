//! Collision groups and contact reporting
//!
//! Provides the group/mask filter that decides which shape pairs may touch,
//! and the contact record the world reports after each step.

use bitflags::bitflags;
use rapier2d::prelude::{ColliderHandle, Group, InteractionGroups};

bitflags! {
    /// Collision groups for filtering which shapes can collide
    ///
    /// Each group is a bit in a 32-bit mask, the same width the physics engine
    /// filters on, so up to 32 groups can be told apart.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CollisionGroup: u32 {
        /// Belongs to nothing / collides with nothing
        const NONE = 0;
        /// Default group for most shapes
        const DEFAULT = 1 << 0;
        /// Second general-purpose group
        const SECOND = 1 << 1;
        /// Third general-purpose group
        const THIRD = 1 << 2;
        /// Every bit set (collide with everything)
        const ALL = !0;
    }
}

impl CollisionGroup {
    /// Wrap raw group bits, keeping bits that have no named constant
    pub const fn make(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }

    /// The single-bit group at `index` (0-based)
    ///
    /// # Panics
    /// If `index` is 32 or more.
    pub const fn nth(index: u32) -> Self {
        assert!(index < u32::BITS, "collision group index out of range");
        Self::from_bits_retain(1 << index)
    }
}

/// Collision filter determining what a shape collides with
///
/// - `group`: which group(s) this shape belongs to
/// - `collides_with`: which group(s) this shape accepts contact from
///
/// Two shapes A and B collide only if:
/// - (A.group & B.collides_with) != 0, AND
/// - (B.group & A.collides_with) != 0
///
/// Permission from one side alone never produces a contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionFilter {
    /// Which group(s) this shape belongs to
    pub group: CollisionGroup,
    /// Which group(s) this shape can collide with
    pub collides_with: CollisionGroup,
}

impl Default for CollisionFilter {
    fn default() -> Self {
        Self {
            group: CollisionGroup::DEFAULT,
            collides_with: CollisionGroup::ALL,
        }
    }
}

impl CollisionFilter {
    /// Create a new collision filter
    pub fn new(group: CollisionGroup, collides_with: CollisionGroup) -> Self {
        Self { group, collides_with }
    }

    /// Check if this filter allows collision with another filter
    ///
    /// Both sides must agree.
    pub fn collides_with(&self, other: &Self) -> bool {
        self.group.intersects(other.collides_with) && other.group.intersects(self.collides_with)
    }

    /// Engine representation of this filter
    ///
    /// The engine's default interaction test is the same symmetric AND as
    /// [`CollisionFilter::collides_with`].
    pub fn interaction_groups(&self) -> InteractionGroups {
        InteractionGroups::new(
            Group::from_bits_truncate(self.group.bits()),
            Group::from_bits_truncate(self.collides_with.bits()),
        )
    }

    /// Recover a filter from the engine representation
    pub fn from_interaction_groups(groups: InteractionGroups) -> Self {
        Self {
            group: CollisionGroup::make(groups.memberships.bits()),
            collides_with: CollisionGroup::make(groups.filter.bits()),
        }
    }
}

/// A narrow-phase pairing of two fixtures reported after a step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactInfo {
    /// First fixture of the pair
    pub collider1: ColliderHandle,
    /// Second fixture of the pair
    pub collider2: ColliderHandle,
    /// Whether the two shapes are actually touching (not just close)
    pub touching: bool,
}

impl ContactInfo {
    /// Whether `collider` is one side of this contact
    pub fn involves(&self, collider: ColliderHandle) -> bool {
        self.collider1 == collider || self.collider2 == collider
    }
}
