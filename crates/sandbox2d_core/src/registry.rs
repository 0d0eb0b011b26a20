//! Shape registry
//!
//! Owns every shape and decides which ones are drawn. It is the only place
//! that destroys a shape's physics body.

use std::collections::{HashMap, HashSet};

use crate::canvas::Canvas;
use crate::shape::Shape;
use sandbox2d_physics::{ColliderHandle, PhysicsWorld};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Generational key to a shape owned by a [`ShapeRegistry`]
    pub struct ShapeKey;
}

/// Owner of every shape and of the live (drawn) set
///
/// A shape is first inserted (owned, not drawn) and then added (live). The
/// collider map replaces per-fixture user data: contacts name colliders and
/// the registry turns them back into shape keys.
#[derive(Default)]
pub struct ShapeRegistry {
    shapes: SlotMap<ShapeKey, Box<dyn Shape>>,
    live: HashSet<ShapeKey>,
    by_collider: HashMap<ColliderHandle, ShapeKey>,
}

impl ShapeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a shape without drawing it
    pub fn insert<S: Shape + 'static>(&mut self, shape: S) -> ShapeKey {
        let collider = shape.body().collider();
        let key = self.shapes.insert(Box::new(shape));
        self.by_collider.insert(collider, key);
        key
    }

    /// Make an owned shape live
    ///
    /// Returns true if the shape was not live before. Adding twice is a no-op,
    /// as is adding a key this registry does not own.
    pub fn add(&mut self, key: ShapeKey) -> bool {
        if !self.shapes.contains_key(key) {
            log::warn!("Ignoring add of unknown shape {:?}", key);
            return false;
        }
        self.live.insert(key)
    }

    /// Make several owned shapes live
    pub fn add_many(&mut self, keys: impl IntoIterator<Item = ShapeKey>) {
        for key in keys {
            self.add(key);
        }
    }

    /// Take ownership of a shape and make it live
    pub fn spawn<S: Shape + 'static>(&mut self, shape: S) -> ShapeKey {
        let key = self.insert(shape);
        self.live.insert(key);
        key
    }

    /// Remove a shape and destroy its physics body
    ///
    /// Returns false, touching nothing, if the key is unknown or was already
    /// deleted, so a body is never destroyed twice.
    pub fn delete(&mut self, world: &mut PhysicsWorld, key: ShapeKey) -> bool {
        let Some(shape) = self.shapes.remove(key) else {
            return false;
        };
        self.live.remove(&key);
        self.by_collider.remove(&shape.body().collider());
        world.destroy_body(shape.body());
        log::trace!("Deleted shape {:?}", key);
        true
    }

    /// Draw every live shape (in no particular order)
    pub fn draw_all(&self, world: &PhysicsWorld, canvas: &mut dyn Canvas) {
        for key in &self.live {
            if let Some(shape) = self.shapes.get(*key) {
                shape.draw(world, canvas);
            }
        }
    }

    /// Get a shape by key
    pub fn get(&self, key: ShapeKey) -> Option<&dyn Shape> {
        self.shapes.get(key).map(|shape| shape.as_ref())
    }

    /// Get a mutable shape by key
    pub fn get_mut(&mut self, key: ShapeKey) -> Option<&mut dyn Shape> {
        let shape: &mut dyn Shape = self.shapes.get_mut(key)?.as_mut();
        Some(shape)
    }

    /// Whether the registry owns this key (live or not)
    pub fn contains(&self, key: ShapeKey) -> bool {
        self.shapes.contains_key(key)
    }

    /// Whether the shape is drawn
    pub fn is_live(&self, key: ShapeKey) -> bool {
        self.live.contains(&key)
    }

    /// Number of live shapes
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Number of owned shapes, live or not
    pub fn owned_count(&self) -> usize {
        self.shapes.len()
    }

    /// Whether no shape is live
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Iterate over the live keys
    pub fn live_keys(&self) -> impl Iterator<Item = ShapeKey> + '_ {
        self.live.iter().copied()
    }

    /// The shape owning a collider
    pub fn shape_for_collider(&self, collider: ColliderHandle) -> Option<ShapeKey> {
        self.by_collider.get(&collider).copied()
    }

    /// Owned shape pairs whose fixtures are touching after the last step
    pub fn touching_pairs(&self, world: &PhysicsWorld) -> Vec<(ShapeKey, ShapeKey)> {
        world
            .contacts()
            .into_iter()
            .filter(|contact| contact.touching)
            .filter_map(|contact| {
                Some((
                    self.shape_for_collider(contact.collider1)?,
                    self.shape_for_collider(contact.collider2)?,
                ))
            })
            .collect()
    }
}
