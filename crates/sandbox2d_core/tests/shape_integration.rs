//! Integration tests for shapes over the physics world
//!
//! These tests check the pixel-space contract end to end:
//! 1. Positions and velocities round-trip through the simulation
//! 2. Collision groups only produce contacts with mutual permission
//! 3. The registry is the only path that destroys bodies
//! 4. Constructor conventions (rectangle corner, dynamic line quad)

use sandbox2d_core::{
    Circle, CollisionGroup, CollisionInfo, DrawCommand, DrawList, Line, Motion, MotionKind,
    PhysicsConfig, PhysicsWorld, Polygon, Real, Rectangle, ScreenSpace, Shape, ShapeRegistry,
    Vector,
};
use sandbox2d_physics::ColliderBuilder;

const EPSILON: Real = 1e-3;

fn world() -> PhysicsWorld {
    PhysicsWorld::with_config(PhysicsConfig::default().with_screen(ScreenSpace::new(20.0, 600.0)))
}

fn weightless_world() -> PhysicsWorld {
    PhysicsWorld::with_config(
        PhysicsConfig::new([0.0, 0.0]).with_screen(ScreenSpace::new(20.0, 600.0)),
    )
}

fn close(a: Vector<Real>, b: Vector<Real>) -> bool {
    (a - b).norm() < EPSILON
}

fn motions() -> [Motion; 3] {
    [
        Motion::Static,
        Motion::Kinematic,
        Motion::Dynamic(CollisionInfo::default()),
    ]
}

/// One shape of every kind for the given motion
fn all_kinds(world: &mut PhysicsWorld, motion: Motion) -> Vec<Box<dyn Shape>> {
    let colour = Default::default();
    let triangle = [Vector::new(300.0, 300.0), Vector::new(340.0, 300.0), Vector::new(320.0, 260.0)];

    let mut shapes: Vec<Box<dyn Shape>> = Vec::new();
    shapes.push(Box::new(
        Circle::new(world, Vector::new(50.0, 50.0), 10.0, motion, colour).unwrap(),
    ));
    shapes.push(Box::new(
        Rectangle::new(world, Vector::new(100.0, 100.0), Vector::new(30.0, 20.0), motion, colour).unwrap(),
    ));
    shapes.push(Box::new(
        Line::new(world, Vector::new(200.0, 200.0), Vector::new(260.0, 230.0), motion, colour).unwrap(),
    ));
    shapes.push(Box::new(Polygon::new(world, &triangle, motion, colour).unwrap()));
    shapes
}

// ==================== Coordinate Contract Tests ====================

#[test]
fn test_position_round_trip_for_every_combination() {
    let mut world = world();

    for motion in motions() {
        for shape in all_kinds(&mut world, motion) {
            for target in [Vector::new(0.0, 0.0), Vector::new(123.5, 456.25), Vector::new(899.0, 1.0)] {
                shape.set_position(&mut world, target);
                let got = shape.position(&world);
                assert!(
                    close(got, target),
                    "{:?} shape: set {:?}, got {:?}",
                    motion.kind(),
                    target,
                    got
                );
            }
        }
    }
}

#[test]
fn test_velocity_sign_law() {
    let mut world = world();

    for motion in [Motion::Kinematic, Motion::Dynamic(CollisionInfo::default())] {
        let circle = Circle::new(&mut world, Vector::new(50.0, 50.0), 5.0, motion, Default::default()).unwrap();
        circle.set_velocity(&mut world, Vector::new(40.0, 60.0));

        assert!(close(circle.velocity(&world), Vector::new(40.0, 60.0)));

        // Down the screen is negative Y in the simulation
        let linvel = *world.body(circle.body()).unwrap().linvel();
        assert!(close(linvel, Vector::new(2.0, -3.0)));
    }
}

#[test]
fn test_static_shapes_ignore_velocity() {
    let mut world = world();
    let circle = Circle::new_static(&mut world, Vector::new(50.0, 50.0), 5.0).unwrap();

    circle.set_velocity(&mut world, Vector::new(40.0, 60.0));
    circle.set_angular_velocity(&mut world, 2.0);

    assert!(close(circle.velocity(&world), Vector::new(0.0, 0.0)));
    assert_eq!(circle.angular_velocity(&world), 0.0);
}

#[test]
fn test_angular_velocity_is_not_converted() {
    let mut world = world();
    let rect = Rectangle::new_kinematic(&mut world, Vector::new(0.0, 0.0), Vector::new(10.0, 10.0)).unwrap();

    rect.set_angular_velocity(&mut world, 1.5);
    assert_eq!(rect.angular_velocity(&world), 1.5);
}

#[test]
fn test_dynamic_shape_falls_down_the_screen() {
    let mut world = world();
    let circle =
        Circle::new_dynamic(&mut world, Vector::new(100.0, 100.0), 10.0, CollisionInfo::default()).unwrap();

    for _ in 0..30 {
        world.step();
    }

    assert!(circle.position(&world).y > 100.0);
    assert!(circle.velocity(&world).y > 0.0);
}

// ==================== Constructor Convention Tests ====================

#[test]
fn test_rectangle_reports_its_center() {
    let mut world = world();
    let rect = Rectangle::new_static(&mut world, Vector::new(5.0, 5.0), Vector::new(20.0, 10.0)).unwrap();

    assert!(close(rect.position(&world), Vector::new(15.0, 10.0)));
}

#[test]
fn test_dynamic_line_is_a_thin_quad() {
    let mut world = world();
    let line = Line::new_dynamic(
        &mut world,
        Vector::new(0.0, 0.0),
        Vector::new(10.0, 0.0),
        CollisionInfo::default(),
    )
    .unwrap();

    let outline = line.collision_outline(&world);
    assert_eq!(outline.len(), 4);
    for expected in [[0.0, 0.0], [0.0, 1.0], [10.0, 0.0], [10.0, 1.0]] {
        assert!(
            outline
                .iter()
                .any(|p| (p[0] - expected[0]).abs() < EPSILON && (p[1] - expected[1]).abs() < EPSILON),
            "missing {:?} in {:?}",
            expected,
            outline
        );
    }

    // Still drawn as the two-point line
    let mut list = DrawList::new();
    line.draw(&world, &mut list);
    match &list.commands()[0] {
        DrawCommand::Line { from, to, width, .. } => {
            assert!(from[0].abs() < EPSILON && from[1].abs() < EPSILON);
            assert!((to[0] - 10.0).abs() < EPSILON && to[1].abs() < EPSILON);
            assert_eq!(*width, 1.0);
        }
        other => panic!("Expected line, got {:?}", other),
    }
}

#[test]
fn test_dynamic_line_lands_on_static_floor() {
    let mut world = world();
    Line::new_static(&mut world, Vector::new(100.0, 500.0), Vector::new(700.0, 500.0)).unwrap();
    let plank = Line::new_dynamic(
        &mut world,
        Vector::new(300.0, 100.0),
        Vector::new(400.0, 100.0),
        CollisionInfo::new(1.0, 0.5, 0.0),
    )
    .unwrap();

    // A 1px quad falling 400px moves several thicknesses per step
    for _ in 0..400 {
        world.step();
    }

    for [_, y] in plank.endpoints(&world) {
        assert!(y > 450.0 && y < 500.5, "plank ended at y = {}", y);
    }
}

#[test]
fn test_line_body_sits_at_sim_origin() {
    let mut world = world();
    let line = Line::new_static(&mut world, Vector::new(10.0, 10.0), Vector::new(50.0, 10.0)).unwrap();

    assert!(close(line.position(&world), Vector::new(0.0, 600.0)));
}

// ==================== Material Tests ====================

#[test]
fn test_material_only_on_dynamic_shapes() {
    let mut world = world();

    for motion in motions() {
        for shape in all_kinds(&mut world, motion) {
            assert_eq!(shape.motion_kind(), motion.kind());
            assert_eq!(
                shape.material().is_some(),
                motion.kind() == MotionKind::Dynamic
            );
        }
    }
}

#[test]
fn test_material_round_trip() {
    let mut world = world();
    let circle = Circle::new_dynamic(
        &mut world,
        Vector::new(10.0, 10.0),
        5.0,
        CollisionInfo::new(1.0, 1.0, 1.0),
    )
    .unwrap();
    let material = circle.material().unwrap();

    assert_eq!(material.density(&world), 1.0);
    material.set_density(&mut world, 2.5);
    material.set_friction(&mut world, 0.2);
    material.set_restitution(&mut world, 0.4);

    assert_eq!(material.density(&world), 2.5);
    assert_eq!(material.friction(&world), 0.2);
    assert_eq!(material.restitution(&world), 0.4);
}

#[test]
#[should_panic(expected = "exactly one fixture")]
fn test_second_fixture_is_an_invariant_violation() {
    let mut world = world();
    let circle =
        Circle::new_dynamic(&mut world, Vector::new(10.0, 10.0), 5.0, CollisionInfo::default()).unwrap();
    world.attach_fixture(circle.body(), ColliderBuilder::ball(0.1));

    let _ = circle.material().unwrap().density(&world);
}

#[test]
#[should_panic(expected = "destroyed outside the shape registry")]
fn test_material_after_external_destroy_panics() {
    let mut world = world();
    let circle =
        Circle::new_dynamic(&mut world, Vector::new(10.0, 10.0), 5.0, CollisionInfo::default()).unwrap();
    let material = circle.material().unwrap();
    assert!(world.destroy_body(circle.body()));

    let _ = material.density(&world);
}

// ==================== Collision Group Tests ====================

/// Two circles flying at each other; whether they ever touch
fn head_on(a_groups: (CollisionGroup, CollisionGroup), b_groups: (CollisionGroup, CollisionGroup)) -> bool {
    let mut world = weightless_world();
    let mut registry = ShapeRegistry::new();
    let info = CollisionInfo::default();

    let a = Circle::new_dynamic(&mut world, Vector::new(100.0, 100.0), 10.0, info).unwrap();
    let b = Circle::new_dynamic(&mut world, Vector::new(160.0, 100.0), 10.0, info).unwrap();
    a.set_collision_group(&mut world, a_groups.0, a_groups.1);
    b.set_collision_group(&mut world, b_groups.0, b_groups.1);
    a.set_velocity(&mut world, Vector::new(300.0, 0.0));
    b.set_velocity(&mut world, Vector::new(-300.0, 0.0));
    let a = registry.spawn(a);
    let b = registry.spawn(b);

    let mut touched = false;
    for _ in 0..30 {
        world.step();
        touched |= registry
            .touching_pairs(&world)
            .iter()
            .any(|&(x, y)| (x, y) == (a, b) || (x, y) == (b, a));
    }
    touched
}

#[test]
fn test_mutual_permission_collides() {
    assert!(head_on(
        (CollisionGroup::SECOND, CollisionGroup::THIRD),
        (CollisionGroup::THIRD, CollisionGroup::SECOND),
    ));
}

#[test]
fn test_one_sided_permission_never_collides() {
    // A accepts B's group, B refuses A's
    assert!(!head_on(
        (CollisionGroup::SECOND, CollisionGroup::THIRD),
        (CollisionGroup::THIRD, CollisionGroup::DEFAULT),
    ));
}

#[test]
fn test_collision_filter_is_stored_on_fixture() {
    let mut world = world();
    let rect = Rectangle::new_static(&mut world, Vector::new(0.0, 0.0), Vector::new(10.0, 10.0)).unwrap();

    rect.set_collision_group(&mut world, CollisionGroup::THIRD, CollisionGroup::ALL);
    let filter = rect.collision_filter(&world);
    assert_eq!(filter.group, CollisionGroup::THIRD);
    assert_eq!(filter.collides_with, CollisionGroup::ALL);
}

// ==================== Registry Tests ====================

#[test]
fn test_add_twice_keeps_one_entry() {
    let mut world = world();
    let mut registry = ShapeRegistry::new();
    let key = registry.insert(Circle::new_static(&mut world, Vector::new(10.0, 10.0), 5.0).unwrap());

    registry.add(key);
    registry.add(key);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_deleted_shape_is_gone_everywhere() {
    let mut world = world();
    let mut registry = ShapeRegistry::new();

    let floor = registry.spawn(Rectangle::new_static(&mut world, Vector::new(0.0, 500.0), Vector::new(900.0, 20.0)).unwrap());
    let ball = Circle::new_dynamic(
        &mut world,
        Vector::new(450.0, 485.0),
        10.0,
        CollisionInfo::new(1.0, 0.5, 0.0),
    )
    .unwrap();
    let ball_collider = ball.body().collider();
    let ball = registry.spawn(ball);

    for _ in 0..60 {
        world.step();
    }
    let pairs = registry.touching_pairs(&world);
    assert!(pairs.contains(&(floor, ball)) || pairs.contains(&(ball, floor)));

    assert!(registry.delete(&mut world, ball));
    assert!(!registry.delete(&mut world, ball));

    let mut list = DrawList::new();
    registry.draw_all(&world, &mut list);
    assert_eq!(list.len(), 1);

    assert!(world.contacts().iter().all(|c| !c.involves(ball_collider)));
    world.step();
    assert!(registry.touching_pairs(&world).is_empty());
    assert_eq!(world.body_count(), 1);
}

#[test]
fn test_draw_all_draws_each_live_shape_once() {
    let mut world = world();
    let mut registry = ShapeRegistry::new();

    let circle = registry.spawn(Circle::new_static(&mut world, Vector::new(20.0, 20.0), 5.0).unwrap());
    let line = registry.spawn(Line::new_static(&mut world, Vector::new(0.0, 0.0), Vector::new(5.0, 5.0)).unwrap());
    registry.insert(Circle::new_static(&mut world, Vector::new(40.0, 40.0), 5.0).unwrap());
    registry.add_many([circle, line, circle]);

    let mut list = DrawList::new();
    registry.draw_all(&world, &mut list);
    assert_eq!(list.len(), 2);
    assert_eq!(registry.owned_count(), 3);
}
