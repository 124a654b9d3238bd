use physics_sandbox::{
    PhysicsWorld, SimulationConfig, BodyDesc, Color, Material, RecordingSurface, RenderSurface,
    bodies::{BodyFlags, CIRCLE_MOMENT, DEFAULT_MASS},
    core::{BoundaryManager, WorldEvent},
    error::SandboxError,
    math::{moment_for_box, Aabb, Point2, Vector2},
    render::{ProxyTable, RegionDesc, VisualProxy},
    shapes::{ShapeDesc, ShapeKind, BOUNDARY_THICKNESS},
};
use approx::assert_relative_eq;

fn area(x: f32, y: f32, w: f32, h: f32) -> Aabb {
    Aabb::from_origin_extent(Point2::new(x, y), Vector2::new(w, h))
}

fn add_circle(world: &mut PhysicsWorld, x: f32, y: f32, radius: f32) -> physics_sandbox::BodyHandle {
    let (body, _) = world.add_entity(
        BodyDesc::dynamic(DEFAULT_MASS, CIRCLE_MOMENT, Point2::new(x, y)),
        ShapeDesc::circle(radius, Material::circle()),
        BodyFlags::DYNAMIC | BodyFlags::SYNCED,
    );
    body
}

fn assert_walls_match(world: &PhysicsWorld, bounds: &Aabb) {
    let segments = world.boundary().segments();
    let expected = BoundaryManager::wall_endpoints(bounds);

    assert_eq!(segments.len(), 4);
    for (segment, (a, b)) in segments.iter().zip(expected.iter()) {
        assert_eq!(segment.a, *a);
        assert_eq!(segment.b, *b);
        assert_eq!(segment.radius, BOUNDARY_THICKNESS);
        assert!(world.contains_shape(segment.handle));

        let record = world.registry().get_shape(segment.handle).unwrap();
        assert_eq!(record.body, world.static_body());
        assert_eq!(record.desc.elasticity(), 0.6);
        match record.desc.kind {
            ShapeKind::Segment { a: ra, b: rb, radius } => {
                assert_eq!(ra, *a);
                assert_eq!(rb, *b);
                assert_eq!(radius, 10.0);
            }
            other => panic!("boundary shape is a {}", other.name()),
        }
    }
}

#[test]
fn test_world_creation() {
    let bounds = area(0.0, 0.0, 800.0, 600.0);
    let world = PhysicsWorld::new(SimulationConfig::default(), bounds);

    // Only the static anchor and its four walls
    assert_eq!(world.body_count(), 1);
    assert_eq!(world.shape_count(), 4);
    assert_eq!(world.registry().shape_count(), 4);
    assert_eq!(world.registry().shapes_with(BodyFlags::BOUNDARY).count(), 4);
    assert_eq!(world.get_gravity(), Vector2::new(0.0, -100.0));
    assert_eq!(world.boundary().bounds(), bounds);
    assert_eq!(world.get_time(), 0.0);
    assert_walls_match(&world, &bounds);
}

#[test]
fn test_wall_order_is_bottom_right_top_left() {
    let bounds = area(0.0, 0.0, 800.0, 600.0);
    let walls = BoundaryManager::wall_endpoints(&bounds);

    assert_eq!(walls[0], (Point2::new(0.0, 0.0), Point2::new(800.0, 0.0)));
    assert_eq!(walls[1], (Point2::new(800.0, 0.0), Point2::new(800.0, 600.0)));
    assert_eq!(walls[2], (Point2::new(800.0, 600.0), Point2::new(0.0, 600.0)));
    assert_eq!(walls[3], (Point2::new(0.0, 600.0), Point2::new(0.0, 0.0)));
}

#[test]
fn test_boundary_invariant_across_resizes() {
    let mut world = PhysicsWorld::new(SimulationConfig::default(), area(0.0, 0.0, 800.0, 600.0));
    let resizes = [
        area(0.0, 0.0, 1024.0, 768.0),
        area(50.0, 25.0, 640.0, 480.0),
        area(-200.0, -100.0, 300.0, 900.0),
        area(50.0, 25.0, 640.0, 480.0),
        area(0.0, 0.0, 1.0, 1.0),
    ];

    for bounds in resizes {
        let old_walls: Vec<_> = world.boundary().segments().iter().map(|s| s.handle).collect();

        world.rebuild_boundary(bounds);

        assert_walls_match(&world, &bounds);
        assert_eq!(world.boundary().bounds(), bounds);
        // No stale walls left behind
        assert_eq!(world.shape_count(), 4);
        assert_eq!(world.registry().shape_count(), 4);
        assert!(world
            .registry()
            .shapes_with(BodyFlags::BOUNDARY)
            .all(|(shape, _)| world.boundary().contains(shape)));
        for old in old_walls {
            assert!(!world.contains_shape(old));
            assert!(!world.registry().contains_shape(old));
        }
    }

    assert_eq!(world.boundary().rebuild_count(), resizes.len() as u64);
}

#[test]
fn test_rebuild_leaves_dynamic_bodies_alone() {
    let mut world = PhysicsWorld::new(SimulationConfig::default(), area(0.0, 0.0, 800.0, 600.0));
    let ball = add_circle(&mut world, 300.0, 300.0, 20.0);
    for _ in 0..5 {
        world.step(1.0 / 30.0);
    }
    let before = world.body_state(ball).unwrap();

    world.rebuild_boundary(area(0.0, 0.0, 1200.0, 900.0));

    let after = world.body_state(ball).unwrap();
    assert_eq!(before, after);
    assert!(world.registry().contains_body(ball));
    assert_eq!(world.shape_count(), 5);
}

#[test]
fn test_dynamic_body_mass() {
    let mut world = PhysicsWorld::new(SimulationConfig::default(), area(0.0, 0.0, 800.0, 600.0));
    let moment = moment_for_box(DEFAULT_MASS, 200.0, 100.0);
    let (body, _) = world.add_entity(
        BodyDesc::dynamic(DEFAULT_MASS, moment, Point2::new(400.0, 300.0)),
        ShapeDesc::cuboid(200.0, 100.0, Material::dead()),
        BodyFlags::DYNAMIC,
    );

    world.step(1.0 / 30.0);

    assert_relative_eq!(world.body_mass(body).unwrap(), 100.0, max_relative = 1.0e-4);
    let record = world.registry().get_body(body).unwrap();
    assert_relative_eq!(record.desc.moment, 416_666.66, max_relative = 1.0e-5);
}

#[test]
fn test_point_query() {
    let mut world = PhysicsWorld::new(SimulationConfig::default(), area(-100.0, -100.0, 1000.0, 900.0));
    let ball = add_circle(&mut world, 450.0, 600.0, 50.0);

    let hit = world.point_query(Point2::new(450.0, 600.0)).expect("circle should be hit");
    assert_eq!(world.registry().get_shape(hit).unwrap().body, ball);

    let edge = world.point_query(Point2::new(495.0, 600.0));
    assert_eq!(edge, Some(hit));

    assert_eq!(world.point_query(Point2::new(0.0, 0.0)), None);
    assert_eq!(world.point_query(Point2::new(520.0, 600.0)), None);
}

#[test]
fn test_point_query_finds_walls() {
    let world = PhysicsWorld::new(SimulationConfig::default(), area(0.0, 0.0, 800.0, 600.0));

    let hit = world.point_query(Point2::new(400.0, 5.0)).expect("bottom wall should be hit");
    assert_eq!(hit, world.boundary().segments()[0].handle);
}

#[test]
fn test_gravity_and_containment() {
    let mut world = PhysicsWorld::new(SimulationConfig::default(), area(0.0, 0.0, 800.0, 720.0));
    let ball = add_circle(&mut world, 100.0, 600.0, 50.0);
    let dt = 1.0 / 30.0;

    // 3 simulated seconds
    for _ in 0..90 {
        world.step(dt);
    }
    let falling = world.body_state(ball).unwrap();
    assert!(falling.position.y < 600.0);
    assert_relative_eq!(world.get_time(), 3.0, max_relative = 1.0e-3);

    let mut lowest = falling.position.y;
    for _ in 0..3510 {
        world.step(dt);
        lowest = lowest.min(world.body_state(ball).unwrap().position.y);
    }

    let resting = world.body_state(ball).unwrap();
    // Bottom wall surface sits at y = 10, so the centre rests near 60
    assert!(lowest > 40.0, "circle sank to {}", lowest);
    assert!((resting.position.y - 60.0).abs() < 5.0, "circle rests at {}", resting.position.y);
    assert!(resting.speed() < 1.0, "circle still moving at {}", resting.speed());
    assert!((resting.position.x - 100.0).abs() < 1.0);
}

#[test]
fn test_remove_entity() {
    let mut world = PhysicsWorld::new(SimulationConfig::default(), area(0.0, 0.0, 800.0, 600.0));
    let ball = add_circle(&mut world, 200.0, 200.0, 10.0);
    assert_eq!(world.body_count(), 2);
    assert_eq!(world.shape_count(), 5);

    let record = world.remove_entity(ball).unwrap();
    assert!(record.flags.contains(BodyFlags::DYNAMIC));
    assert_eq!(world.body_count(), 1);
    assert_eq!(world.shape_count(), 4);
    assert!(world.body_state(ball).is_none());

    assert!(matches!(world.remove_entity(ball), Err(SandboxError::ResourceNotFound(_))));
    let anchor = world.static_body();
    assert!(matches!(world.remove_entity(anchor), Err(SandboxError::InvalidParameter(_))));
}

#[test]
fn test_world_events() {
    let mut world = PhysicsWorld::new(SimulationConfig::default(), area(0.0, 0.0, 800.0, 600.0));
    let ball = add_circle(&mut world, 200.0, 200.0, 10.0);
    let bounds = area(0.0, 0.0, 400.0, 400.0);
    world.rebuild_boundary(bounds);
    world.remove_entity(ball).unwrap();

    assert_eq!(world.get_events().events_for_body(ball).len(), 2);
    assert_eq!(world.get_events().len(), 3);

    let events = world.drain_events();
    assert_eq!(events, vec![
        WorldEvent::EntityAdded { body: ball, flags: BodyFlags::DYNAMIC | BodyFlags::SYNCED },
        WorldEvent::BoundaryRebuilt { bounds },
        WorldEvent::EntityRemoved { body: ball },
    ]);
    assert!(world.get_events().is_empty());
}

#[test]
fn test_static_body_does_not_move() {
    let mut world = PhysicsWorld::new(SimulationConfig::default(), area(0.0, 0.0, 800.0, 600.0));
    let (platform, _) = world.add_entity(
        BodyDesc::fixed(Point2::new(400.0, 100.0)),
        ShapeDesc::cuboid(200.0, 100.0, Material::dead()),
        BodyFlags::STATIC,
    );

    for _ in 0..30 {
        world.step(1.0 / 30.0);
    }

    let state = world.body_state(platform).unwrap();
    assert_eq!(state.position, Point2::new(400.0, 100.0));
    assert_eq!(state.rotation, 0.0);
    assert_eq!(world.step_count(), 30);
}

#[test]
fn test_event_queue_pops_oldest_first() {
    let mut world = PhysicsWorld::new(SimulationConfig::default(), area(0.0, 0.0, 800.0, 600.0));
    let ball = add_circle(&mut world, 200.0, 200.0, 10.0);
    world.remove_entity(ball).unwrap();

    let mut events = physics_sandbox::core::EventQueue::new();
    for event in world.drain_events() {
        events.push(event);
    }

    assert!(matches!(events.next_event(), Some(WorldEvent::EntityAdded { body, .. }) if body == ball));
    assert_eq!(events.next_event(), Some(WorldEvent::EntityRemoved { body: ball }));
    assert_eq!(events.next_event(), None);
}

#[test]
fn test_dead_box_does_not_bounce() {
    let mut world = PhysicsWorld::new(SimulationConfig::default(), area(0.0, 0.0, 800.0, 720.0));
    let (crate_box, _) = world.add_entity(
        BodyDesc::dynamic(DEFAULT_MASS, moment_for_box(DEFAULT_MASS, 100.0, 50.0), Point2::new(400.0, 400.0)),
        ShapeDesc::cuboid(100.0, 50.0, Material::dead()),
        BodyFlags::DYNAMIC,
    );

    let mut impact_speed: f32 = 0.0;
    let mut rebound: f32 = 0.0;
    for _ in 0..300 {
        world.step(1.0 / 30.0);
        let velocity = world.body_state(crate_box).unwrap().velocity;
        impact_speed = impact_speed.max(-velocity.y);
        rebound = rebound.max(velocity.y);
    }

    // Elasticity 0 against the 0.6 wall combines to 0
    assert!(impact_speed > 200.0, "box hit the wall at only {}", impact_speed);
    assert!(rebound < 10.0, "elasticity-0 box rebounded at {}", rebound);

    let resting = world.body_state(crate_box).unwrap();
    assert!((resting.position.y - 35.0).abs() < 3.0, "box rests at {}", resting.position.y);
}

#[test]
#[should_panic(expected = "outlived its body")]
fn test_sync_panics_when_body_is_gone() {
    let mut world = PhysicsWorld::new(SimulationConfig::default(), area(0.0, 0.0, 800.0, 600.0));
    let mut surface = RecordingSurface::new();
    let mut proxies = ProxyTable::new();

    let ball = add_circle(&mut world, 200.0, 200.0, 10.0);
    let region = surface.create_region(RegionDesc::new(
        Point2::new(190.0, 190.0),
        Vector2::new(20.0, 20.0),
        Color::WHITE,
    ));
    proxies.insert(ball, VisualProxy::Circle { radius: 10.0, color: Color::WHITE, region });
    assert_eq!(proxies.sync(&world, &mut surface), 1);

    world.remove_entity(ball).unwrap();
    proxies.sync(&world, &mut surface);
}
