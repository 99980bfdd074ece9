use prm_planner::common::DomainError;
use prm_planner::domains::roadmap::geometry::{AxisAlignedBox, Point};
use prm_planner::domains::roadmap::world::{VertexOutcome, World};

fn boxed(left: f64, right: f64, bottom: f64, top: f64) -> AxisAlignedBox {
    AxisAlignedBox::new(left, right, bottom, top).unwrap()
}

#[test]
fn test_place_obstacle_accepts_disjoint_boxes() {
    let mut world = World::new(50.0, 30.0);
    world.place_obstacle(boxed(10.0, 20.0, 0.0, 20.0).into()).unwrap();
    world.place_obstacle(boxed(30.0, 40.0, 10.0, 30.0).into()).unwrap();

    let obstacles = world.obstacles();
    assert_eq!(obstacles.len(), 2);
    // placement invariant: accepted obstacles are pairwise non-overlapping
    for (i, a) in obstacles.iter().enumerate() {
        for b in &obstacles[i + 1..] {
            assert!(!a.overlaps(b));
        }
    }
}

#[test]
fn test_place_obstacle_rejects_overlap_without_mutation() {
    let mut world = World::new(50.0, 30.0);
    world.place_obstacle(boxed(10.0, 20.0, 0.0, 20.0).into()).unwrap();

    let result = world.place_obstacle(boxed(15.0, 25.0, 5.0, 25.0).into());
    assert!(matches!(result, Err(DomainError::ObstacleOverlap)));
    assert_eq!(world.obstacles().len(), 1);
}

#[test]
fn test_place_obstacle_rejects_edge_contact() {
    let mut world = World::new(50.0, 30.0);
    world.place_obstacle(boxed(10.0, 20.0, 0.0, 20.0).into()).unwrap();
    // shares the x = 20 edge; conservative overlap says no
    let result = world.place_obstacle(boxed(20.0, 25.0, 0.0, 20.0).into());
    assert!(result.is_err());
    assert_eq!(world.obstacles().len(), 1);
}

#[test]
fn test_try_add_vertex_outcomes() {
    let mut world = World::new(50.0, 30.0);
    world.place_obstacle(boxed(10.0, 20.0, 0.0, 20.0).into()).unwrap();

    let accepted = world.try_add_vertex(Point::new(5.0, 5.0));
    assert!(matches!(accepted, VertexOutcome::Accepted(_)));

    // inside an obstacle
    assert_eq!(world.try_add_vertex(Point::new(15.0, 10.0)), VertexOutcome::Blocked);
    // flush on the obstacle boundary counts as inside
    assert_eq!(world.try_add_vertex(Point::new(10.0, 5.0)), VertexOutcome::Blocked);

    assert_eq!(world.vertex_count(), 1);
}

#[test]
fn test_duplicate_vertex_is_idempotent() {
    let mut world = World::new(50.0, 30.0);
    let first = world.try_add_vertex(Point::new(5.0, 5.0));
    let node = first.node().unwrap();

    for _ in 0..3 {
        let again = world.try_add_vertex(Point::new(5.0, 5.0));
        assert_eq!(again, VertexOutcome::Duplicate(node));
        assert_eq!(world.vertex_count(), 1);
    }
}

#[test]
fn test_set_mission_registers_both_endpoints() {
    let mut world = World::new(50.0, 30.0);
    let mission = world
        .set_mission(Point::new(1.0, 1.0), Point::new(49.0, 29.0))
        .unwrap();

    assert_eq!(world.vertex_count(), 2);
    assert_eq!(world.point_of(mission.start), Point::new(1.0, 1.0));
    assert_eq!(world.point_of(mission.goal), Point::new(49.0, 29.0));
    assert!(world.mission().is_some());
}

#[test]
fn test_set_mission_rejects_endpoint_inside_obstacle() {
    let mut world = World::new(50.0, 30.0);
    world.place_obstacle(boxed(10.0, 20.0, 0.0, 20.0).into()).unwrap();

    let result = world.set_mission(Point::new(15.0, 10.0), Point::new(49.0, 29.0));
    assert!(matches!(result, Err(DomainError::EndpointBlocked { .. })));
    // rejection leaves no partial state: neither endpoint was inserted
    assert_eq!(world.vertex_count(), 0);
    assert!(world.mission().is_none());

    // same when only the goal is blocked
    let result = world.set_mission(Point::new(1.0, 1.0), Point::new(12.0, 3.0));
    assert!(result.is_err());
    assert_eq!(world.vertex_count(), 0);
}

#[test]
fn test_set_mission_with_coincident_endpoints() {
    let mut world = World::new(50.0, 30.0);
    let mission = world
        .set_mission(Point::new(5.0, 5.0), Point::new(5.0, 5.0))
        .unwrap();
    assert_eq!(world.vertex_count(), 1);
    assert_eq!(mission.start, mission.goal);
}

#[test]
fn test_try_add_edge_clear_and_blocked() {
    let mut world = World::new(50.0, 30.0);
    world.place_obstacle(boxed(10.0, 20.0, 0.0, 20.0).into()).unwrap();

    let a = world.try_add_vertex(Point::new(5.0, 5.0)).node().unwrap();
    let b = world.try_add_vertex(Point::new(25.0, 5.0)).node().unwrap();
    let c = world.try_add_vertex(Point::new(5.0, 25.0)).node().unwrap();

    // a -- b crosses the obstacle
    assert_eq!(world.try_add_edge(a, b), None);
    assert_eq!(world.edge_count(), 0);

    // a -- c passes beside it
    let weight = world.try_add_edge(a, c).unwrap();
    assert!((weight - 20.0).abs() < 1e-12);
    assert_eq!(world.edge_count(), 1);
}

#[test]
fn test_try_add_edge_rejects_self_loop_and_duplicate() {
    let mut world = World::new(10.0, 10.0);
    let a = world.try_add_vertex(Point::new(1.0, 1.0)).node().unwrap();
    let b = world.try_add_vertex(Point::new(4.0, 5.0)).node().unwrap();

    assert!(world.try_add_edge(a, a).is_none());
    assert!(world.try_add_edge(a, b).is_some());
    assert!(world.try_add_edge(a, b).is_none());
    assert!(world.try_add_edge(b, a).is_none()); // undirected duplicate
    assert_eq!(world.edge_count(), 1);
}

#[test]
fn test_validity_oracles() {
    let mut world = World::new(50.0, 30.0);
    world.place_obstacle(boxed(10.0, 20.0, 0.0, 20.0).into()).unwrap();

    assert!(world.is_free(&Point::new(5.0, 5.0)));
    assert!(!world.is_free(&Point::new(15.0, 5.0)));
    assert!(world.is_clear(&Point::new(5.0, 25.0), &Point::new(25.0, 25.0)));
    assert!(!world.is_clear(&Point::new(5.0, 5.0), &Point::new(25.0, 5.0)));
}
