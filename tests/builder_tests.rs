use petgraph::visit::EdgeRef;
use prm_planner::domains::roadmap::builder::RoadmapBuilder;
use prm_planner::domains::roadmap::geometry::{AxisAlignedBox, Point};
use prm_planner::domains::roadmap::world::World;

fn boxed(left: f64, right: f64, bottom: f64, top: f64) -> AxisAlignedBox {
    AxisAlignedBox::new(left, right, bottom, top).unwrap()
}

#[test]
fn test_sampling_stays_in_bounds_and_out_of_obstacles() {
    let mut world = World::new(50.0, 30.0);
    world.place_obstacle(boxed(10.0, 20.0, 0.0, 20.0).into()).unwrap();
    world.place_obstacle(boxed(30.0, 40.0, 10.0, 30.0).into()).unwrap();

    let mut builder = RoadmapBuilder::with_seed(7);
    let accepted = builder.sample(&mut world, 200);

    assert!(accepted.len() <= 200);
    assert_eq!(world.vertex_count(), accepted.len());
    for p in &accepted {
        assert!(p.x >= 0.0 && p.x <= 50.0);
        assert!(p.y >= 0.0 && p.y <= 30.0);
        assert!(world.is_free(p));
    }
}

#[test]
fn test_sampling_is_deterministic_for_a_fixed_seed() {
    let run = |seed: u64| {
        let mut world = World::new(50.0, 30.0);
        world.place_obstacle(boxed(10.0, 20.0, 0.0, 20.0).into()).unwrap();
        let mut builder = RoadmapBuilder::with_seed(seed);
        builder.sample(&mut world, 50)
    };

    assert_eq!(run(42), run(42));
    assert_ne!(run(42), run(43));
}

#[test]
fn test_mission_endpoints_survive_sampling() {
    let mut world = World::new(50.0, 30.0);
    world
        .set_mission(Point::new(1.0, 1.0), Point::new(49.0, 29.0))
        .unwrap();

    let mut builder = RoadmapBuilder::with_seed(3);
    builder.sample(&mut world, 100);

    assert!(world.contains_vertex(&Point::new(1.0, 1.0)));
    assert!(world.contains_vertex(&Point::new(49.0, 29.0)));
}

#[test]
fn test_connect_builds_complete_graph_in_empty_world() {
    let mut world = World::new(10.0, 10.0);
    for (x, y) in [(1.0, 1.0), (2.0, 7.0), (8.0, 3.0), (9.0, 9.0)] {
        world.try_add_vertex(Point::new(x, y));
    }

    let edges = RoadmapBuilder::connect(&mut world);
    assert_eq!(edges.len(), 4 * 3 / 2);
    assert_eq!(world.edge_count(), 6);
}

#[test]
fn test_connect_is_idempotent() {
    let mut world = World::new(10.0, 10.0);
    for (x, y) in [(1.0, 1.0), (2.0, 7.0), (8.0, 3.0)] {
        world.try_add_vertex(Point::new(x, y));
    }

    assert_eq!(RoadmapBuilder::connect(&mut world).len(), 3);
    // every pair already has its edge; a second pass adds nothing
    assert_eq!(RoadmapBuilder::connect(&mut world).len(), 0);
    assert_eq!(world.edge_count(), 3);
}

#[test]
fn test_connect_only_accepts_clear_edges() {
    let mut world = World::new(50.0, 30.0);
    world.place_obstacle(boxed(10.0, 20.0, 0.0, 20.0).into()).unwrap();
    world
        .set_mission(Point::new(1.0, 1.0), Point::new(49.0, 29.0))
        .unwrap();

    let mut builder = RoadmapBuilder::with_seed(11);
    builder.sample(&mut world, 80);
    RoadmapBuilder::connect(&mut world);

    let graph = world.graph();
    for edge in graph.edge_references() {
        let a = graph[edge.source()];
        let b = graph[edge.target()];
        assert!(world.is_clear(&a, &b));
        assert!((edge.weight() - a.distance_to(&b)).abs() < 1e-12);
    }
}
