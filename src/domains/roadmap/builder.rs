use crate::domains::roadmap::geometry::Point;
use crate::domains::roadmap::world::{VertexOutcome, World};
use petgraph::graph::NodeIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Two-phase roadmap construction: uniform sampling over the workspace,
/// then a brute-force all-pairs connection attempt. Deterministic for a
/// fixed sample count and seed.
pub struct RoadmapBuilder {
    rng: StdRng,
}

impl RoadmapBuilder {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Phase 1: draw `count` candidates uniformly over
    /// [0, width] x [0, height] and submit each to the world. There is no
    /// retry loop; candidates landing inside an obstacle or on an existing
    /// vertex are dropped, so the accepted count may be below `count`.
    pub fn sample(&mut self, world: &mut World, count: usize) -> Vec<Point> {
        let mut accepted = Vec::new();
        for _ in 0..count {
            let candidate = Point::new(
                self.rng.gen_range(0.0..=world.width),
                self.rng.gen_range(0.0..=world.height),
            );
            if let VertexOutcome::Accepted(node) = world.try_add_vertex(candidate) {
                accepted.push(world.point_of(node));
            }
        }
        accepted
    }

    /// Phase 2: try every unordered pair of accepted vertices. Each pair is
    /// tested independently and the clearance test is symmetric, so the
    /// final edge set does not depend on enumeration order. Quadratic in the
    /// vertex count, which is fine at the tens-to-hundreds scale this
    /// planner targets. Needs no random state, so it is callable without a
    /// builder instance.
    pub fn connect(world: &mut World) -> Vec<(Point, Point, f64)> {
        let nodes: Vec<NodeIndex> = world.graph().node_indices().collect();
        let mut edges = Vec::new();
        for (i, &a) in nodes.iter().enumerate() {
            for &b in &nodes[i + 1..] {
                if let Some(weight) = world.try_add_edge(a, b) {
                    edges.push((world.point_of(a), world.point_of(b), weight));
                }
            }
        }
        edges
    }
}
