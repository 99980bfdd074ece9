use crate::common::{DomainError, DomainResult};
use crate::domains::roadmap::geometry::{Obstacle, Point};
use ordered_float::OrderedFloat;
use petgraph::graph::{Graph, NodeIndex};
use petgraph::Undirected;
use std::collections::HashMap;

/// The roadmap graph: sampled collision-free vertices, undirected edges
/// weighted by Euclidean distance.
pub type RoadmapGraph = Graph<Point, f64, Undirected>;

/// Mission endpoints, resolved to roadmap vertices.
#[derive(Debug, Clone, Copy)]
pub struct Mission {
    pub start: NodeIndex,
    pub goal: NodeIndex,
}

/// Outcome of submitting a candidate vertex. A structural duplicate is an
/// expected sampling result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexOutcome {
    Accepted(NodeIndex),
    Duplicate(NodeIndex),
    Blocked,
}

impl VertexOutcome {
    pub fn node(&self) -> Option<NodeIndex> {
        match self {
            VertexOutcome::Accepted(n) | VertexOutcome::Duplicate(n) => Some(*n),
            VertexOutcome::Blocked => None,
        }
    }
}

/// Bounded planar workspace: the obstacle set, the roadmap built inside it,
/// and the mission endpoints. Obstacles and vertices are append-only; every
/// mutation is a no-op when rejected. A planning episode starts from a fresh
/// `World`.
#[derive(Debug, Clone)]
pub struct World {
    pub width: f64,
    pub height: f64,
    obstacles: Vec<Obstacle>,
    graph: RoadmapGraph,
    vertex_index: HashMap<(OrderedFloat<f64>, OrderedFloat<f64>), NodeIndex>,
    mission: Option<Mission>,
}

impl World {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            obstacles: Vec::new(),
            graph: Graph::new_undirected(),
            vertex_index: HashMap::new(),
            mission: None,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn graph(&self) -> &RoadmapGraph {
        &self.graph
    }

    pub fn mission(&self) -> Option<Mission> {
        self.mission
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn point_of(&self, node: NodeIndex) -> Point {
        self.graph[node]
    }

    pub fn contains_vertex(&self, p: &Point) -> bool {
        self.vertex_index.contains_key(&p.key())
    }

    /// Validity oracle: true iff the point lies outside every obstacle.
    pub fn is_free(&self, p: &Point) -> bool {
        !self.obstacles.iter().any(|o| o.contains(p))
    }

    /// Validity oracle: true iff the segment p1→p2 clears every obstacle.
    pub fn is_clear(&self, p1: &Point, p2: &Point) -> bool {
        !self.obstacles.iter().any(|o| o.blocks_segment(p1, p2))
    }

    /// Place an obstacle, checked against all earlier placements. Overlap
    /// (including edge contact) rejects the placement and leaves the world
    /// untouched.
    pub fn place_obstacle(&mut self, obstacle: Obstacle) -> DomainResult<()> {
        if self.obstacles.iter().any(|o| o.overlaps(&obstacle)) {
            return Err(DomainError::ObstacleOverlap);
        }
        self.obstacles.push(obstacle);
        Ok(())
    }

    /// Record the mission endpoints and insert both as vertices. Both points
    /// are validated before either is inserted, so a rejected mission leaves
    /// the vertex set unchanged.
    pub fn set_mission(&mut self, start: Point, goal: Point) -> DomainResult<Mission> {
        for p in [&start, &goal] {
            if !self.is_free(p) {
                return Err(DomainError::EndpointBlocked { x: p.x, y: p.y });
            }
        }
        let start_node = match self.try_add_vertex(start) {
            VertexOutcome::Accepted(n) | VertexOutcome::Duplicate(n) => n,
            VertexOutcome::Blocked => unreachable!("start validated above"),
        };
        let goal_node = match self.try_add_vertex(goal) {
            VertexOutcome::Accepted(n) | VertexOutcome::Duplicate(n) => n,
            VertexOutcome::Blocked => unreachable!("goal validated above"),
        };
        let mission = Mission {
            start: start_node,
            goal: goal_node,
        };
        self.mission = Some(mission);
        Ok(mission)
    }

    /// Submit a candidate vertex. Structural duplicates and points inside an
    /// obstacle are rejected without mutating the graph.
    pub fn try_add_vertex(&mut self, p: Point) -> VertexOutcome {
        if let Some(&existing) = self.vertex_index.get(&p.key()) {
            return VertexOutcome::Duplicate(existing);
        }
        if !self.is_free(&p) {
            return VertexOutcome::Blocked;
        }
        let node = self.graph.add_node(p);
        self.vertex_index.insert(p.key(), node);
        VertexOutcome::Accepted(node)
    }

    /// Attempt an edge between two accepted vertices. Self-loops, duplicate
    /// edges, and obstacle-blocked segments are rejected. On acceptance the
    /// edge is registered in both endpoints' adjacency with its Euclidean
    /// length as weight.
    pub fn try_add_edge(&mut self, a: NodeIndex, b: NodeIndex) -> Option<f64> {
        if a == b || self.graph.find_edge(a, b).is_some() {
            return None;
        }
        let (pa, pb) = (self.graph[a], self.graph[b]);
        if !self.is_clear(&pa, &pb) {
            return None;
        }
        let weight = pa.distance_to(&pb);
        self.graph.add_edge(a, b, weight);
        Some(weight)
    }
}
