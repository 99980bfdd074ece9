use crate::domains::roadmap::geometry::Point;
use crate::domains::roadmap::world::RoadmapGraph;
use ordered_float::OrderedFloat;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Unweighted,
    Weighted,
}

/// Terminal outcome of a search over a frozen roadmap. `NotFound` is a
/// normal result, distinct from "no search has run yet" (which callers model
/// as an absent `SearchResult`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchResult {
    Found { waypoints: Vec<Point>, cost: f64 },
    NotFound,
}

/// Breadth-first search: minimum hop count. Vertices are marked when
/// enqueued so none is queued twice; the first time the goal is reached its
/// path is hop-optimal.
pub fn shortest_hop_path(
    graph: &RoadmapGraph,
    start: NodeIndex,
    goal: NodeIndex,
) -> Option<Vec<Point>> {
    let mut predecessor: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut queue = VecDeque::new();
    predecessor.insert(start, start);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        if node == goal {
            return Some(reconstruct(graph, &predecessor, start, goal));
        }
        for neighbor in graph.neighbors(node) {
            if !predecessor.contains_key(&neighbor) {
                predecessor.insert(neighbor, node);
                queue.push_back(neighbor);
            }
        }
    }
    None
}

/// Dijkstra search: minimum summed Euclidean distance. The frontier is a
/// binary heap keyed by accumulated distance, with the node index as a
/// deterministic tie-break; each vertex is settled at most once, stale heap
/// entries are skipped.
pub fn shortest_distance_path(
    graph: &RoadmapGraph,
    start: NodeIndex,
    goal: NodeIndex,
) -> Option<(Vec<Point>, f64)> {
    let mut distance: HashMap<NodeIndex, f64> = HashMap::new();
    let mut predecessor: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    distance.insert(start, 0.0);
    frontier.push(Reverse((OrderedFloat(0.0), start)));

    while let Some(Reverse((OrderedFloat(dist), node))) = frontier.pop() {
        if dist > distance[&node] {
            continue; // stale entry; node already settled at a lower distance
        }
        if node == goal {
            let path = reconstruct(graph, &predecessor, start, goal);
            return Some((path, dist));
        }
        for edge in graph.edges(node) {
            let neighbor = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            let next = dist + edge.weight();
            if distance.get(&neighbor).map_or(true, |&d| next < d) {
                distance.insert(neighbor, next);
                predecessor.insert(neighbor, node);
                frontier.push(Reverse((OrderedFloat(next), neighbor)));
            }
        }
    }
    None
}

fn reconstruct(
    graph: &RoadmapGraph,
    predecessor: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    goal: NodeIndex,
) -> Vec<Point> {
    let mut nodes = vec![goal];
    let mut current = goal;
    while current != start {
        current = predecessor[&current];
        nodes.push(current);
    }
    nodes.reverse();
    nodes.into_iter().map(|n| graph[n]).collect()
}

/// Summed Euclidean length of an ordered waypoint sequence.
pub fn path_length(waypoints: &[Point]) -> f64 {
    waypoints
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .sum()
}
