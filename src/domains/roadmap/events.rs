use crate::common::DomainEvent;
use crate::domains::roadmap::geometry::{Obstacle, Point};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notifications emitted while a roadmap is configured, built, and searched.
/// A visualization collaborator consumes them live; a batch caller is free
/// to ignore them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RoadmapEvent {
    WorldConfigured {
        planner_id: String,
        width: f64,
        height: f64,
        timestamp: DateTime<Utc>,
    },
    ObstaclePlaced {
        planner_id: String,
        obstacle: Obstacle,
        timestamp: DateTime<Utc>,
    },
    MissionSet {
        planner_id: String,
        start: Point,
        goal: Point,
        timestamp: DateTime<Utc>,
    },
    VertexAccepted {
        planner_id: String,
        vertex: Point,
        timestamp: DateTime<Utc>,
    },
    EdgeAccepted {
        planner_id: String,
        from: Point,
        to: Point,
        weight: f64,
        timestamp: DateTime<Utc>,
    },
    PathFound {
        planner_id: String,
        waypoints: Vec<Point>,
        cost: f64,
        timestamp: DateTime<Utc>,
    },
    PathNotFound {
        planner_id: String,
        timestamp: DateTime<Utc>,
    },
}

impl DomainEvent for RoadmapEvent {
    fn event_type(&self) -> &'static str {
        match self {
            RoadmapEvent::WorldConfigured { .. } => "WorldConfigured",
            RoadmapEvent::ObstaclePlaced { .. } => "ObstaclePlaced",
            RoadmapEvent::MissionSet { .. } => "MissionSet",
            RoadmapEvent::VertexAccepted { .. } => "VertexAccepted",
            RoadmapEvent::EdgeAccepted { .. } => "EdgeAccepted",
            RoadmapEvent::PathFound { .. } => "PathFound",
            RoadmapEvent::PathNotFound { .. } => "PathNotFound",
        }
    }

    fn aggregate_id(&self) -> &str {
        match self {
            RoadmapEvent::WorldConfigured { planner_id, .. } => planner_id,
            RoadmapEvent::ObstaclePlaced { planner_id, .. } => planner_id,
            RoadmapEvent::MissionSet { planner_id, .. } => planner_id,
            RoadmapEvent::VertexAccepted { planner_id, .. } => planner_id,
            RoadmapEvent::EdgeAccepted { planner_id, .. } => planner_id,
            RoadmapEvent::PathFound { planner_id, .. } => planner_id,
            RoadmapEvent::PathNotFound { planner_id, .. } => planner_id,
        }
    }

    fn event_version(&self) -> u64 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            RoadmapEvent::WorldConfigured { timestamp, .. } => *timestamp,
            RoadmapEvent::ObstaclePlaced { timestamp, .. } => *timestamp,
            RoadmapEvent::MissionSet { timestamp, .. } => *timestamp,
            RoadmapEvent::VertexAccepted { timestamp, .. } => *timestamp,
            RoadmapEvent::EdgeAccepted { timestamp, .. } => *timestamp,
            RoadmapEvent::PathFound { timestamp, .. } => *timestamp,
            RoadmapEvent::PathNotFound { timestamp, .. } => *timestamp,
        }
    }
}
