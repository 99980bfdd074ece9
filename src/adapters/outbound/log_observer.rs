use crate::domains::logger::DynLogger;
use crate::domains::roadmap::events::RoadmapEvent;
use crate::domains::roadmap::ports::PlanningObserver;
use std::sync::Arc;

/// Observer that renders planning notifications onto a DomainLogger, the
/// default operator-facing view for batch runs.
pub struct LoggingObserver {
    logger: DynLogger,
}

impl LoggingObserver {
    pub fn new(logger: DynLogger) -> Arc<Self> {
        Arc::new(Self { logger })
    }
}

impl PlanningObserver for LoggingObserver {
    fn notify(&self, event: &RoadmapEvent) {
        match event {
            RoadmapEvent::WorldConfigured { width, height, .. } => {
                self.logger
                    .info(&format!("world configured: {} x {}", width, height));
            }
            RoadmapEvent::ObstaclePlaced { obstacle, .. } => {
                self.logger.info(&format!("obstacle placed: {:?}", obstacle));
            }
            RoadmapEvent::MissionSet { start, goal, .. } => {
                self.logger.info(&format!(
                    "mission set: ({}, {}) -> ({}, {})",
                    start.x, start.y, goal.x, goal.y
                ));
            }
            RoadmapEvent::VertexAccepted { vertex, .. } => {
                self.logger
                    .info(&format!("vertex accepted: ({}, {})", vertex.x, vertex.y));
            }
            RoadmapEvent::EdgeAccepted {
                from, to, weight, ..
            } => {
                self.logger.info(&format!(
                    "edge accepted: ({}, {}) -- ({}, {}), weight {:.4}",
                    from.x, from.y, to.x, to.y, weight
                ));
            }
            RoadmapEvent::PathFound {
                waypoints, cost, ..
            } => {
                self.logger.info(&format!(
                    "path found: {} waypoints, length {:.4}",
                    waypoints.len(),
                    cost
                ));
            }
            RoadmapEvent::PathNotFound { .. } => {
                self.logger.warn("no path between mission endpoints");
            }
        }
    }
}
