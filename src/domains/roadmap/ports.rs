use crate::domains::roadmap::events::RoadmapEvent;

/// Outbound port for collaborators that want to watch a planning run
/// (visualization, recorders). Implementations must not fail; a planning
/// run never depends on its observers.
pub trait PlanningObserver: Send + Sync {
    fn notify(&self, event: &RoadmapEvent);
}
