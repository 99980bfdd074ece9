use crate::common::EventEnvelope;
use crate::domains::roadmap::events::RoadmapEvent;
use crate::domains::roadmap::ports::PlanningObserver;
use std::sync::{Arc, Mutex};

/// Observer that records every notification it receives. Tests assert on
/// the recorded sequence; a visualization front-end can drain it to replay
/// a run.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<RoadmapEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<RoadmapEvent> {
        self.events.lock().expect("recorder poisoned").clone()
    }

    /// Recorded events wrapped as serialized envelopes, for consumers that
    /// do not link the domain types.
    pub fn envelopes(&self) -> Result<Vec<EventEnvelope>, serde_json::Error> {
        self.events().iter().map(EventEnvelope::new).collect()
    }
}

impl PlanningObserver for RecordingObserver {
    fn notify(&self, event: &RoadmapEvent) {
        self.events
            .lock()
            .expect("recorder poisoned")
            .push(event.clone());
    }
}
