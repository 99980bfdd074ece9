use crate::common::{ApplicationResult, DomainError};
use crate::domains::logger::DynLogger;
use crate::domains::roadmap::builder::RoadmapBuilder;
use crate::domains::roadmap::events::RoadmapEvent;
use crate::domains::roadmap::geometry::{AxisAlignedBox, Point};
use crate::domains::roadmap::ports::PlanningObserver;
use crate::domains::roadmap::search::{
    path_length, shortest_distance_path, shortest_hop_path, SearchMode, SearchResult,
};
use crate::domains::roadmap::world::World;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Inbound application surface for one planning episode: configure the
/// world, place obstacles, set the mission, sample, connect, search.
/// Every accepted step is broadcast to subscribed observers; a batch caller
/// may subscribe none and just read the returned values.
pub struct PlanningService {
    planner_id: String,
    logger: DynLogger,
    observers: Vec<Arc<dyn PlanningObserver>>,
    world: Option<World>,
    last_search: Option<SearchResult>,
}

impl PlanningService {
    pub fn new(logger: DynLogger) -> Self {
        Self {
            planner_id: Uuid::new_v4().to_string(),
            logger,
            observers: Vec::new(),
            world: None,
            last_search: None,
        }
    }

    pub fn planner_id(&self) -> &str {
        &self.planner_id
    }

    pub fn subscribe(&mut self, observer: Arc<dyn PlanningObserver>) {
        self.observers.push(observer);
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    /// Result of the most recent `search` call, or `None` when no search has
    /// run in this episode.
    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }

    /// Start a fresh planning episode over a `width` x `height` workspace.
    /// Discards any previously built roadmap and search result.
    pub fn configure_world(&mut self, width: f64, height: f64) -> ApplicationResult<()> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(DomainError::InvalidCommand {
                reason: format!("workspace extent {} x {} is not positive", width, height),
            }
            .into());
        }
        self.world = Some(World::new(width, height));
        self.last_search = None;
        self.emit(RoadmapEvent::WorldConfigured {
            planner_id: self.planner_id.clone(),
            width,
            height,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    pub fn place_obstacle(&mut self, obstacle: AxisAlignedBox) -> ApplicationResult<()> {
        let world = self.world_mut()?;
        if let Err(e) = world.place_obstacle(obstacle.into()) {
            self.logger.warn(&format!("obstacle rejected: {}", e));
            return Err(e.into());
        }
        self.emit(RoadmapEvent::ObstaclePlaced {
            planner_id: self.planner_id.clone(),
            obstacle: obstacle.into(),
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Record mission endpoints; both become roadmap vertices. Fails without
    /// side effects if either endpoint sits inside an obstacle.
    pub fn set_mission(&mut self, start: Point, goal: Point) -> ApplicationResult<()> {
        let world = self.world_mut()?;
        let start_is_new = !world.contains_vertex(&start);
        let goal_is_new = start != goal && !world.contains_vertex(&goal);
        if let Err(e) = world.set_mission(start, goal) {
            self.logger.warn(&format!("mission rejected: {}", e));
            return Err(e.into());
        }
        self.emit(RoadmapEvent::MissionSet {
            planner_id: self.planner_id.clone(),
            start,
            goal,
            timestamp: Utc::now(),
        });
        if start_is_new {
            self.emit_vertex(start);
        }
        if goal_is_new {
            self.emit_vertex(goal);
        }
        Ok(())
    }

    /// Sampling phase: submit `count` uniform random candidates drawn from a
    /// generator seeded with `seed`. Returns the number of vertices actually
    /// accepted, which may be lower than `count`.
    pub fn sample(&mut self, count: usize, seed: u64) -> ApplicationResult<usize> {
        let world = self.world_mut()?;
        let mut builder = RoadmapBuilder::with_seed(seed);
        let accepted = builder.sample(world, count);
        for vertex in &accepted {
            self.emit_vertex(*vertex);
        }
        self.logger.info(&format!(
            "sampling accepted {} of {} candidates",
            accepted.len(),
            count
        ));
        Ok(accepted.len())
    }

    /// Connection phase over all current vertices. Returns the number of
    /// edges accepted.
    pub fn connect(&mut self) -> ApplicationResult<usize> {
        let world = self.world_mut()?;
        let edges = RoadmapBuilder::connect(world);
        for (from, to, weight) in &edges {
            self.emit(RoadmapEvent::EdgeAccepted {
                planner_id: self.planner_id.clone(),
                from: *from,
                to: *to,
                weight: *weight,
                timestamp: Utc::now(),
            });
        }
        self.logger
            .info(&format!("connection accepted {} edges", edges.len()));
        Ok(edges.len())
    }

    /// Search the frozen roadmap for a mission path. `NotFound` is a normal
    /// outcome, not an error; it is also retained in `last_search`.
    pub fn search(&mut self, mode: SearchMode) -> ApplicationResult<SearchResult> {
        let world = self.world_ref()?;
        let mission = world.mission().ok_or(DomainError::InvalidCommand {
            reason: "no mission has been set".to_string(),
        })?;
        let result = match mode {
            SearchMode::Unweighted => shortest_hop_path(world.graph(), mission.start, mission.goal)
                .map(|waypoints| {
                    let cost = path_length(&waypoints);
                    SearchResult::Found { waypoints, cost }
                }),
            SearchMode::Weighted => {
                shortest_distance_path(world.graph(), mission.start, mission.goal)
                    .map(|(waypoints, cost)| SearchResult::Found { waypoints, cost })
            }
        }
        .unwrap_or(SearchResult::NotFound);

        match &result {
            SearchResult::Found { waypoints, cost } => self.emit(RoadmapEvent::PathFound {
                planner_id: self.planner_id.clone(),
                waypoints: waypoints.clone(),
                cost: *cost,
                timestamp: Utc::now(),
            }),
            SearchResult::NotFound => self.emit(RoadmapEvent::PathNotFound {
                planner_id: self.planner_id.clone(),
                timestamp: Utc::now(),
            }),
        }
        self.last_search = Some(result.clone());
        Ok(result)
    }

    fn world_mut(&mut self) -> Result<&mut World, DomainError> {
        self.world.as_mut().ok_or(DomainError::InvalidCommand {
            reason: "world is not configured".to_string(),
        })
    }

    fn world_ref(&self) -> Result<&World, DomainError> {
        self.world.as_ref().ok_or(DomainError::InvalidCommand {
            reason: "world is not configured".to_string(),
        })
    }

    fn emit_vertex(&self, vertex: Point) {
        self.emit(RoadmapEvent::VertexAccepted {
            planner_id: self.planner_id.clone(),
            vertex,
            timestamp: Utc::now(),
        });
    }

    fn emit(&self, event: RoadmapEvent) {
        for observer in &self.observers {
            observer.notify(&event);
        }
    }
}
