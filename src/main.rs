use std::error::Error;

use prm_planner::adapters::outbound::{init_combined_logger, init_console_logger, LoggingObserver};
use prm_planner::application::PlanningService;
use prm_planner::domains::roadmap::geometry::AxisAlignedBox;
use prm_planner::domains::roadmap::search::SearchResult;
use prm_planner::Config;

fn main() -> Result<(), Box<dyn Error>> {
    let config = match Config::from_file("config.toml") {
        Ok(c) => c,
        Err(_) => Config::default(),
    };

    let logger = match &config.logging.file {
        Some(path) => init_combined_logger(path),
        None => init_console_logger(),
    };

    logger.info("Starting PRM planner");

    let mut service = PlanningService::new(logger.clone());
    service.subscribe(LoggingObserver::new(logger.clone()));

    service.configure_world(config.world.width, config.world.height)?;
    for o in &config.obstacles {
        service.place_obstacle(AxisAlignedBox::new(o.left, o.right, o.bottom, o.top)?)?;
    }
    service.set_mission(config.mission.start_point(), config.mission.goal_point())?;

    service.sample(config.sampling.count, config.sampling.seed)?;
    service.connect()?;
    if let Some(world) = service.world() {
        logger.info(&format!(
            "roadmap built: {} vertices, {} edges",
            world.vertex_count(),
            world.edge_count()
        ));
    }

    match service.search(config.search.mode)? {
        SearchResult::Found { waypoints, cost } => {
            logger.info(&format!("path length {:.4}", cost));
            for p in waypoints {
                logger.info(&format!("  ({:.3}, {:.3})", p.x, p.y));
            }
        }
        SearchResult::NotFound => {
            logger.warn("no path found; try a higher sample count");
        }
    }

    Ok(())
}
