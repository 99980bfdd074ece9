use crate::domains::roadmap::geometry::Point;
use crate::domains::roadmap::search::SearchMode;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub world: WorldConfig,
    #[serde(default)]
    pub obstacles: Vec<ObstacleConfig>,
    pub mission: MissionConfig,
    pub sampling: SamplingConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleConfig {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionConfig {
    pub start: [f64; 2],
    pub goal: [f64; 2],
}

impl MissionConfig {
    pub fn start_point(&self) -> Point {
        Point::new(self.start[0], self.start[1])
    }

    pub fn goal_point(&self) -> Point {
        Point::new(self.goal[0], self.goal[1])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub count: usize,
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub mode: SearchMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        // Demo scenario: 50 x 30 workspace with two boxes between the
        // mission endpoints.
        Self {
            world: WorldConfig {
                width: 50.0,
                height: 30.0,
            },
            obstacles: vec![
                ObstacleConfig {
                    left: 10.0,
                    right: 20.0,
                    bottom: 0.0,
                    top: 20.0,
                },
                ObstacleConfig {
                    left: 30.0,
                    right: 40.0,
                    bottom: 10.0,
                    top: 30.0,
                },
            ],
            mission: MissionConfig {
                start: [1.0, 1.0],
                goal: [49.0, 29.0],
            },
            sampling: SamplingConfig {
                count: 100,
                seed: 42,
            },
            search: SearchConfig {
                mode: SearchMode::Weighted,
            },
            logging: LoggingConfig {
                file: Some("prm-planner.log".to_string()),
            },
        }
    }
}
