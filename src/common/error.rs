use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid obstacle: {reason}")]
    InvalidObstacle { reason: String },

    #[error("Obstacle overlaps an already placed obstacle")]
    ObstacleOverlap,

    #[error("Mission endpoint ({x}, {y}) lies inside an obstacle")]
    EndpointBlocked { x: f64, y: f64 },

    #[error("Invalid command: {reason}")]
    InvalidCommand { reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;
