pub mod builder;
pub mod events;
pub mod geometry;
pub mod ports;
pub mod search;
pub mod world;

pub use builder::*;
pub use events::*;
pub use geometry::*;
pub use ports::*;
pub use search::*;
pub use world::*;
