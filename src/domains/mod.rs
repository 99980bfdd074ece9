pub mod logger;
pub mod roadmap;

pub use logger::*;
pub use roadmap::*;
