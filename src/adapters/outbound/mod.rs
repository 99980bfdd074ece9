pub mod console_logger;
pub mod event_recorder;
pub mod file_logger;
pub mod log_observer;
pub mod multi_logger;
pub mod noop_logger;

pub use console_logger::*;
pub use event_recorder::*;
pub use file_logger::*;
pub use log_observer::*;
pub use multi_logger::*;
pub use noop_logger::*;
