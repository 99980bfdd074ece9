use crate::domains::logger::DomainLogger;
use std::sync::Arc;

/// Fan-out logger forwarding every message to a list of sinks, so file and
/// console outputs can be combined without changing the DomainLogger trait.
pub struct MultiLogger {
    sinks: Vec<Arc<dyn DomainLogger>>,
}

impl MultiLogger {
    pub fn new(sinks: Vec<Arc<dyn DomainLogger>>) -> Self {
        Self { sinks }
    }
}

impl DomainLogger for MultiLogger {
    fn info(&self, msg: &str) {
        for sink in &self.sinks {
            sink.info(msg);
        }
    }

    fn warn(&self, msg: &str) {
        for sink in &self.sinks {
            sink.warn(msg);
        }
    }

    fn error(&self, msg: &str) {
        for sink in &self.sinks {
            sink.error(msg);
        }
    }
}

/// Combined logger: file logger plus console echo, falling back to console
/// only when the file backend cannot be initialized.
pub fn init_combined_logger(path: &str) -> Arc<dyn DomainLogger> {
    let console = crate::adapters::outbound::init_console_logger();
    match crate::adapters::outbound::init_file_logger(path) {
        Ok(file_logger) => Arc::new(MultiLogger::new(vec![file_logger, console])),
        Err(_) => console,
    }
}
