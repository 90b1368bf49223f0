use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Target every use-case message is emitted under, so `RUST_LOG=smart_kitchen=debug` selects them.
pub const TARGET: &str = "smart_kitchen";

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}
