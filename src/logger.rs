use std::sync::Arc;

/// Sink for the error lines emitted by the connection factory.
pub trait Logger: Send + Sync {
    fn error(&self, message: &str);
}

/// Forwards to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCrateLogger;

impl Logger for LogCrateLogger {
    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}

impl<T: Logger + ?Sized> Logger for Arc<T> {
    fn error(&self, message: &str) {
        (**self).error(message)
    }
}
