use thiserror::Error;

/// Failures while configuring or installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// Builder settings that cannot produce a working subscriber.
    #[error("Invalid logger configuration: {0}")]
    InvalidConfiguration(String),
    /// A global subscriber has already been installed.
    #[error("Subscriber error: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
    /// The rolling file appender could not be created.
    #[error("File appender error: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),
    /// Filesystem problems while preparing the log directory.
    #[error("Logger I/O error: {0}")]
    Io(#[from] std::io::Error),
}
