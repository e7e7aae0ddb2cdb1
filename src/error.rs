use thiserror::Error;

/// Startup failures; anything here ends the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
    #[error("logging already initialized: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}
