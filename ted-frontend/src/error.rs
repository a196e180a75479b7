use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error aggregation")]
    Aggregate(Vec<AppError>),
    #[error("Terminal operation failed")]
    TerminalOperationFailed(#[from] std::io::Error),
    #[error("Input listener did not acknowledge shutdown")]
    ListenerShutdownFailed(#[from] tokio::sync::oneshot::error::RecvError),
    #[error("Terminal not initialized")]
    TerminalNotInitialized,
}
