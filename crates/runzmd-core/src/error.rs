use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunzmdError {
    #[error("missing required header '{0}'")]
    MissingHeader(String),

    #[error("invalid value '{value}' for header '{key}': {reason}")]
    InvalidHeader {
        key: String,
        value: String,
        reason: String,
    },

    #[error("no action registered for '{0}'")]
    UnknownAction(String),

    /// An action-specific failure surfaced through the contract boundary.
    #[error(transparent)]
    Action(Box<dyn std::error::Error + Send + Sync>),
}

impl RunzmdError {
    /// Wrap an action-specific error for propagation through `Execute`.
    pub fn action<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        RunzmdError::Action(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, RunzmdError>;
