use runzmd_core::RunzmdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZitiError {
    #[error("ziti binary not found on PATH")]
    BinaryNotFound,

    #[error("failed to spawn ziti: {0}")]
    Spawn(String),

    #[error("'ziti {args}' exited with code {code}: {hint}")]
    CommandFailed {
        args: String,
        code: i32,
        hint: String,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("expected at least {min} {entity_type}, only found {found}")]
    TooFew {
        min: i64,
        entity_type: String,
        found: usize,
    },

    #[error("expected at most {max} {entity_type}, found {found}")]
    TooMany {
        max: i64,
        entity_type: String,
        found: usize,
    },
}

impl From<ZitiError> for RunzmdError {
    fn from(err: ZitiError) -> Self {
        RunzmdError::action(err)
    }
}
