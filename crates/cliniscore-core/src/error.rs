use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown body system: {0}")]
    UnknownBodySystem(String),
}
