//! TUI error types.

use thiserror::Error;

use crate::gateway::GatewayError;

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}
