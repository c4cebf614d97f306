//! Error types for the dashboard client.

pub mod stellar;

use serde_json::Value;

/// Top-level error type for the dashboard client.
/// Every failure path ends in a visible message; [`stellar::classify_error`]
/// turns any of these into the string shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Input rejected at the form boundary; never reaches an orchestrator.
    /// The message is already user-facing.
    #[error("{0}")]
    Validation(String),

    /// Wallet signature request rejected or failed.
    #[error("{message}")]
    Wallet { message: String },

    /// Transaction submission rejected by the network. Carries the raw
    /// Horizon problem payload when one was returned.
    #[error("transaction submission failed")]
    Submission { payload: Value },

    /// Submission returned no hash — a failure even though nothing threw.
    #[error("transaction submitted but no hash returned")]
    MissingTxHash,

    /// A gateway read (balance, car status) failed.
    #[error("gateway read failed: {message}")]
    Gateway { message: String },

    /// The contract call could not be assembled.
    #[error("contract call failed: {message}")]
    Contract { message: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias.
pub type DashboardResult<T> = Result<T, DashboardError>;

impl DashboardError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn wallet(message: impl Into<String>) -> Self {
        Self::Wallet {
            message: message.into(),
        }
    }

    pub fn gateway(message: impl Into<String>) -> Self {
        Self::Gateway {
            message: message.into(),
        }
    }

    pub fn contract(message: impl Into<String>) -> Self {
        Self::Contract {
            message: message.into(),
        }
    }

    /// Submission failure with the Horizon problem payload attached.
    pub fn submission(payload: Value) -> Self {
        Self::Submission { payload }
    }
}
