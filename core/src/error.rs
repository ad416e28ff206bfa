//! Errors surfaced by custody and relay collaborators

use thiserror::Error;

/// Escrow vault and value pool errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: u64, available: u64 },

    #[error("Unknown holder tag: {0}")]
    UnknownHolder(String),
}

/// Relay endpoint errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Relay rejected distribution: {0}")]
    Rejected(String),
}
