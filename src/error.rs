use cosmwasm_std::{CheckedMultiplyRatioError, OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    MultiplyRatio(#[from] CheckedMultiplyRatioError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("InvalidConfig: {reason}")]
    InvalidConfig { reason: String },

    #[error("WrongNetwork: expected {expected}, found {actual}")]
    WrongNetwork { expected: String, actual: String },

    #[error("WalletUnavailable: {0}")]
    WalletUnavailable(anyhow::Error),

    #[error("NotConnected")]
    NotConnected {},

    #[error("InvalidMintAmount")]
    InvalidMintAmount {},

    #[error("TransactionPending")]
    TransactionPending {},

    #[error("ConfirmationTimeout")]
    ConfirmationTimeout {},

    #[error("ReadFailure: {0}")]
    ReadFailure(anyhow::Error),

    #[error("WriteFailure: {0}")]
    WriteFailure(anyhow::Error),
}

impl SyncError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        SyncError::InvalidConfig {
            reason: reason.into(),
        }
    }
}
