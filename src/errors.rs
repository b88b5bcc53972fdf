use thiserror::Error;

use crate::types::EntryId;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("store unavailable: {message}")]
    StoreUnavailable {
        message: String,
    },

    #[error("ledger entry not found: {id}")]
    EntryNotFound {
        id: EntryId,
    },
}

pub type Result<T> = std::result::Result<T, LedgerError>;
