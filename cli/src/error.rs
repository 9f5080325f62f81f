use counter_api::prelude::CodecError;
use solana_client::client_error::ClientError;
use solana_sdk::pubkey::{Pubkey, PubkeyError};
use thiserror::Error;

/// Bootstrap failures: anything from before the first network step.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read keypair file {path}: {message}")]
    Keypair { path: String, message: String },
    #[error("counter address derivation failed: {0}")]
    Derivation(#[from] PubkeyError),
}

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("failed to fund identity {identity}: {source}")]
    Funding {
        identity: Pubkey,
        #[source]
        source: ClientError,
    },
    #[error("failed to query account {address}: {source}")]
    Lookup {
        address: Pubkey,
        #[source]
        source: ClientError,
    },
    #[error("account creation rejected: {0}")]
    Rejected(ClientError),
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("instruction rejected: {0}")]
    Rejected(ClientError),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("counter account {0} does not exist")]
    MissingAccount(Pubkey),
    #[error("failed to fetch account {address}: {source}")]
    Lookup {
        address: Pubkey,
        #[source]
        source: ClientError,
    },
    #[error("stored record is malformed: {0}")]
    Codec(#[from] CodecError),
}
