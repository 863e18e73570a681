use std::fmt;

use cosmwasm_std::{Addr, WasmMsg};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::SyncError;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TxHash(pub String);

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub tx_hash: TxHash,
    pub height: u64,
}

#[allow(async_fn_in_trait)]
pub trait ChainReader {
    async fn chain_id(&self) -> anyhow::Result<String>;

    async fn query_wasm_smart<T, M>(&self, contract: &Addr, msg: &M) -> anyhow::Result<T>
    where
        T: DeserializeOwned,
        M: Serialize;
}

/// A wallet able to authorize the site and sign for one account.
///
/// `submit` returns once the transaction has been accepted for inclusion. A revert is
/// reported by `confirm`, which resolves only when the chain has executed the transaction.
#[allow(async_fn_in_trait)]
pub trait WalletProvider: ChainReader {
    async fn request_account(&self) -> anyhow::Result<Addr>;

    async fn submit(&self, sender: &Addr, msg: WasmMsg) -> anyhow::Result<TxHash>;

    async fn confirm(&self, tx_hash: &TxHash) -> anyhow::Result<Confirmation>;
}

pub struct ReadAccess<'a, P> {
    provider: &'a P,
}

impl<'a, P: ChainReader> ReadAccess<'a, P> {
    pub(crate) fn new(provider: &'a P) -> Self {
        ReadAccess { provider }
    }

    pub async fn query<T, M>(&self, contract: &Addr, msg: &M) -> Result<T, SyncError>
    where
        T: DeserializeOwned,
        M: Serialize,
    {
        self.provider
            .query_wasm_smart(contract, msg)
            .await
            .map_err(SyncError::ReadFailure)
    }
}

pub struct WriteAccess<'a, P> {
    provider: &'a P,
    sender: Addr,
}

impl<'a, P: WalletProvider> WriteAccess<'a, P> {
    pub(crate) fn new(provider: &'a P, sender: Addr) -> Self {
        WriteAccess { provider, sender }
    }

    pub fn sender(&self) -> &Addr {
        &self.sender
    }

    pub async fn submit(&self, msg: WasmMsg) -> Result<TxHash, SyncError> {
        self.provider
            .submit(&self.sender, msg)
            .await
            .map_err(SyncError::WriteFailure)
    }

    pub async fn confirm(&self, tx_hash: &TxHash) -> Result<Confirmation, SyncError> {
        self.provider
            .confirm(tx_hash)
            .await
            .map_err(SyncError::WriteFailure)
    }
}
