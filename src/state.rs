use std::path::Path;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_slice, Addr, Decimal, Uint128};

use crate::error::SyncError;

#[cw_serde]
pub struct Config {
    pub chain_id: String,
    pub nft_address: String,
    pub token_address: String,
    pub native_denom: String,
    #[serde(default = "default_decimals")]
    pub native_decimals: u32,
    /// Price of one whole token, in display units of `native_denom`.
    #[serde(default = "default_unit_price")]
    pub unit_price: Decimal,
    #[serde(default = "default_decimals")]
    pub token_decimals: u32,
    /// Maximum supply in whole tokens. Only used for display, the contract enforces it.
    #[serde(default = "default_supply_cap")]
    pub supply_cap: Uint128,
    #[serde(default = "default_tokens_per_nft")]
    pub tokens_per_nft: u64,
    #[serde(default = "default_project_name")]
    pub project_name: String,
    #[serde(default)]
    pub confirmation_timeout_secs: Option<u64>,
}

// 10^38 is the largest power of ten a Uint128 holds
const MAX_DECIMALS: u32 = 38;

fn default_decimals() -> u32 {
    18
}

fn default_unit_price() -> Decimal {
    Decimal::permille(1)
}

fn default_supply_cap() -> Uint128 {
    Uint128::new(10_000)
}

fn default_tokens_per_nft() -> u64 {
    10
}

fn default_project_name() -> String {
    "Crypto Devs".to_string()
}

impl Config {
    pub fn from_json(raw: &[u8]) -> Result<Self, SyncError> {
        let config: Config = from_slice(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SyncError> {
        let raw = std::fs::read(path)?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<(), SyncError> {
        if self.chain_id.trim().is_empty() {
            return Err(SyncError::invalid_config("chain_id is empty"));
        }
        if self.nft_address.trim().is_empty() || self.token_address.trim().is_empty() {
            return Err(SyncError::invalid_config("contract address is empty"));
        }
        if self.native_denom.trim().is_empty() {
            return Err(SyncError::invalid_config("native_denom is empty"));
        }
        if self.unit_price.is_zero() {
            return Err(SyncError::invalid_config("unit_price must be positive"));
        }
        if self.supply_cap.is_zero() {
            return Err(SyncError::invalid_config("supply_cap must be positive"));
        }
        if self.native_decimals > MAX_DECIMALS || self.token_decimals > MAX_DECIMALS {
            return Err(SyncError::invalid_config("decimals must be at most 38"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected {
        account: Addr,
    },
}

impl ConnectionState {
    pub fn account(&self) -> Option<&Addr> {
        match self {
            ConnectionState::Connected { account } => Some(account),
            ConnectionState::Disconnected => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Minted,
    Claimed,
    WrongNetwork { expected: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncSnapshot {
    pub connection: ConnectionState,
    pub claimable: u64,
    pub token_balance: Uint128,
    pub total_minted: Uint128,
    pub loading: bool,
    pub notice: Option<Notice>,
}
