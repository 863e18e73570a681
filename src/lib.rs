pub mod chain;
pub mod controller;
pub mod error;
mod executes;
pub mod helpers;
pub mod msg;
mod queries;
pub mod render;
pub mod state;

#[cfg(test)]
mod multitest;

pub use crate::chain::{
    ChainReader, Confirmation, ReadAccess, TxHash, WalletProvider, WriteAccess,
};
pub use crate::controller::WalletSyncController;
pub use crate::error::SyncError;
pub use crate::render::{parse_mint_amount, render, Action, Body, View};
pub use crate::state::{Config, ConnectionState, Notice, SyncSnapshot};
