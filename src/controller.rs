use cosmwasm_std::Addr;
use tokio::sync::{watch, Mutex};
use tracing::{info, warn};

use crate::chain::{ReadAccess, WalletProvider, WriteAccess};
use crate::error::SyncError;
use crate::helpers::{NftContract, TokenContract};
use crate::state::{Config, ConnectionState, Notice, SyncSnapshot};

pub struct WalletSyncController<P> {
    pub(crate) provider: P,
    pub(crate) config: Config,
    pub(crate) nft: NftContract,
    pub(crate) token: TokenContract,
    pub(crate) state: watch::Sender<SyncSnapshot>,
    connecting: Mutex<()>,
}

impl<P: WalletProvider> WalletSyncController<P> {
    pub fn new(provider: P, config: Config) -> Result<Self, SyncError> {
        config.validate()?;
        let (state, _) = watch::channel(SyncSnapshot::default());
        Ok(WalletSyncController {
            nft: NftContract(Addr::unchecked(&config.nft_address)),
            token: TokenContract(Addr::unchecked(&config.token_address)),
            provider,
            config,
            state,
            connecting: Mutex::new(()),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn snapshot(&self) -> SyncSnapshot {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SyncSnapshot> {
        self.state.subscribe()
    }

    pub fn account(&self) -> Option<Addr> {
        self.state.borrow().connection.account().cloned()
    }

    pub fn dismiss_notice(&self) {
        self.state.send_if_modified(|snapshot| snapshot.notice.take().is_some());
    }

    /// Authorizes the site with the wallet and loads the initial state.
    ///
    /// Calls on a connected session, or racing one that is connecting, return the
    /// account without prompting again.
    pub async fn connect(&self) -> Result<Addr, SyncError> {
        if let Some(account) = self.account() {
            return Ok(account);
        }
        let _guard = self.connecting.lock().await;
        if let Some(account) = self.account() {
            return Ok(account);
        }

        let account = self
            .provider
            .request_account()
            .await
            .map_err(SyncError::WalletUnavailable)?;
        let actual = self
            .provider
            .chain_id()
            .await
            .map_err(SyncError::WalletUnavailable)?;
        if actual != self.config.chain_id {
            warn!(expected = %self.config.chain_id, %actual, "wallet is on the wrong network");
            let expected = self.config.chain_id.clone();
            self.state.send_modify(|snapshot| {
                snapshot.notice = Some(Notice::WrongNetwork {
                    expected: expected.clone(),
                })
            });
            return Err(SyncError::WrongNetwork { expected, actual });
        }

        info!(%account, chain_id = %actual, "wallet connected");
        self.state.send_modify(|snapshot| {
            snapshot.connection = ConnectionState::Connected {
                account: account.clone(),
            };
            if matches!(snapshot.notice, Some(Notice::WrongNetwork { .. })) {
                snapshot.notice = None;
            }
        });

        // Failures are logged and already reset the affected values.
        let _ = self.refresh_all().await;
        Ok(account)
    }

    pub fn read_access(&self) -> ReadAccess<'_, P> {
        ReadAccess::new(&self.provider)
    }

    pub fn write_access(&self) -> Result<WriteAccess<'_, P>, SyncError> {
        Ok(WriteAccess::new(&self.provider, self.connected_account()?))
    }

    pub(crate) fn connected_account(&self) -> Result<Addr, SyncError> {
        self.account().ok_or(SyncError::NotConnected {})
    }
}
