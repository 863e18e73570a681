use cosmwasm_std::{Addr, Uint128};
use tracing::{debug, error};

use crate::chain::WalletProvider;
use crate::controller::WalletSyncController;
use crate::error::SyncError;
use crate::state::SyncSnapshot;

impl<P: WalletProvider> WalletSyncController<P> {
    /// Counts the owned NFTs whose token id has not been claimed yet.
    pub async fn refresh_claimable(&self) -> Result<u64, SyncError> {
        let account = self.connected_account()?;
        let outcome = self.count_unclaimed(&account).await;
        self.settle("claimable", outcome, |snapshot, value| {
            snapshot.claimable = value.unwrap_or_default()
        })
    }

    pub async fn refresh_token_balance(&self) -> Result<Uint128, SyncError> {
        let account = self.connected_account()?;
        let outcome = self.token.balance(&self.read_access(), &account).await;
        self.settle("token_balance", outcome, |snapshot, value| {
            snapshot.token_balance = value.unwrap_or_default()
        })
    }

    pub async fn refresh_total_minted(&self) -> Result<Uint128, SyncError> {
        let outcome = self.token.total_supply(&self.read_access()).await;
        self.settle("total_minted", outcome, |snapshot, value| {
            snapshot.total_minted = value.unwrap_or_default()
        })
    }

    /// Balance, total minted, then claimable. Every refresh runs even if an earlier one
    /// failed; the first failure is returned.
    pub async fn refresh_all(&self) -> Result<(), SyncError> {
        let balance = self.refresh_token_balance().await.map(|_| ());
        let minted = self.refresh_total_minted().await.map(|_| ());
        let claimable = self.refresh_claimable().await.map(|_| ());
        balance.and(minted).and(claimable)
    }

    async fn count_unclaimed(&self, owner: &Addr) -> Result<u64, SyncError> {
        let reader = self.read_access();
        let owned = self.nft.balance_of(&reader, owner).await?;
        if owned == 0 {
            return Ok(0);
        }

        let mut unclaimed = 0u64;
        for index in 0..owned {
            let token_id = self
                .nft
                .token_of_owner_by_index(&reader, owner, index)
                .await?;
            let claimed = self.token.tokens_ids_claimed(&reader, &token_id).await?;
            debug!(%owner, index, %token_id, claimed, "checked nft claim");
            if !claimed {
                unclaimed += 1;
            }
        }
        Ok(unclaimed)
    }

    /// Publishes a read outcome. A failed read stores the zero value, never the previous one.
    fn settle<T: Copy>(
        &self,
        field: &'static str,
        outcome: Result<T, SyncError>,
        apply: impl FnOnce(&mut SyncSnapshot, Option<T>),
    ) -> Result<T, SyncError> {
        match outcome {
            Ok(value) => {
                self.state.send_modify(|snapshot| apply(snapshot, Some(value)));
                Ok(value)
            }
            Err(err) => {
                error!(field, error = %err, "chain read failed");
                self.state.send_modify(|snapshot| apply(snapshot, None));
                Err(err)
            }
        }
    }
}
