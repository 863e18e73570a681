use std::time::Duration;

use cosmwasm_std::{Uint128, WasmMsg};
use tracing::{error, info};

use crate::chain::{Confirmation, WalletProvider, WriteAccess};
use crate::controller::WalletSyncController;
use crate::error::SyncError;
use crate::helpers::mint_payment;
use crate::state::Notice;

impl<P: WalletProvider> WalletSyncController<P> {
    /// Buys `amount` whole tokens at the configured unit price.
    pub async fn mint(&self, amount: Uint128) -> Result<Confirmation, SyncError> {
        if amount.is_zero() {
            return Err(SyncError::InvalidMintAmount {});
        }
        let payment = mint_payment(
            amount,
            self.config.unit_price,
            self.config.native_decimals,
            &self.config.native_denom,
        )?;
        let msg = self.token.mint_msg(amount, payment)?;
        self.transact("mint", msg, Notice::Minted).await
    }

    /// Claims the tokens owed for every unclaimed NFT of the connected account.
    pub async fn claim(&self) -> Result<Confirmation, SyncError> {
        let msg = self.token.claim_msg()?;
        self.transact("claim", msg, Notice::Claimed).await
    }

    async fn transact(
        &self,
        action: &'static str,
        msg: WasmMsg,
        notice: Notice,
    ) -> Result<Confirmation, SyncError> {
        let writer = self.write_access()?;

        let acquired = self.state.send_if_modified(|snapshot| {
            if snapshot.loading {
                false
            } else {
                snapshot.loading = true;
                true
            }
        });
        if !acquired {
            return Err(SyncError::TransactionPending {});
        }

        let outcome = self.submit_and_confirm(&writer, msg).await;
        self.state.send_modify(|snapshot| snapshot.loading = false);

        let confirmation = match outcome {
            Ok(confirmation) => confirmation,
            Err(err) => {
                error!(action, sender = %writer.sender(), error = %err, "transaction failed");
                return Err(err);
            }
        };

        info!(
            action,
            sender = %writer.sender(),
            tx_hash = %confirmation.tx_hash,
            height = confirmation.height,
            "transaction confirmed"
        );
        self.state
            .send_modify(|snapshot| snapshot.notice = Some(notice));

        // Read failures reset their own values and are logged by the refreshes.
        let _ = self.refresh_token_balance().await;
        let _ = self.refresh_total_minted().await;
        let _ = self.refresh_claimable().await;

        Ok(confirmation)
    }

    async fn submit_and_confirm(
        &self,
        writer: &WriteAccess<'_, P>,
        msg: WasmMsg,
    ) -> Result<Confirmation, SyncError> {
        let tx_hash = writer.submit(msg).await?;
        info!(tx_hash = %tx_hash, "transaction submitted, waiting for confirmation");

        match self.config.confirmation_timeout_secs {
            Some(secs) => tokio::time::timeout(Duration::from_secs(secs), writer.confirm(&tx_hash))
                .await
                .map_err(|_| SyncError::ConfirmationTimeout {})?,
            None => writer.confirm(&tx_hash).await,
        }
    }
}
