use cosmwasm_std::{coin, to_binary, Addr, Coin, Decimal, StdResult, Uint128, WasmMsg};
use cw721::NumTokensResponse;

use crate::chain::{ChainReader, ReadAccess};
use crate::error::SyncError;
use crate::msg::{
    BalanceResponse, NftQueryMsg, TokenExecuteMsg, TokenIdResponse, TokenQueryMsg,
    TotalSupplyResponse,
};

/// Handle on the NFT collection whose holders may claim tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NftContract(pub Addr);

impl NftContract {
    pub fn addr(&self) -> &Addr {
        &self.0
    }

    pub async fn balance_of<P: ChainReader>(
        &self,
        reader: &ReadAccess<'_, P>,
        owner: &Addr,
    ) -> Result<u64, SyncError> {
        let response: NumTokensResponse = reader
            .query(
                &self.0,
                &NftQueryMsg::BalanceOf {
                    owner: owner.to_string(),
                },
            )
            .await?;
        Ok(response.count)
    }

    pub async fn token_of_owner_by_index<P: ChainReader>(
        &self,
        reader: &ReadAccess<'_, P>,
        owner: &Addr,
        index: u64,
    ) -> Result<String, SyncError> {
        let response: TokenIdResponse = reader
            .query(
                &self.0,
                &NftQueryMsg::TokenOfOwnerByIndex {
                    owner: owner.to_string(),
                    index,
                },
            )
            .await?;
        Ok(response.token_id)
    }
}

/// Handle on the ICO token contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenContract(pub Addr);

impl TokenContract {
    pub fn addr(&self) -> &Addr {
        &self.0
    }

    pub async fn balance<P: ChainReader>(
        &self,
        reader: &ReadAccess<'_, P>,
        address: &Addr,
    ) -> Result<Uint128, SyncError> {
        let response: BalanceResponse = reader
            .query(
                &self.0,
                &TokenQueryMsg::Balance {
                    address: address.to_string(),
                },
            )
            .await?;
        Ok(response.balance)
    }

    pub async fn tokens_ids_claimed<P: ChainReader>(
        &self,
        reader: &ReadAccess<'_, P>,
        token_id: &str,
    ) -> Result<bool, SyncError> {
        reader
            .query(
                &self.0,
                &TokenQueryMsg::TokensIdsClaimed {
                    token_id: token_id.to_string(),
                },
            )
            .await
    }

    pub async fn total_supply<P: ChainReader>(
        &self,
        reader: &ReadAccess<'_, P>,
    ) -> Result<Uint128, SyncError> {
        let response: TotalSupplyResponse =
            reader.query(&self.0, &TokenQueryMsg::TotalSupply {}).await?;
        Ok(response.total_supply)
    }

    pub fn mint_msg(&self, amount: Uint128, payment: Coin) -> StdResult<WasmMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.0.to_string(),
            msg: to_binary(&TokenExecuteMsg::Mint { amount })?,
            funds: vec![payment],
        })
    }

    pub fn claim_msg(&self) -> StdResult<WasmMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.0.to_string(),
            msg: to_binary(&TokenExecuteMsg::Claim {})?,
            funds: vec![],
        })
    }
}

/// Funds to attach to a mint of `amount` whole tokens.
///
/// `unit_price` is expressed in display units of `denom`, which has `decimals` places.
/// The total is rounded down once, after scaling by `amount`.
pub fn mint_payment(
    amount: Uint128,
    unit_price: Decimal,
    decimals: u32,
    denom: &str,
) -> Result<Coin, SyncError> {
    let one_unit = Uint128::new(10).checked_pow(decimals)?;
    let total = amount
        .checked_mul(one_unit)?
        .checked_multiply_ratio(unit_price.atomics(), Decimal::one().atomics())?;
    Ok(coin(total.u128(), denom))
}

/// Renders base units as a trimmed decimal number of display units.
pub fn format_units(amount: Uint128, decimals: u32) -> String {
    // 10^decimals beyond u128 means every digit is fractional
    let (whole, fraction) = match Uint128::new(10).checked_pow(decimals) {
        Ok(one_unit) => (amount / one_unit, amount % one_unit),
        Err(_) => (Uint128::zero(), amount),
    };
    if fraction.is_zero() {
        return whole.to_string();
    }
    let digits = format!("{:0>width$}", fraction.u128(), width = decimals as usize);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}
