use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

/// Enumerable NFT collection queries the client relies on.
#[cw_serde]
#[derive(QueryResponses)]
pub enum NftQueryMsg {
    #[returns(cw721::NumTokensResponse)]
    BalanceOf { owner: String },
    #[returns(TokenIdResponse)]
    TokenOfOwnerByIndex { owner: String, index: u64 },
}

#[cw_serde]
pub struct TokenIdResponse {
    pub token_id: String,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum TokenQueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },
    #[returns(bool)]
    TokensIdsClaimed { token_id: String },
    #[returns(TotalSupplyResponse)]
    TotalSupply {},
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct TotalSupplyResponse {
    pub total_supply: Uint128,
}

#[cw_serde]
pub enum TokenExecuteMsg {
    /// Payable. `amount` is a count of whole tokens.
    Mint { amount: Uint128 },
    Claim {},
}
