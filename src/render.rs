use std::fmt;

use cosmwasm_std::Uint128;

use crate::helpers::format_units;
use crate::state::{Config, Notice, SyncSnapshot};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    pub title: String,
    pub description: String,
    pub alert: Option<String>,
    pub body: Body,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    ConnectWallet,
    Dashboard {
        balance_line: String,
        minted_line: String,
        action: Action,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Loading,
    Claim { message: String },
    Mint { amount: Option<Uint128> },
}

impl Action {
    /// Whether the action button accepts a click.
    pub fn enabled(&self) -> bool {
        match self {
            Action::Loading => false,
            Action::Claim { .. } => true,
            Action::Mint { amount } => amount.is_some(),
        }
    }
}

/// Parses the mint input box. Empty, negative, zero or non-numeric input yields `None`.
pub fn parse_mint_amount(input: &str) -> Option<Uint128> {
    input
        .trim()
        .parse::<u128>()
        .ok()
        .filter(|amount| *amount > 0)
        .map(Uint128::new)
}

pub fn render(snapshot: &SyncSnapshot, config: &Config, mint_input: &str) -> View {
    let name = &config.project_name;
    let alert = snapshot.notice.as_ref().map(|notice| match notice {
        Notice::Minted => format!("Successfully minted {} Tokens", name),
        Notice::Claimed => format!("Successfully claimed {} Tokens", name),
        Notice::WrongNetwork { expected } => format!("Change the network to {}", expected),
    });

    let body = if snapshot.connection.is_connected() {
        Body::Dashboard {
            balance_line: format!(
                "You have minted {} {} Tokens",
                format_units(snapshot.token_balance, config.token_decimals),
                name
            ),
            minted_line: format!(
                "Overall {}/{} have been minted",
                format_units(snapshot.total_minted, config.token_decimals),
                config.supply_cap
            ),
            action: action(snapshot, config, mint_input),
        }
    } else {
        Body::ConnectWallet
    };

    View {
        title: format!("Welcome to {} ICO!", name),
        description: format!("You can claim or mint {} tokens here", name),
        alert,
        body,
    }
}

fn action(snapshot: &SyncSnapshot, config: &Config, mint_input: &str) -> Action {
    if snapshot.loading {
        return Action::Loading;
    }
    if snapshot.claimable > 0 {
        let tokens = Uint128::from(snapshot.claimable) * Uint128::from(config.tokens_per_nft);
        return Action::Claim {
            message: format!("{} Tokens can be claimed!", tokens),
        };
    }
    Action::Mint {
        amount: parse_mint_amount(mint_input),
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.description)?;
        if let Some(alert) = &self.alert {
            writeln!(f, "! {}", alert)?;
        }
        match &self.body {
            Body::ConnectWallet => writeln!(f, "[Connect your wallet]"),
            Body::Dashboard {
                balance_line,
                minted_line,
                action,
            } => {
                writeln!(f, "{}", balance_line)?;
                writeln!(f, "{}", minted_line)?;
                match action {
                    Action::Loading => writeln!(f, "[Loading...]"),
                    Action::Claim { message } => {
                        writeln!(f, "{}", message)?;
                        writeln!(f, "[Claim Tokens]")
                    }
                    Action::Mint { amount } => match amount {
                        Some(amount) => writeln!(f, "[Mint {} Tokens]", amount),
                        None => writeln!(f, "[Mint Tokens] (enter an amount)"),
                    },
                }
            }
        }
    }
}
