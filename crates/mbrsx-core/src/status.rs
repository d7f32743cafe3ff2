use std::fmt;

use alloy::primitives::{Address, U256};

use crate::codec::format_units;
use crate::constants::METRIX_DECIMALS;
use crate::contracts::{Mrc20, Mrc721, TokenBuyback};
use crate::errors::MbrsxResult;

/// Headline state of the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLabel {
    Active,
    Paused,
    PausedAndNotActive,
    Inactive,
}

impl StatusLabel {
    pub fn from_flags(active: bool, paused: bool) -> Self {
        match (paused, active) {
            (true, true) => StatusLabel::Paused,
            (true, false) => StatusLabel::PausedAndNotActive,
            (false, true) => StatusLabel::Active,
            (false, false) => StatusLabel::Inactive,
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLabel::Active => f.write_str("Active"),
            StatusLabel::Paused => f.write_str("Paused"),
            StatusLabel::PausedAndNotActive => f.write_str("Paused and Not Active"),
            StatusLabel::Inactive => f.write_str("Inactive"),
        }
    }
}

/// Snapshot of the exchange contract and the token it buys back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractStatus {
    pub active: bool,
    pub paused: bool,
    pub hodlers_only: bool,
    pub rate: U256,
    /// MRX held by the exchange, in satoshis
    pub vault: U256,
    pub total_supply: U256,
    /// MBRS already exchanged and held by the contract
    pub locked: U256,
}

impl ContractStatus {
    pub async fn fetch(buyback: &TokenBuyback, token: &Mrc20) -> MbrsxResult<Self> {
        let active = buyback.active().await?;
        let paused = buyback.paused().await?;
        let vault = buyback.balance().await?;
        let hodlers_only = buyback.hodlers().await?;
        let total_supply = token.total_supply().await?;
        let locked = token.balance_of(buyback.address()).await?;
        let rate = buyback.rate().await?;
        Ok(Self { active, paused, hodlers_only, rate, vault, total_supply, locked })
    }

    pub fn label(&self) -> StatusLabel {
        StatusLabel::from_flags(self.active, self.paused)
    }

    /// Vault balance in MRX with all eight decimals (`12.50000000`)
    pub fn vault_formatted(&self) -> String {
        format_units(&self.vault, METRIX_DECIMALS)
    }
}

/// What a given user can exchange
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientStatus {
    pub balance: U256,
    /// Amount the exchange may pull from the user
    pub allowance: U256,
    /// Whether the user holds at least one PYRO core
    pub hodler: bool,
}

impl ClientStatus {
    pub async fn fetch(
        user: Address,
        buyback_address: Address,
        token: &Mrc20,
        core: Option<&Mrc721>,
    ) -> MbrsxResult<Self> {
        let hodler = match core {
            Some(core) => core.balance_of(user).await? > U256::ZERO,
            None => false,
        };
        let balance = token.balance_of(user).await?;
        let allowance = token.allowance(user, buyback_address).await?;
        Ok(Self { balance, allowance, hodler })
    }
}
