use alloy::primitives::U256;
use error_stack::Report;

use crate::contracts::TokenBuyback;
use crate::errors::{ExchangeError, MbrsxError, MbrsxResult};
use crate::status::ClientStatus;
use crate::transaction::Transaction;

/// Reject an exchange the contract would refuse anyway.
/// Checks run in order: allowance, rate, then zero.
pub fn validate_exchange(amount: U256, allowance: U256, rate: U256) -> MbrsxResult<()> {
    if amount > allowance {
        return Err(Report::new(MbrsxError::Exchange(ExchangeError::ExceedsAllowance {
            amount: amount.to_string(),
            allowance: allowance.to_string(),
        })));
    }
    if amount < rate {
        return Err(Report::new(MbrsxError::Exchange(ExchangeError::BelowRate {
            amount: amount.to_string(),
            rate: rate.to_string(),
        })));
    }
    if amount.is_zero() {
        return Err(Report::new(MbrsxError::Exchange(ExchangeError::ZeroAmount)));
    }
    Ok(())
}

/// Cap a requested amount at what the user holds
pub fn clamp_to_balance(amount: U256, balance: U256) -> U256 {
    amount.min(balance)
}

/// Clamp, validate, then submit `exchangeTokenForMetrix`
pub async fn exchange(
    buyback: &TokenBuyback,
    amount: U256,
    client: &ClientStatus,
    rate: U256,
) -> MbrsxResult<Transaction> {
    let amount = clamp_to_balance(amount, client.balance);
    validate_exchange(amount, client.allowance, rate)?;
    buyback.exchange_token_for_metrix(amount).await
}
