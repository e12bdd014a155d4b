use soroban_sdk::{contractclient, Address, Env};

use crate::types::{ExchangeConfig, ExchangeError};

/// Read side of the payment token registry contract
#[contractclient(name = "RegistryClient")]
pub trait PaymentRates {
    fn get_payment_token_price(env: Env, asset: Address) -> Option<i128>;
}

/// Units of `asset` per whole token, or `UnsupportedAsset`.
pub fn rate_of(
    env: &Env,
    config: &ExchangeConfig,
    asset: &Address,
) -> Result<i128, ExchangeError> {
    match RegistryClient::new(env, &config.registry).try_get_payment_token_price(asset) {
        Ok(Ok(Some(rate))) => Ok(rate),
        Ok(Ok(None)) => Err(ExchangeError::UnsupportedAsset),
        _ => Err(ExchangeError::RegistryUnavailable),
    }
}
