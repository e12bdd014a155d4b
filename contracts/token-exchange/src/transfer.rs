use soroban_sdk::{token, Address, Env};

use crate::types::{ExchangeConfig, ExchangeError, PaymentAsset};

/// Contract address holding the funds of `asset`.
pub fn asset_address(config: &ExchangeConfig, asset: &PaymentAsset) -> Address {
    match asset {
        PaymentAsset::Native => config.native_asset.clone(),
        PaymentAsset::Token(address) => address.clone(),
    }
}

/// Move `amount` from `from` into the contract; `from` signs the transfer.
pub fn pull(env: &Env, asset: &Address, from: &Address, amount: i128) -> Result<(), ExchangeError> {
    let client = token::Client::new(env, asset);
    if client
        .try_transfer(from, &env.current_contract_address(), &amount)
        .is_err()
    {
        return Err(ExchangeError::TransferFailed);
    }
    Ok(())
}

/// Move `amount` from `from` into the contract against the allowance
/// `from` granted this contract beforehand.
pub fn pull_approved(
    env: &Env,
    asset: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), ExchangeError> {
    let client = token::Client::new(env, asset);
    let this = env.current_contract_address();
    if client.try_transfer_from(&this, from, &this, &amount).is_err() {
        return Err(ExchangeError::TransferFailed);
    }
    Ok(())
}

/// Send `amount` out of the contract.
pub fn push(env: &Env, asset: &Address, to: &Address, amount: i128) -> Result<(), ExchangeError> {
    let client = token::Client::new(env, asset);
    if client
        .try_transfer(&env.current_contract_address(), to, &amount)
        .is_err()
    {
        return Err(ExchangeError::TransferFailed);
    }
    Ok(())
}
