use soroban_sdk::{Address, Env};

use crate::admin::require_admin;
use crate::config::get_config;
use crate::events;
use crate::registry;
use crate::swap::require_positive;
use crate::transfer::{self, asset_address};
use crate::treasury;
use crate::types::{ExchangeConfig, ExchangeError, PaymentAsset};

/// Move tokens into the sale pool
pub fn fund_sale_pool(env: &Env, from: Address, amount: i128) -> Result<(), ExchangeError> {
    let config = get_config(env)?;
    require_positive(amount)?;
    from.require_auth();

    transfer::pull(env, &config.token, &from, amount)?;
    treasury::credit_token(env, amount)?;
    events::pool_funded(env, &from, amount);
    Ok(())
}

/// Plain receipt of native currency, used to fund buy-backs
pub fn deposit_native(env: &Env, from: Address, amount: i128) -> Result<(), ExchangeError> {
    let config = get_config(env)?;
    deposit(env, &config, from, PaymentAsset::Native, amount)
}

/// Fund buy-backs in a registered payment token
pub fn deposit_payment_token(
    env: &Env,
    from: Address,
    asset: Address,
    amount: i128,
) -> Result<(), ExchangeError> {
    let config = get_config(env)?;
    registry::rate_of(env, &config, &asset)?;
    deposit(env, &config, from, PaymentAsset::Token(asset), amount)
}

fn deposit(
    env: &Env,
    config: &ExchangeConfig,
    from: Address,
    asset: PaymentAsset,
    amount: i128,
) -> Result<(), ExchangeError> {
    require_positive(amount)?;
    from.require_auth();

    transfer::pull(env, &asset_address(config, &asset), &from, amount)?;
    treasury::credit_payment(env, &asset, amount)?;
    events::payment_funded(env, &from, &asset, amount);
    Ok(())
}

pub fn withdraw_sale_tokens(
    env: &Env,
    caller: Address,
    to: Address,
    amount: i128,
) -> Result<(), ExchangeError> {
    require_admin(env, &caller)?;
    let config = get_config(env)?;
    require_positive(amount)?;

    treasury::debit_token(env, amount)?;
    events::pool_withdrawn(env, &to, amount);
    transfer::push(env, &config.token, &to, amount)
}

/// Withdraw sale proceeds. Works for payment tokens that were deregistered
/// after being received.
pub fn withdraw_payment(
    env: &Env,
    caller: Address,
    asset: PaymentAsset,
    to: Address,
    amount: i128,
) -> Result<(), ExchangeError> {
    require_admin(env, &caller)?;
    let config = get_config(env)?;
    require_positive(amount)?;

    treasury::debit_payment(env, &asset, amount)?;
    events::payment_withdrawn(env, &to, &asset, amount);
    transfer::push(env, &asset_address(&config, &asset), &to, amount)
}
