use soroban_sdk::{log, Address, Env};

use crate::config::get_config;
use crate::events::{self, BUY, SELL};
use crate::math;
use crate::oracle;
use crate::registry;
use crate::transfer::{self, asset_address};
use crate::treasury;
use crate::types::{ExchangeConfig, ExchangeError, PaymentAsset};

// Every swap runs: checks, inbound transfer, debit of the outgoing side,
// credit of the incoming side, event, outbound transfer last.
// Counter-amounts are floored, never rounded in the caller's favour.

pub fn require_positive(amount: i128) -> Result<(), ExchangeError> {
    if amount == 0 {
        return Err(ExchangeError::ZeroAmount);
    }
    if amount < 0 {
        return Err(ExchangeError::NegativeAmount);
    }
    Ok(())
}

/// Payment units of `asset` per whole token
fn unit_price(
    env: &Env,
    config: &ExchangeConfig,
    asset: &PaymentAsset,
) -> Result<i128, ExchangeError> {
    match asset {
        PaymentAsset::Native => Ok(oracle::get_native_price(env, config)?.price),
        PaymentAsset::Token(address) => registry::rate_of(env, config, address),
    }
}

fn tokens_out(
    env: &Env,
    config: &ExchangeConfig,
    asset: &PaymentAsset,
    amount_in: i128,
) -> Result<i128, ExchangeError> {
    require_positive(amount_in)?;
    let price = unit_price(env, config, asset)?;
    let out = math::tokens_for_payment(env, amount_in, price, config.token_decimals)?;
    if out == 0 {
        return Err(ExchangeError::AmountTooSmall);
    }
    Ok(out)
}

fn payment_out(
    env: &Env,
    config: &ExchangeConfig,
    asset: &PaymentAsset,
    token_amount: i128,
) -> Result<i128, ExchangeError> {
    require_positive(token_amount)?;
    let price = unit_price(env, config, asset)?;
    let out = math::payment_for_tokens(env, token_amount, price, config.token_decimals)?;
    if out == 0 {
        return Err(ExchangeError::AmountTooSmall);
    }
    Ok(out)
}

pub fn quote_buy(env: &Env, asset: PaymentAsset, amount_in: i128) -> Result<i128, ExchangeError> {
    let config = get_config(env)?;
    tokens_out(env, &config, &asset, amount_in)
}

pub fn quote_sell(
    env: &Env,
    asset: PaymentAsset,
    token_amount: i128,
) -> Result<i128, ExchangeError> {
    let config = get_config(env)?;
    payment_out(env, &config, &asset, token_amount)
}

/// Native currency in, tokens out. The native amount is pulled from the
/// buyer as part of the call, the equivalent of a payable invocation.
pub fn buy_with_native(env: &Env, buyer: Address, native_in: i128) -> Result<i128, ExchangeError> {
    buy(env, buyer, PaymentAsset::Native, native_in)
}

/// Payment token in (through a prior allowance), tokens out.
pub fn buy_with_token(
    env: &Env,
    buyer: Address,
    asset: Address,
    amount_in: i128,
) -> Result<i128, ExchangeError> {
    buy(env, buyer, PaymentAsset::Token(asset), amount_in)
}

pub fn sell_for_native(env: &Env, seller: Address, token_in: i128) -> Result<i128, ExchangeError> {
    sell(env, seller, PaymentAsset::Native, token_in)
}

pub fn sell_for_token(
    env: &Env,
    seller: Address,
    asset: Address,
    token_in: i128,
) -> Result<i128, ExchangeError> {
    sell(env, seller, PaymentAsset::Token(asset), token_in)
}

fn buy(
    env: &Env,
    buyer: Address,
    asset: PaymentAsset,
    amount_in: i128,
) -> Result<i128, ExchangeError> {
    let config = get_config(env)?;
    let tokens = tokens_out(env, &config, &asset, amount_in)?;
    treasury::ensure_token(env, tokens)?;

    buyer.require_auth();

    let payment_asset = asset_address(&config, &asset);
    match &asset {
        PaymentAsset::Native => transfer::pull(env, &payment_asset, &buyer, amount_in)?,
        PaymentAsset::Token(_) => transfer::pull_approved(env, &payment_asset, &buyer, amount_in)?,
    }

    treasury::debit_token(env, tokens)?;
    treasury::credit_payment(env, &asset, amount_in)?;
    events::swapped(env, BUY, &buyer, amount_in, &asset, tokens);
    log!(env, "sold {} tokens for {}", tokens, amount_in);

    transfer::push(env, &config.token, &buyer, tokens)?;
    Ok(tokens)
}

fn sell(
    env: &Env,
    seller: Address,
    asset: PaymentAsset,
    token_in: i128,
) -> Result<i128, ExchangeError> {
    let config = get_config(env)?;
    let owed = payment_out(env, &config, &asset, token_in)?;
    treasury::ensure_payment(env, &asset, owed)?;

    seller.require_auth();

    transfer::pull(env, &config.token, &seller, token_in)?;

    treasury::debit_payment(env, &asset, owed)?;
    treasury::credit_token(env, token_in)?;
    events::swapped(env, SELL, &seller, token_in, &asset, owed);
    log!(env, "bought back {} tokens for {}", token_in, owed);

    transfer::push(env, &asset_address(&config, &asset), &seller, owed)?;
    Ok(owed)
}
