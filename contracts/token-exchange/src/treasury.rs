use soroban_sdk::Env;

use crate::types::{DataKey, ExchangeError, PaymentAsset};

// Sole writers of the treasury balances. Debits check solvency first.

pub fn token_balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get::<_, i128>(&DataKey::TokenReserve)
        .unwrap_or(0)
}

pub fn payment_balance(env: &Env, asset: &PaymentAsset) -> i128 {
    env.storage()
        .instance()
        .get::<_, i128>(&DataKey::PaymentReserve(asset.clone()))
        .unwrap_or(0)
}

pub fn ensure_token(env: &Env, amount: i128) -> Result<(), ExchangeError> {
    if token_balance(env) < amount {
        return Err(ExchangeError::InsufficientTreasury);
    }
    Ok(())
}

pub fn ensure_payment(env: &Env, asset: &PaymentAsset, amount: i128) -> Result<(), ExchangeError> {
    if payment_balance(env, asset) < amount {
        return Err(ExchangeError::InsufficientTreasury);
    }
    Ok(())
}

pub fn debit_token(env: &Env, amount: i128) -> Result<(), ExchangeError> {
    let balance = token_balance(env);
    if balance < amount {
        return Err(ExchangeError::InsufficientTreasury);
    }
    env.storage()
        .instance()
        .set(&DataKey::TokenReserve, &(balance - amount));
    Ok(())
}

pub fn credit_token(env: &Env, amount: i128) -> Result<(), ExchangeError> {
    let balance = token_balance(env)
        .checked_add(amount)
        .ok_or(ExchangeError::ArithmeticOverflow)?;
    env.storage().instance().set(&DataKey::TokenReserve, &balance);
    Ok(())
}

pub fn debit_payment(env: &Env, asset: &PaymentAsset, amount: i128) -> Result<(), ExchangeError> {
    let balance = payment_balance(env, asset);
    if balance < amount {
        return Err(ExchangeError::InsufficientTreasury);
    }
    env.storage()
        .instance()
        .set(&DataKey::PaymentReserve(asset.clone()), &(balance - amount));
    Ok(())
}

pub fn credit_payment(env: &Env, asset: &PaymentAsset, amount: i128) -> Result<(), ExchangeError> {
    let balance = payment_balance(env, asset)
        .checked_add(amount)
        .ok_or(ExchangeError::ArithmeticOverflow)?;
    env.storage()
        .instance()
        .set(&DataKey::PaymentReserve(asset.clone()), &balance);
    Ok(())
}
