use soroban_sdk::{Env, U256};

use crate::types::ExchangeError;

pub fn pow10(decimals: u32) -> Result<i128, ExchangeError> {
    10i128
        .checked_pow(decimals)
        .ok_or(ExchangeError::ArithmeticOverflow)
}

/// floor(a * b / c) over non-negative operands. The product is taken in 256
/// bits so only a quotient that does not fit in i128 overflows.
pub fn mul_div_floor(env: &Env, a: i128, b: i128, c: i128) -> Result<i128, ExchangeError> {
    if a < 0 || b < 0 || c <= 0 {
        return Err(ExchangeError::ArithmeticOverflow);
    }

    let product = U256::from_u128(env, a as u128).mul(&U256::from_u128(env, b as u128));
    let quotient = product.div(&U256::from_u128(env, c as u128));

    quotient
        .to_u128()
        .and_then(|q| i128::try_from(q).ok())
        .ok_or(ExchangeError::ArithmeticOverflow)
}

/// Tokens bought by `amount_in` payment units at `unit_price` units per token.
pub fn tokens_for_payment(
    env: &Env,
    amount_in: i128,
    unit_price: i128,
    token_decimals: u32,
) -> Result<i128, ExchangeError> {
    mul_div_floor(env, amount_in, pow10(token_decimals)?, unit_price)
}

/// Payment units owed for `token_amount` tokens at `unit_price` units per token.
pub fn payment_for_tokens(
    env: &Env,
    token_amount: i128,
    unit_price: i128,
    token_decimals: u32,
) -> Result<i128, ExchangeError> {
    mul_div_floor(env, token_amount, unit_price, pow10(token_decimals)?)
}
