use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::PaymentAsset;

pub const BUY: Symbol = symbol_short!("buy");
pub const SELL: Symbol = symbol_short!("sell");

/// Completed swap: topics `(swap, buy|sell, initiator)`,
/// data `(amount_in, payment_asset, amount_out)`.
pub fn swapped(
    env: &Env,
    direction: Symbol,
    initiator: &Address,
    amount_in: i128,
    asset: &PaymentAsset,
    amount_out: i128,
) {
    env.events().publish(
        (symbol_short!("swap"), direction, initiator.clone()),
        (amount_in, asset.clone(), amount_out),
    );
}

pub fn pool_funded(env: &Env, from: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("fund"), symbol_short!("pool"), from.clone()), amount);
}

pub fn payment_funded(env: &Env, from: &Address, asset: &PaymentAsset, amount: i128) {
    env.events().publish(
        (symbol_short!("fund"), symbol_short!("payment"), from.clone()),
        (asset.clone(), amount),
    );
}

pub fn pool_withdrawn(env: &Env, to: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("withdraw"), symbol_short!("pool"), to.clone()), amount);
}

pub fn payment_withdrawn(env: &Env, to: &Address, asset: &PaymentAsset, amount: i128) {
    env.events().publish(
        (symbol_short!("withdraw"), symbol_short!("payment"), to.clone()),
        (asset.clone(), amount),
    );
}
