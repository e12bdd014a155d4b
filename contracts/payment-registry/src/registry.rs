use soroban_sdk::{symbol_short, Address, Env, Vec};

use crate::admin::require_admin;
use crate::types::{DataKey, PaymentAssetEntry, RegistryError};

/// Register a payment token or overwrite its rate. Re-registering a removed
/// token re-activates it.
pub fn set_rate(
    env: &Env,
    caller: Address,
    asset: Address,
    rate: i128,
) -> Result<(), RegistryError> {
    require_admin(env, &caller)?;

    if rate <= 0 {
        return Err(RegistryError::InvalidRate);
    }

    let key = DataKey::Entry(asset.clone());
    if !env.storage().persistent().has(&key) {
        let mut assets = payment_tokens(env);
        assets.push_back(asset.clone());
        env.storage().instance().set(&DataKey::Assets, &assets);
    }

    let entry = PaymentAssetEntry {
        asset: asset.clone(),
        rate,
        active: true,
        updated_at: env.ledger().timestamp(),
    };
    env.storage().persistent().set(&key, &entry);

    env.events()
        .publish((symbol_short!("rate_set"), asset), rate);

    Ok(())
}

/// Mark a payment token unsupported. The entry and its last rate are kept.
pub fn deactivate(env: &Env, caller: Address, asset: Address) -> Result<(), RegistryError> {
    require_admin(env, &caller)?;

    let key = DataKey::Entry(asset.clone());
    let mut entry: PaymentAssetEntry = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(RegistryError::NotRegistered)?;

    entry.active = false;
    entry.updated_at = env.ledger().timestamp();
    env.storage().persistent().set(&key, &entry);

    env.events()
        .publish((symbol_short!("rate_off"), asset), entry.rate);

    Ok(())
}

pub fn get_entry(env: &Env, asset: Address) -> Option<PaymentAssetEntry> {
    env.storage().persistent().get(&DataKey::Entry(asset))
}

/// `None` means the token is not accepted for payment.
pub fn rate_of(env: &Env, asset: Address) -> Option<i128> {
    get_entry(env, asset)
        .filter(|entry| entry.active)
        .map(|entry| entry.rate)
}

pub fn payment_tokens(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Assets)
        .unwrap_or_else(|| Vec::new(env))
}
