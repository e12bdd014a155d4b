use soroban_sdk::{symbol_short, Address, Env};

use crate::types::{DataKey, ExchangeError};

pub fn get_admin(env: &Env) -> Result<Address, ExchangeError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ExchangeError::NotInitialized)
}

/// Caller must be the stored admin and must have signed the invocation.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), ExchangeError> {
    let admin = get_admin(env)?;
    if *caller != admin {
        return Err(ExchangeError::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

pub fn transfer_admin(env: &Env, caller: Address, new_admin: Address) -> Result<(), ExchangeError> {
    require_admin(env, &caller)?;
    env.storage().instance().set(&DataKey::Admin, &new_admin);

    env.events()
        .publish((symbol_short!("admin"), caller), new_admin);
    Ok(())
}
