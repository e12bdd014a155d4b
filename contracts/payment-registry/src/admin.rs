use soroban_sdk::{symbol_short, Address, Env};

use crate::types::{DataKey, RegistryError};

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Result<Address, RegistryError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(RegistryError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

/// Caller must be the stored admin and must have signed the invocation.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), RegistryError> {
    let admin = get_admin(env)?;
    if *caller != admin {
        return Err(RegistryError::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

pub fn transfer_admin(
    env: &Env,
    caller: Address,
    new_admin: Address,
) -> Result<(), RegistryError> {
    require_admin(env, &caller)?;
    set_admin(env, &new_admin);

    env.events()
        .publish((symbol_short!("admin"), caller), new_admin);

    Ok(())
}
