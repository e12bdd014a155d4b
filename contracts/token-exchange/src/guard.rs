use soroban_sdk::Env;

use crate::types::{DataKey, ExchangeError};

// Held for the whole of a swap or withdrawal. An error exit leaves no flag
// behind since the host discards the failed invocation's writes.

pub fn enter(env: &Env) -> Result<(), ExchangeError> {
    if is_locked(env) {
        return Err(ExchangeError::ReentrantCall);
    }
    env.storage().instance().set(&DataKey::Locked, &true);
    Ok(())
}

pub fn exit(env: &Env) {
    env.storage().instance().remove(&DataKey::Locked);
}

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<_, bool>(&DataKey::Locked)
        .unwrap_or(false)
}
