use soroban_sdk::{symbol_short, Address, Env};

use crate::admin::require_admin;
use crate::types::{DataKey, ExchangeConfig, ExchangeError};

// 10^38 is the largest power of ten an i128 holds
const MAX_TOKEN_DECIMALS: u32 = 38;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn init_config(
    env: &Env,
    admin: &Address,
    config: &ExchangeConfig,
) -> Result<(), ExchangeError> {
    if is_initialized(env) {
        return Err(ExchangeError::AlreadyInitialized);
    }
    validate(config)?;

    env.storage().instance().set(&DataKey::Admin, admin);
    env.storage().instance().set(&DataKey::Config, config);
    Ok(())
}

pub fn get_config(env: &Env) -> Result<ExchangeConfig, ExchangeError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ExchangeError::NotInitialized)
}

fn save_config(env: &Env, config: &ExchangeConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

fn validate(config: &ExchangeConfig) -> Result<(), ExchangeError> {
    if config.token_decimals > MAX_TOKEN_DECIMALS
        || config.max_price_age == 0
        || config.token == config.native_asset
    {
        return Err(ExchangeError::InvalidConfig);
    }
    Ok(())
}

/// Point the native leg at another price feed
pub fn set_price_feed(
    env: &Env,
    caller: Address,
    price_feed: Address,
) -> Result<(), ExchangeError> {
    require_admin(env, &caller)?;
    let mut config = get_config(env)?;
    config.price_feed = price_feed.clone();
    save_config(env, &config);

    env.events()
        .publish((symbol_short!("cfg"), symbol_short!("feed")), price_feed);
    Ok(())
}

pub fn set_max_price_age(
    env: &Env,
    caller: Address,
    max_price_age: u64,
) -> Result<(), ExchangeError> {
    require_admin(env, &caller)?;
    let mut config = get_config(env)?;
    config.max_price_age = max_price_age;
    validate(&config)?;
    save_config(env, &config);

    env.events()
        .publish((symbol_short!("cfg"), symbol_short!("max_age")), max_price_age);
    Ok(())
}

pub fn set_registry(env: &Env, caller: Address, registry: Address) -> Result<(), ExchangeError> {
    require_admin(env, &caller)?;
    let mut config = get_config(env)?;
    config.registry = registry.clone();
    save_config(env, &config);

    env.events()
        .publish((symbol_short!("cfg"), symbol_short!("registry")), registry);
    Ok(())
}
