#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

mod admin;
mod registry;
mod types;


pub use types::{PaymentAssetEntry, RegistryError};

#[contract]
pub struct PaymentRegistry;

#[contractimpl]
impl PaymentRegistry {
    /// Initialize the registry with its admin
    pub fn initialize(env: Env, admin: Address) -> Result<(), RegistryError> {
        if admin::has_admin(&env) {
            return Err(RegistryError::AlreadyInitialized);
        }
        admin.require_auth();
        admin::set_admin(&env, &admin);
        Ok(())
    }

    /// Set how many units of `asset` buy one exchanged token
    pub fn set_payment_token_price(
        env: Env,
        caller: Address,
        asset: Address,
        rate: i128,
    ) -> Result<(), RegistryError> {
        registry::set_rate(&env, caller, asset, rate)
    }

    /// Stop accepting `asset` while keeping its record
    pub fn remove_payment_token(
        env: Env,
        caller: Address,
        asset: Address,
    ) -> Result<(), RegistryError> {
        registry::deactivate(&env, caller, asset)
    }

    /// Current rate of `asset`, `None` when it is not accepted
    pub fn get_payment_token_price(env: Env, asset: Address) -> Option<i128> {
        registry::rate_of(&env, asset)
    }

    pub fn get_payment_entry(env: Env, asset: Address) -> Option<PaymentAssetEntry> {
        registry::get_entry(&env, asset)
    }

    /// Every token ever registered, in registration order
    pub fn payment_tokens(env: Env) -> Vec<Address> {
        registry::payment_tokens(&env)
    }

    pub fn admin(env: Env) -> Result<Address, RegistryError> {
        admin::get_admin(&env)
    }

    pub fn transfer_admin(
        env: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), RegistryError> {
        admin::transfer_admin(&env, caller, new_admin)
    }
}
