#![no_std]

mod admin;
mod config;
mod events;
mod funding;
mod guard;
mod math;
mod oracle;
mod registry;
mod swap;
mod transfer;
mod treasury;
mod types;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, Env};

pub use oracle::{PriceFeed, PriceFeedClient, RoundData};
pub use registry::{PaymentRates, RegistryClient};
pub use types::{ExchangeConfig, ExchangeError, PaymentAsset, PriceQuote};

#[contract]
pub struct TokenExchange;

#[contractimpl]
impl TokenExchange {
    /// Initialize the exchange with its admin and configuration
    pub fn initialize(
        env: Env,
        admin: Address,
        config: ExchangeConfig,
    ) -> Result<(), ExchangeError> {
        admin.require_auth();
        config::init_config(&env, &admin, &config)
    }

    // Swaps

    /// Buy tokens with native currency; returns the tokens received
    pub fn buy_tokens(
        env: Env,
        buyer: Address,
        native_amount: i128,
    ) -> Result<i128, ExchangeError> {
        guard::enter(&env)?;
        let tokens = swap::buy_with_native(&env, buyer, native_amount)?;
        guard::exit(&env);
        Ok(tokens)
    }

    /// Buy tokens with a registered payment token the buyer approved beforehand
    pub fn buy_tokens_with_token(
        env: Env,
        buyer: Address,
        asset: Address,
        amount: i128,
    ) -> Result<i128, ExchangeError> {
        guard::enter(&env)?;
        let tokens = swap::buy_with_token(&env, buyer, asset, amount)?;
        guard::exit(&env);
        Ok(tokens)
    }

    /// Sell tokens back for native currency; returns the native amount paid
    pub fn sell_tokens_for_native(
        env: Env,
        seller: Address,
        token_amount: i128,
    ) -> Result<i128, ExchangeError> {
        guard::enter(&env)?;
        let paid = swap::sell_for_native(&env, seller, token_amount)?;
        guard::exit(&env);
        Ok(paid)
    }

    /// Sell tokens back for a registered payment token
    pub fn sell_tokens_for_token(
        env: Env,
        seller: Address,
        asset: Address,
        token_amount: i128,
    ) -> Result<i128, ExchangeError> {
        guard::enter(&env)?;
        let paid = swap::sell_for_token(&env, seller, asset, token_amount)?;
        guard::exit(&env);
        Ok(paid)
    }

    // Quotes

    pub fn get_native_price(env: Env) -> Result<PriceQuote, ExchangeError> {
        let config = config::get_config(&env)?;
        oracle::get_native_price(&env, &config)
    }

    /// Tokens `amount_in` of `asset` would buy right now
    pub fn quote_buy(
        env: Env,
        asset: PaymentAsset,
        amount_in: i128,
    ) -> Result<i128, ExchangeError> {
        swap::quote_buy(&env, asset, amount_in)
    }

    /// Amount of `asset` that selling `token_amount` would pay right now
    pub fn quote_sell(
        env: Env,
        asset: PaymentAsset,
        token_amount: i128,
    ) -> Result<i128, ExchangeError> {
        swap::quote_sell(&env, asset, token_amount)
    }

    // Treasury

    pub fn fund_sale_pool(env: Env, from: Address, amount: i128) -> Result<(), ExchangeError> {
        funding::fund_sale_pool(&env, from, amount)
    }

    pub fn deposit_native(env: Env, from: Address, amount: i128) -> Result<(), ExchangeError> {
        funding::deposit_native(&env, from, amount)
    }

    pub fn deposit_payment_token(
        env: Env,
        from: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(), ExchangeError> {
        funding::deposit_payment_token(&env, from, asset, amount)
    }

    pub fn withdraw_sale_tokens(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ExchangeError> {
        guard::enter(&env)?;
        funding::withdraw_sale_tokens(&env, caller, to, amount)?;
        guard::exit(&env);
        Ok(())
    }

    pub fn withdraw_payment(
        env: Env,
        caller: Address,
        asset: PaymentAsset,
        to: Address,
        amount: i128,
    ) -> Result<(), ExchangeError> {
        guard::enter(&env)?;
        funding::withdraw_payment(&env, caller, asset, to, amount)?;
        guard::exit(&env);
        Ok(())
    }

    /// Tokens available for sale
    pub fn token_balance(env: Env) -> Result<i128, ExchangeError> {
        config::get_config(&env)?;
        Ok(treasury::token_balance(&env))
    }

    /// Holdings of `asset` available for buy-backs
    pub fn payment_balance(env: Env, asset: PaymentAsset) -> Result<i128, ExchangeError> {
        config::get_config(&env)?;
        Ok(treasury::payment_balance(&env, &asset))
    }

    // Administration

    pub fn get_config(env: Env) -> Result<ExchangeConfig, ExchangeError> {
        config::get_config(&env)
    }

    pub fn admin(env: Env) -> Result<Address, ExchangeError> {
        admin::get_admin(&env)
    }

    pub fn set_price_feed(
        env: Env,
        caller: Address,
        price_feed: Address,
    ) -> Result<(), ExchangeError> {
        config::set_price_feed(&env, caller, price_feed)
    }

    pub fn set_max_price_age(
        env: Env,
        caller: Address,
        max_price_age: u64,
    ) -> Result<(), ExchangeError> {
        config::set_max_price_age(&env, caller, max_price_age)
    }

    pub fn set_payment_registry(
        env: Env,
        caller: Address,
        registry: Address,
    ) -> Result<(), ExchangeError> {
        config::set_registry(&env, caller, registry)
    }

    pub fn transfer_admin(
        env: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), ExchangeError> {
        admin::transfer_admin(&env, caller, new_admin)
    }
}
