use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, Address, Env, IntoVal, Symbol, Val, Vec,
};

use payment_registry::{PaymentRegistry, PaymentRegistryClient};

use crate::{ExchangeConfig, PaymentAsset, RoundData, TokenExchange, TokenExchangeClient};

pub const E18: i128 = 1_000_000_000_000_000_000;
/// 300 native-currency units per token, 8 decimals
pub const NATIVE_PRICE: i128 = 300 * 100_000_000;
pub const FEED_DECIMALS: u32 = 8;
/// 100 payment-token units per token
pub const PAYMENT_RATE: i128 = 100 * E18;
pub const SALE_POOL: i128 = 10_000_000 * E18;
pub const NATIVE_RESERVE: i128 = 2 * E18;
pub const MAX_PRICE_AGE: u64 = 3_600;
pub const NOW: u64 = 1_700_000_000;

#[contracttype]
#[derive(Clone)]
pub enum FeedKey {
    Round,
    Offline,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FeedError {
    Offline = 1,
}

/// Aggregator stand-in answering whatever round the test stores.
#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    pub fn set_round(env: Env, round: RoundData) {
        env.storage().instance().set(&FeedKey::Round, &round);
    }

    pub fn set_offline(env: Env, offline: bool) {
        env.storage().instance().set(&FeedKey::Offline, &offline);
    }

    pub fn latest_round_data(env: Env) -> RoundData {
        let offline: bool = env
            .storage()
            .instance()
            .get(&FeedKey::Offline)
            .unwrap_or(false);
        if offline {
            panic_with_error!(&env, FeedError::Offline);
        }
        env.storage().instance().get(&FeedKey::Round).unwrap()
    }

    pub fn decimals(_env: Env) -> u32 {
        FEED_DECIMALS
    }
}

pub fn round(answer: i128, updated_at: u64) -> RoundData {
    RoundData {
        round_id: 7,
        answer,
        started_at: updated_at,
        updated_at,
        answered_in_round: 7,
    }
}

pub struct TestSetup {
    pub env: Env,
    pub client: TokenExchangeClient<'static>,
    pub registry: PaymentRegistryClient<'static>,
    pub feed: MockPriceFeedClient<'static>,
    pub contract_id: Address,
    pub admin: Address,
    pub token: Address,
    pub native: Address,
    pub payment_token: Address,
    pub buyer: Address,
}

impl TestSetup {
    /// Exchange with a 10,000,000 token sale pool, 2 native units of
    /// buy-back reserve and one registered payment token.
    pub fn new() -> Self {
        let setup = Self::unfunded();
        mint_tokens(&setup.env, &setup.token, &setup.admin, SALE_POOL);
        setup.client.fund_sale_pool(&setup.admin, &SALE_POOL);
        mint_tokens(&setup.env, &setup.native, &setup.admin, NATIVE_RESERVE);
        setup.client.deposit_native(&setup.admin, &NATIVE_RESERVE);
        setup
    }

    /// Initialized exchange with empty treasury
    pub fn unfunded() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(NOW);

        let admin = Address::generate(&env);
        let token = create_test_token(&env, &admin);
        let native = create_test_token(&env, &admin);
        let payment_token = create_test_token(&env, &admin);

        let registry_id = env.register(PaymentRegistry, ());
        let registry = PaymentRegistryClient::new(&env, &registry_id);
        registry.initialize(&admin);
        registry.set_payment_token_price(&admin, &payment_token, &PAYMENT_RATE);

        let feed_id = env.register(MockPriceFeed, ());
        let feed = MockPriceFeedClient::new(&env, &feed_id);
        feed.set_round(&round(NATIVE_PRICE, NOW));

        let contract_id = env.register(TokenExchange, ());
        let client = TokenExchangeClient::new(&env, &contract_id);
        client.initialize(
            &admin,
            &ExchangeConfig {
                token: token.clone(),
                native_asset: native.clone(),
                price_feed: feed_id,
                registry: registry_id,
                token_decimals: 18,
                max_price_age: MAX_PRICE_AGE,
            },
        );

        let buyer = Address::generate(&env);
        mint_tokens(&env, &native, &buyer, 10 * E18);
        mint_tokens(&env, &payment_token, &buyer, 10_000 * E18);

        Self {
            env,
            client,
            registry,
            feed,
            contract_id,
            admin,
            token,
            native,
            payment_token,
            buyer,
        }
    }

    pub fn advance_ledger_time(&self, seconds: u64) {
        self.env
            .ledger()
            .set_timestamp(self.env.ledger().timestamp() + seconds);
    }

    /// Let the exchange pull `amount` payment tokens from `owner`
    pub fn approve_payment(&self, owner: &Address, amount: i128) {
        let expiration = self.env.ledger().sequence() + 1_000;
        token::Client::new(&self.env, &self.payment_token).approve(
            owner,
            &self.contract_id,
            &amount,
            &expiration,
        );
    }

    /// Events the exchange itself published during the last invocation
    pub fn exchange_events(&self) -> Vec<(Address, Vec<Val>, Val)> {
        let mut events = Vec::new(&self.env);
        for event in self.env.events().all().iter() {
            if event.0 == self.contract_id {
                events.push_back(event);
            }
        }
        events
    }

    pub fn swap_event(
        &self,
        direction: &str,
        initiator: &Address,
        amount_in: i128,
        asset: PaymentAsset,
        amount_out: i128,
    ) -> (Address, Vec<Val>, Val) {
        (
            self.contract_id.clone(),
            (
                symbol_short!("swap"),
                Symbol::new(&self.env, direction),
                initiator.clone(),
            )
                .into_val(&self.env),
            (amount_in, asset, amount_out).into_val(&self.env),
        )
    }

    pub fn balance(&self, asset: &Address, account: &Address) -> i128 {
        get_token_balance(&self.env, asset, account)
    }
}

pub fn create_test_token(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone())
        .address()
}

pub fn mint_tokens(env: &Env, token_address: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, token_address).mint(to, &amount);
}

pub fn get_token_balance(env: &Env, token_address: &Address, account: &Address) -> i128 {
    token::Client::new(env, token_address).balance(account)
}
