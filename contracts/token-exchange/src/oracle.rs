use soroban_sdk::{contractclient, contracttype, log, Env};

use crate::types::{ExchangeConfig, ExchangeError, PriceQuote};

/// One answer of an aggregator-style price feed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundData {
    pub round_id: u64,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}

/// Native-currency price feed consumed by the exchange
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn latest_round_data(env: Env) -> RoundData;
    fn decimals(env: Env) -> u32;
}

/// Read and validate the current native-currency quote.
pub fn get_native_price(env: &Env, config: &ExchangeConfig) -> Result<PriceQuote, ExchangeError> {
    let feed = PriceFeedClient::new(env, &config.price_feed);

    let round = match feed.try_latest_round_data() {
        Ok(Ok(round)) => round,
        _ => return Err(ExchangeError::OracleUnavailable),
    };
    let decimals = match feed.try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => return Err(ExchangeError::OracleUnavailable),
    };

    if round.answer <= 0 {
        log!(env, "oracle answer rejected: {}", round.answer);
        return Err(ExchangeError::InvalidPrice);
    }

    // An answer carried over from an earlier round is as good as stale
    if round.updated_at == 0 || round.answered_in_round < round.round_id {
        return Err(ExchangeError::StalePrice);
    }

    let age = env.ledger().timestamp().saturating_sub(round.updated_at);
    if age > config.max_price_age {
        log!(env, "oracle answer too old: {} > {}", age, config.max_price_age);
        return Err(ExchangeError::StalePrice);
    }

    Ok(PriceQuote {
        price: round.answer,
        decimals,
        updated_at: round.updated_at,
    })
}
