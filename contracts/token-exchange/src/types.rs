use soroban_sdk::{contracterror, contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Config,
    TokenReserve,
    PaymentReserve(PaymentAsset),
    Locked,
}

/// Counter-asset of a swap: the native currency, or a registered payment token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PaymentAsset {
    Native,
    Token(Address),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExchangeConfig {
    /// Token sold from the sale pool
    pub token: Address,
    /// Stellar Asset Contract of the native currency
    pub native_asset: Address,
    pub price_feed: Address,
    pub registry: Address,
    /// Decimal places of `token`; fixes the conversion scale
    pub token_decimals: u32,
    /// Oldest acceptable oracle answer, in seconds
    pub max_price_age: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceQuote {
    pub price: i128,
    pub decimals: u32,
    pub updated_at: u64,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ExchangeError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    ZeroAmount = 4,
    NegativeAmount = 5,
    UnsupportedAsset = 6,
    InsufficientTreasury = 7,
    OracleUnavailable = 8,
    StalePrice = 9,
    InvalidPrice = 10,
    ReentrantCall = 11,
    TransferFailed = 12,
    ArithmeticOverflow = 13,
    AmountTooSmall = 14,
    InvalidConfig = 15,
    RegistryUnavailable = 16,
}
