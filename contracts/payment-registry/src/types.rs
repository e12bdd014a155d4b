use soroban_sdk::{contracterror, contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Entry(Address),
    Assets,
}

/// Conversion rate of one payment token, expressed as payment-token units
/// (in the payment token's own decimals) per one whole exchanged token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentAssetEntry {
    pub asset: Address,
    pub rate: i128,
    pub active: bool,
    pub updated_at: u64,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidRate = 4,
    NotRegistered = 5,
}
