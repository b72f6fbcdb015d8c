use soroban_sdk::{contracterror, contracttype, Address, Map};

//
// ──────────────────────────────────────────────────────────
// ERRORS
// ──────────────────────────────────────────────────────────
//

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum InsuError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Only the owner can perform this action.
    Unauthorized = 3,
    InvalidAmount = 4,
    PolicyNotFound = 5,
    /// An active policy already exists for this address.
    PolicyExists = 6,
    /// The policy is already cancelled or expired.
    PolicyInactive = 7,
    /// The premium amount is less.
    InsufficientPayment = 8,
    /// You have not made payment of a Premium!
    PaymentRequired = 9,
    ClaimNotFound = 10,
    ClaimAlreadyValidated = 11,
    /// The claim amount exceeds the maximum allowed.
    ClaimLimitExceeded = 12,
    /// This claim is not validated.
    ClaimNotValidated = 13,
    ClaimAlreadyPaid = 14,
    InsufficientFunds = 15,
    TooManyClaims = 16,
}

//
// ──────────────────────────────────────────────────────────
// DATA KEYS
// ──────────────────────────────────────────────────────────
//

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,              // Config
    Access,              // AccessControl
    PolicyCounter,       // u64, next policy id
    ClaimCounter,        // u64, next claim id
    Pool,                // i128 premiums held for payouts
    Policy(Address),     // Policy for insured
    Claim(u64),          // Claim by id
    UserClaims(Address), // Vec<u64> of an insured's claim ids
}

//
// ──────────────────────────────────────────────────────────
// RECORDS
// ──────────────────────────────────────────────────────────
//

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub payment_token: Address,   // Token used for premiums and payouts
    pub payment_period: u64,      // Seconds between expected premium payments
    pub max_missed_payments: u32, // Missed periods that force cancellation
}

/// Owner and validator roles.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessControl {
    pub owner: Address,
    pub validators: Map<Address, bool>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Policy {
    pub policy_id: u64,
    pub insured: Address,
    pub premium: i128,
    pub max_claim_amount: i128,
    pub expiry_date: u64, // 0 = open-ended
    pub is_active: bool,
    pub created_at: u64,
    pub last_payment_date: u64,
    pub missed_payments: u32,
    pub accrued_until: u64, // missed periods are counted up to this timestamp
    pub premiums_paid: i128,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClaimStatus {
    Submitted = 1,
    Validated = 2,
    Paid = 3,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Claim {
    pub claim_id: u64,
    pub policy_id: u64,
    pub insured: Address,
    pub amount: i128,
    pub submitted_at: u64,
    pub status: ClaimStatus,
    pub validator: Option<Address>,
}
