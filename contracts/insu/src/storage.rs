use crate::types::{AccessControl, Claim, Config, DataKey, InsuError, Policy};
use soroban_sdk::{Address, Env, Vec};

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub struct Storage;

impl Storage {
    pub fn extend_instance_ttl(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    fn extend_persistent_ttl(env: &Env, key: &DataKey) {
        env.storage().persistent().extend_ttl(
            key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    // ───────────── CONFIG & ROLES ─────────────

    pub fn has_config(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Config)
    }

    pub fn set_config(env: &Env, config: &Config) {
        env.storage().instance().set(&DataKey::Config, config);
    }

    pub fn get_config(env: &Env) -> Result<Config, InsuError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(InsuError::NotInitialized)
    }

    pub fn set_access(env: &Env, access: &AccessControl) {
        env.storage().instance().set(&DataKey::Access, access);
    }

    pub fn get_access(env: &Env) -> Result<AccessControl, InsuError> {
        env.storage()
            .instance()
            .get(&DataKey::Access)
            .ok_or(InsuError::NotInitialized)
    }

    // ───────────── COUNTERS & POOL ─────────────

    /// Returns the next id for `counter` and advances it.
    pub fn next_id(env: &Env, counter: &DataKey) -> u64 {
        let id: u64 = env.storage().instance().get(counter).unwrap_or(0);
        env.storage().instance().set(counter, &(id + 1));
        id
    }

    pub fn get_counter(env: &Env, counter: &DataKey) -> u64 {
        env.storage().instance().get(counter).unwrap_or(0)
    }

    pub fn get_pool(env: &Env) -> i128 {
        env.storage().instance().get(&DataKey::Pool).unwrap_or(0)
    }

    pub fn set_pool(env: &Env, amount: i128) {
        env.storage().instance().set(&DataKey::Pool, &amount);
    }

    // ───────────── POLICIES ─────────────

    pub fn get_policy(env: &Env, insured: &Address) -> Option<Policy> {
        let key = DataKey::Policy(insured.clone());
        let policy = env.storage().persistent().get(&key);
        if policy.is_some() {
            Self::extend_persistent_ttl(env, &key);
        }
        policy
    }

    pub fn load_policy(env: &Env, insured: &Address) -> Result<Policy, InsuError> {
        Self::get_policy(env, insured).ok_or(InsuError::PolicyNotFound)
    }

    pub fn set_policy(env: &Env, policy: &Policy) {
        let key = DataKey::Policy(policy.insured.clone());
        env.storage().persistent().set(&key, policy);
        Self::extend_persistent_ttl(env, &key);
    }

    // ───────────── CLAIMS ─────────────

    pub fn get_claim(env: &Env, claim_id: u64) -> Option<Claim> {
        let key = DataKey::Claim(claim_id);
        let claim = env.storage().persistent().get(&key);
        if claim.is_some() {
            Self::extend_persistent_ttl(env, &key);
        }
        claim
    }

    pub fn set_claim(env: &Env, claim: &Claim) {
        let key = DataKey::Claim(claim.claim_id);
        env.storage().persistent().set(&key, claim);
        Self::extend_persistent_ttl(env, &key);
    }

    pub fn get_user_claims(env: &Env, insured: &Address) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::UserClaims(insured.clone()))
            .unwrap_or(Vec::new(env))
    }

    /// Appends to the insured's claim history. The whole list is rewritten
    /// on each call; `submit_claim` caps its length at
    /// `MAX_CLAIMS_PER_INSURED`.
    pub fn add_user_claim(env: &Env, insured: &Address, claim_id: u64) {
        let key = DataKey::UserClaims(insured.clone());
        let mut claims = Self::get_user_claims(env, insured);
        claims.push_back(claim_id);
        env.storage().persistent().set(&key, &claims);
        Self::extend_persistent_ttl(env, &key);
    }
}
