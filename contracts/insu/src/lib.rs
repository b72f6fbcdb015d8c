#![no_std]

use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env, Vec};

mod access;
mod events;
mod policy;
mod storage;
mod types;

pub use policy::Accrual;
pub use types::{AccessControl, Claim, ClaimStatus, Config, InsuError, Policy};

use storage::Storage;
use types::DataKey;

contractmeta!(
    key = "Description",
    val = "Insurance policy ledger with premium tracking and validator-approved claims"
);

//
// ──────────────────────────────────────────────────────────
// CONSTANTS
// ──────────────────────────────────────────────────────────
//

const SECONDS_PER_DAY: u64 = 86_400;
pub const DEFAULT_PAYMENT_PERIOD: u64 = 30 * SECONDS_PER_DAY;
pub const DEFAULT_MAX_MISSED_PAYMENTS: u32 = 3;
pub const MAX_CLAIMS_PER_INSURED: u32 = 50;

//
// ──────────────────────────────────────────────────────────
// CONTRACT
// ──────────────────────────────────────────────────────────
//

#[contract]
pub struct InsuContract;

#[contractimpl]
impl InsuContract {
    // ───────────── INITIALIZATION ─────────────

    /// Initialize the ledger. `owner` becomes the sole owner for the
    /// lifetime of the contract.
    ///
    /// # Arguments
    /// * `owner` - Deploying account
    /// * `payment_token` - Token used for premiums and claim payouts
    pub fn initialize(env: Env, owner: Address, payment_token: Address) -> Result<(), InsuError> {
        if Storage::has_config(&env) {
            return Err(InsuError::AlreadyInitialized);
        }
        owner.require_auth();

        let config = Config {
            payment_token,
            payment_period: DEFAULT_PAYMENT_PERIOD,
            max_missed_payments: DEFAULT_MAX_MISSED_PAYMENTS,
        };
        Storage::set_config(&env, &config);
        Storage::set_access(&env, &AccessControl::new(&env, owner));
        Storage::set_pool(&env, 0);
        Storage::extend_instance_ttl(&env);

        Ok(())
    }

    // ───────────── ACCESS CONTROL ─────────────

    pub fn add_validator(env: Env, caller: Address, validator: Address) -> Result<(), InsuError> {
        let mut access = Storage::get_access(&env)?;
        access.require_owner(&env, &caller)?;

        access.add_validator(validator.clone());
        Storage::set_access(&env, &access);
        Storage::extend_instance_ttl(&env);

        events::validator_added(&env, &validator);
        Ok(())
    }

    pub fn remove_validator(env: Env, caller: Address, validator: Address) -> Result<(), InsuError> {
        let mut access = Storage::get_access(&env)?;
        access.require_owner(&env, &caller)?;

        if access.remove_validator(&validator) {
            Storage::set_access(&env, &access);
            Storage::extend_instance_ttl(&env);
            events::validator_removed(&env, &validator);
        }
        Ok(())
    }

    // ───────────── POLICY MANAGEMENT ─────────────

    /// Create a policy for `insured` (owner only)
    ///
    /// # Arguments
    /// * `caller` - Must be the owner
    /// * `insured` - Address covered by the policy
    /// * `premium` - Amount due every payment period
    /// * `max_claim_amount` - Upper bound on a single claim payout
    /// * `expiry_date` - Unix timestamp after which the policy lapses, 0 for none
    ///
    /// # Returns
    /// * Policy ID
    pub fn create_policy(
        env: Env,
        caller: Address,
        insured: Address,
        premium: i128,
        max_claim_amount: i128,
        expiry_date: u64,
    ) -> Result<u64, InsuError> {
        let access = Storage::get_access(&env)?;
        access.require_owner(&env, &caller)?;

        if premium <= 0 || max_claim_amount <= 0 {
            return Err(InsuError::InvalidAmount);
        }

        let now = env.ledger().timestamp();
        if let Some(existing) = Storage::get_policy(&env, &insured) {
            if existing.is_in_force(now) {
                log!(&env, "policy {} still in force", existing.policy_id);
                return Err(InsuError::PolicyExists);
            }
        }

        let policy = Policy {
            policy_id: Storage::next_id(&env, &DataKey::PolicyCounter),
            insured,
            premium,
            max_claim_amount,
            expiry_date,
            is_active: true,
            created_at: now,
            last_payment_date: now,
            missed_payments: 0,
            accrued_until: now,
            premiums_paid: 0,
        };
        Storage::set_policy(&env, &policy);
        Storage::extend_instance_ttl(&env);

        events::policy_created(&env, &policy);
        Ok(policy.policy_id)
    }

    /// Cancel the policy of `insured`. Either the owner or the insured may
    /// cancel.
    pub fn cancel_policy(env: Env, caller: Address, insured: Address) -> Result<(), InsuError> {
        let access = Storage::get_access(&env)?;
        caller.require_auth();
        if !access.is_owner(&caller) && caller != insured {
            return Err(InsuError::Unauthorized);
        }

        let mut policy = Storage::load_policy(&env, &insured)?;
        if !policy.is_in_force(env.ledger().timestamp()) {
            return Err(InsuError::PolicyInactive);
        }

        policy.is_active = false;
        Storage::set_policy(&env, &policy);
        Storage::extend_instance_ttl(&env);

        events::policy_cancelled(&env, &policy);
        Ok(())
    }

    /// Pay a premium for `insured`. Anyone may pay on behalf of the insured.
    ///
    /// # Arguments
    /// * `payer` - Account the payment token is drawn from
    /// * `insured` - Policy being paid
    /// * `amount` - At least the policy premium
    pub fn make_payment(
        env: Env,
        payer: Address,
        insured: Address,
        amount: i128,
    ) -> Result<(), InsuError> {
        payer.require_auth();
        let config = Storage::get_config(&env)?;

        let mut policy = Storage::load_policy(&env, &insured)?;
        let now = env.ledger().timestamp();
        if !policy.is_in_force(now) {
            return Err(InsuError::PolicyInactive);
        }
        if amount < policy.premium {
            log!(&env, "payment {} below premium {}", amount, policy.premium);
            return Err(InsuError::InsufficientPayment);
        }

        let token_client = token::Client::new(&env, &config.payment_token);
        token_client.transfer(&payer, &env.current_contract_address(), &amount);

        policy.record_payment(amount, now);
        Storage::set_policy(&env, &policy);
        Storage::set_pool(&env, Storage::get_pool(&env) + amount);
        Storage::extend_instance_ttl(&env);

        events::payment_made(&env, &policy, &payer, amount);
        Ok(())
    }

    /// Fold lapsed payment periods into the missed-payment count of
    /// `insured`'s policy, cancelling it once the configured threshold is
    /// reached. Anyone may call; repeated calls without elapsed time only
    /// re-check the threshold.
    ///
    /// # Returns
    /// * Missed payments after the update
    pub fn update_missed_payments(env: Env, insured: Address) -> Result<u32, InsuError> {
        let config = Storage::get_config(&env)?;
        let mut policy = Storage::load_policy(&env, &insured)?;

        let outcome = policy.accrue_missed_payments(
            env.ledger().timestamp(),
            config.payment_period,
            config.max_missed_payments,
        );

        match outcome {
            Accrual::Unchanged => {}
            Accrual::Accrued(newly_missed) => {
                Storage::set_policy(&env, &policy);
                Storage::extend_instance_ttl(&env);
                events::payments_missed(&env, &policy, newly_missed);
            }
            Accrual::Cancelled(newly_missed) => {
                log!(&env, "policy {} cancelled after missed payments", policy.policy_id);
                Storage::set_policy(&env, &policy);
                Storage::extend_instance_ttl(&env);
                if newly_missed > 0 {
                    events::payments_missed(&env, &policy, newly_missed);
                }
                events::policy_cancelled(&env, &policy);
            }
        }

        Ok(policy.missed_payments)
    }

    // ───────────── CLAIM MANAGEMENT ─────────────

    /// Submit a claim against the insured's policy
    ///
    /// # Returns
    /// * Claim ID
    pub fn submit_claim(env: Env, insured: Address, amount: i128) -> Result<u64, InsuError> {
        insured.require_auth();
        Storage::get_config(&env)?;

        let policy = Storage::load_policy(&env, &insured)?;
        let now = env.ledger().timestamp();
        if !policy.is_in_force(now) {
            return Err(InsuError::PolicyInactive);
        }
        if policy.premiums_paid <= 0 {
            return Err(InsuError::PaymentRequired);
        }
        if amount <= 0 {
            return Err(InsuError::InvalidAmount);
        }
        if Storage::get_user_claims(&env, &insured).len() >= MAX_CLAIMS_PER_INSURED {
            return Err(InsuError::TooManyClaims);
        }

        let claim = Claim {
            claim_id: Storage::next_id(&env, &DataKey::ClaimCounter),
            policy_id: policy.policy_id,
            insured: insured.clone(),
            amount,
            submitted_at: now,
            status: ClaimStatus::Submitted,
            validator: None,
        };
        Storage::set_claim(&env, &claim);
        Storage::add_user_claim(&env, &insured, claim.claim_id);
        Storage::extend_instance_ttl(&env);

        events::claim_submitted(&env, &claim);
        Ok(claim.claim_id)
    }

    /// Approve a submitted claim (validators only)
    pub fn validate_claim(
        env: Env,
        caller: Address,
        insured: Address,
        claim_id: u64,
    ) -> Result<(), InsuError> {
        let access = Storage::get_access(&env)?;
        access.require_validator(&env, &caller)?;

        let mut claim = Self::load_claim(&env, &insured, claim_id)?;
        if claim.status != ClaimStatus::Submitted {
            return Err(InsuError::ClaimAlreadyValidated);
        }

        let policy = Storage::load_policy(&env, &insured)?;
        if policy.policy_id != claim.policy_id {
            // claim belongs to a policy that has since been replaced
            return Err(InsuError::PolicyInactive);
        }
        if claim.amount > policy.max_claim_amount {
            log!(&env, "claim {} exceeds max {}", claim.amount, policy.max_claim_amount);
            return Err(InsuError::ClaimLimitExceeded);
        }

        claim.status = ClaimStatus::Validated;
        claim.validator = Some(caller.clone());
        Storage::set_claim(&env, &claim);
        Storage::extend_instance_ttl(&env);

        events::claim_validated(&env, &claim, &caller);
        Ok(())
    }

    /// Pay out a validated claim to the insured (owner only)
    pub fn send_claim(
        env: Env,
        caller: Address,
        insured: Address,
        claim_id: u64,
    ) -> Result<(), InsuError> {
        let access = Storage::get_access(&env)?;
        access.require_owner(&env, &caller)?;
        let config = Storage::get_config(&env)?;

        let mut claim = Self::load_claim(&env, &insured, claim_id)?;
        match claim.status {
            ClaimStatus::Validated => {}
            ClaimStatus::Submitted => return Err(InsuError::ClaimNotValidated),
            ClaimStatus::Paid => return Err(InsuError::ClaimAlreadyPaid),
        }

        let pool = Storage::get_pool(&env);
        if pool < claim.amount {
            log!(&env, "pool {} cannot cover claim {}", pool, claim.amount);
            return Err(InsuError::InsufficientFunds);
        }

        let token_client = token::Client::new(&env, &config.payment_token);
        token_client.transfer(&env.current_contract_address(), &claim.insured, &claim.amount);

        Storage::set_pool(&env, pool - claim.amount);
        claim.status = ClaimStatus::Paid;
        Storage::set_claim(&env, &claim);
        Storage::extend_instance_ttl(&env);

        events::claim_paid(&env, &claim);
        Ok(())
    }

    // ───────────── ADMIN FUNCTIONS ─────────────

    /// Update the payment period (seconds) and the missed-payment threshold
    /// (owner only). Applies to every policy on its next accrual; periods
    /// already counted are not recounted.
    pub fn update_payment_terms(
        env: Env,
        caller: Address,
        payment_period: u64,
        max_missed_payments: u32,
    ) -> Result<(), InsuError> {
        let access = Storage::get_access(&env)?;
        access.require_owner(&env, &caller)?;

        if payment_period == 0 || max_missed_payments == 0 {
            return Err(InsuError::InvalidAmount);
        }

        let mut config = Storage::get_config(&env)?;
        config.payment_period = payment_period;
        config.max_missed_payments = max_missed_payments;
        Storage::set_config(&env, &config);
        Storage::extend_instance_ttl(&env);

        events::terms_updated(&env, &config);
        Ok(())
    }

    // ───────────── VIEW FUNCTIONS ─────────────

    pub fn owner(env: Env) -> Result<Address, InsuError> {
        Ok(Storage::get_access(&env)?.owner)
    }

    pub fn is_validator(env: Env, address: Address) -> bool {
        Storage::get_access(&env)
            .map(|access| access.is_validator(&address))
            .unwrap_or(false)
    }

    pub fn get_config(env: Env) -> Result<Config, InsuError> {
        Storage::get_config(&env)
    }

    pub fn get_policy(env: Env, insured: Address) -> Option<Policy> {
        Storage::get_policy(&env, &insured)
    }

    /// Total premiums paid into the current policy of `insured`
    pub fn premiums_paid(env: Env, insured: Address) -> i128 {
        Storage::get_policy(&env, &insured)
            .map(|policy| policy.premiums_paid)
            .unwrap_or(0)
    }

    pub fn get_claim(env: Env, claim_id: u64) -> Option<Claim> {
        Storage::get_claim(&env, claim_id)
    }

    /// Whether the claim has passed validation (paid claims included)
    pub fn is_claim_validated(env: Env, claim_id: u64) -> bool {
        matches!(
            Storage::get_claim(&env, claim_id).map(|claim| claim.status),
            Some(ClaimStatus::Validated) | Some(ClaimStatus::Paid)
        )
    }

    pub fn get_claims(env: Env, insured: Address) -> Vec<u64> {
        Storage::get_user_claims(&env, &insured)
    }

    pub fn get_pool_balance(env: Env) -> i128 {
        Storage::get_pool(&env)
    }

    pub fn get_policy_count(env: Env) -> u64 {
        Storage::get_counter(&env, &DataKey::PolicyCounter)
    }
}

impl InsuContract {
    fn load_claim(env: &Env, insured: &Address, claim_id: u64) -> Result<Claim, InsuError> {
        Storage::get_claim(env, claim_id)
            .filter(|claim| claim.insured == *insured)
            .ok_or(InsuError::ClaimNotFound)
    }
}
