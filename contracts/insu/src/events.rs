use crate::types::{Claim, Config, Policy};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub const VALIDATOR_ADDED: Symbol = symbol_short!("val_add");
pub const VALIDATOR_REMOVED: Symbol = symbol_short!("val_rm");
pub const POLICY_CREATED: Symbol = symbol_short!("pol_new");
pub const POLICY_CANCELLED: Symbol = symbol_short!("pol_cncl");
pub const PAYMENT_MADE: Symbol = symbol_short!("paid");
pub const PAYMENTS_MISSED: Symbol = symbol_short!("missed");
pub const CLAIM_SUBMITTED: Symbol = symbol_short!("clm_new");
pub const CLAIM_VALIDATED: Symbol = symbol_short!("clm_val");
pub const CLAIM_PAID: Symbol = symbol_short!("clm_paid");
pub const TERMS_UPDATED: Symbol = symbol_short!("terms_upd");

pub fn validator_added(env: &Env, validator: &Address) {
    env.events().publish((VALIDATOR_ADDED,), validator.clone());
}

pub fn validator_removed(env: &Env, validator: &Address) {
    env.events().publish((VALIDATOR_REMOVED,), validator.clone());
}

pub fn policy_created(env: &Env, policy: &Policy) {
    env.events().publish(
        (POLICY_CREATED,),
        (
            policy.policy_id,
            policy.insured.clone(),
            policy.premium,
            policy.max_claim_amount,
        ),
    );
}

pub fn policy_cancelled(env: &Env, policy: &Policy) {
    env.events().publish(
        (POLICY_CANCELLED, policy.insured.clone()),
        (policy.policy_id, policy.missed_payments),
    );
}

pub fn payment_made(env: &Env, policy: &Policy, payer: &Address, amount: i128) {
    env.events().publish(
        (PAYMENT_MADE, policy.insured.clone()),
        (policy.policy_id, payer.clone(), amount),
    );
}

pub fn payments_missed(env: &Env, policy: &Policy, newly_missed: u32) {
    env.events().publish(
        (PAYMENTS_MISSED, policy.insured.clone()),
        (policy.policy_id, newly_missed, policy.missed_payments),
    );
}

pub fn claim_submitted(env: &Env, claim: &Claim) {
    env.events().publish(
        (CLAIM_SUBMITTED, claim.insured.clone()),
        (claim.claim_id, claim.policy_id, claim.amount),
    );
}

pub fn claim_validated(env: &Env, claim: &Claim, validator: &Address) {
    env.events().publish(
        (CLAIM_VALIDATED, claim.insured.clone()),
        (claim.claim_id, validator.clone()),
    );
}

pub fn claim_paid(env: &Env, claim: &Claim) {
    env.events().publish(
        (CLAIM_PAID, claim.insured.clone()),
        (claim.claim_id, claim.amount),
    );
}

pub fn terms_updated(env: &Env, config: &Config) {
    env.events().publish(
        (TERMS_UPDATED,),
        (config.payment_period, config.max_missed_payments),
    );
}
