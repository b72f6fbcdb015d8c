use crate::types::{AccessControl, InsuError};
use soroban_sdk::{log, Address, Env, Map};

impl AccessControl {
    pub fn new(env: &Env, owner: Address) -> Self {
        AccessControl {
            owner,
            validators: Map::new(env),
        }
    }

    pub fn is_owner(&self, address: &Address) -> bool {
        self.owner == *address
    }

    pub fn is_validator(&self, address: &Address) -> bool {
        self.validators.get(address.clone()).unwrap_or(false)
    }

    pub fn add_validator(&mut self, validator: Address) {
        self.validators.set(validator, true);
    }

    /// Returns `false` when `validator` was not in the set.
    pub fn remove_validator(&mut self, validator: &Address) -> bool {
        self.validators.remove(validator.clone()).is_some()
    }

    /// Authenticates `caller` and checks it holds the owner role.
    pub fn require_owner(&self, env: &Env, caller: &Address) -> Result<(), InsuError> {
        caller.require_auth();
        if !self.is_owner(caller) {
            log!(env, "owner-only call rejected for {}", caller.clone());
            return Err(InsuError::Unauthorized);
        }
        Ok(())
    }

    /// Authenticates `caller` and checks it holds the validator role.
    pub fn require_validator(&self, env: &Env, caller: &Address) -> Result<(), InsuError> {
        caller.require_auth();
        if !self.is_validator(caller) {
            log!(env, "validator-only call rejected for {}", caller.clone());
            return Err(InsuError::Unauthorized);
        }
        Ok(())
    }
}
