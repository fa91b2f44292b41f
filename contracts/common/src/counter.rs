use soroban_sdk::{Env, Symbol};

use crate::ttl;

/// Allocate and return the next id stored under `key` (1-based, monotonically increasing).
///
/// Counters live in instance storage so they survive removal of every record
/// they numbered; ids are never reused.
pub fn next_id(env: &Env, key: &Symbol) -> u64 {
    let next = current_id(env, key).saturating_add(1);
    env.storage().instance().set(key, &next);
    ttl::extend_instance(env);
    next
}

/// Last id handed out under `key`, or 0 when none has been.
pub fn current_id(env: &Env, key: &Symbol) -> u64 {
    env.storage().instance().get(key).unwrap_or(0u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::storage::Instance as _;
    use soroban_sdk::{contract, symbol_short};

    #[contract]
    pub struct Counters;

    #[test]
    fn ids_start_at_one_and_extend_instance_ttl() {
        let env = Env::default();
        let contract_id = env.register(Counters, ());
        let key = symbol_short!("TEST_CTR");

        env.as_contract(&contract_id, || {
            assert_eq!(current_id(&env, &key), 0);
            assert_eq!(next_id(&env, &key), 1);
            assert_eq!(next_id(&env, &key), 2);
            assert_eq!(current_id(&env, &key), 2);
            assert!(env.storage().instance().get_ttl() >= ttl::INSTANCE_TTL_THRESHOLD);
        });
    }
}
