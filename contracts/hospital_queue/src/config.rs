use common::ttl;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{events, types::Settings, validation, ContractError};

const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");
const SETTINGS: Symbol = symbol_short!("SETTINGS");

pub fn initialize(env: &Env, admin: Address) -> Result<(), ContractError> {
    if is_initialized(env) {
        return Err(ContractError::AlreadyInitialized);
    }

    env.storage().instance().set(&ADMIN, &admin);
    env.storage().instance().set(&INITIALIZED, &true);
    env.storage().instance().set(&SETTINGS, &Settings::default());
    ttl::extend_instance(env);

    events::publish_initialized(env, admin);

    Ok(())
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&ADMIN)
        .ok_or(ContractError::NotInitialized)
}

/// Current settings; defaults (UTC) until the contract is initialized.
pub fn settings(env: &Env) -> Settings {
    env.storage()
        .instance()
        .get(&SETTINGS)
        .unwrap_or_default()
}

pub fn update_settings(
    env: &Env,
    caller: Address,
    settings: Settings,
) -> Result<(), ContractError> {
    caller.require_auth();

    if caller != admin(env)? {
        return Err(ContractError::Unauthorized);
    }
    validation::validate_utc_offset(settings.utc_offset_minutes)?;

    env.storage().instance().set(&SETTINGS, &settings);
    ttl::extend_instance(env);

    events::publish_settings_updated(env, caller, settings.utc_offset_minutes);

    Ok(())
}
