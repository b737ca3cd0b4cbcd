//! Catalogs, state-key builders and function-call builders for the lock contract type.
//!
//! A lock contract holds tokens on behalf of depositors until a per-account lock time
//! expires. Its single entry point extends the caller's lock time.

use alloc::vec::Vec;

use crate::{
    catalog::{Catalog, FuncIdx, StateMapIdx, StateVarIdx},
    contracts::ContractCatalogs,
    data_entry::{Address, DataEntry, InvalidFormat, Timestamp},
    db_key::DbKey,
    function_call::FunctionCall,
};

/// Function index of `lock`, extending the caller's lock time.
pub const FUNC_LOCK: FuncIdx = FuncIdx::new(0);

/// State variable holding the maker address.
pub const VAR_MAKER: StateVarIdx = StateVarIdx::new(0);
/// State variable holding the identifier of the locked token.
pub const VAR_TOKEN_ID: StateVarIdx = StateVarIdx::new(1);

/// State map of locked balances, keyed by address.
pub const MAP_CONTRACT_BALANCE: StateMapIdx = StateMapIdx::new(0);
/// State map of lock expiry times, keyed by address.
pub const MAP_CONTRACT_LOCK_TIME: StateMapIdx = StateMapIdx::new(1);

const FUNCTIONS: &[(&str, FuncIdx)] = &[("lock", FUNC_LOCK)];

const STATE_VARS: &[(&str, StateVarIdx)] = &[("maker", VAR_MAKER), ("token_id", VAR_TOKEN_ID)];

const STATE_MAPS: &[(&str, StateMapIdx)] = &[
    ("contract_balance", MAP_CONTRACT_BALANCE),
    ("contract_lock_time", MAP_CONTRACT_LOCK_TIME),
];

pub(crate) fn catalogs() -> ContractCatalogs {
    ContractCatalogs::new(
        Catalog::new(FUNCTIONS),
        Catalog::new(STATE_VARS),
        Catalog::new(STATE_MAPS),
    )
}

/// Returns the key of the maker address.
pub fn maker_key() -> DbKey {
    DbKey::state_var(VAR_MAKER)
}

/// Returns the key of the locked token identifier.
pub fn token_id_key() -> DbKey {
    DbKey::state_var(VAR_TOKEN_ID)
}

fn address_sub_key(address: &str) -> Result<DataEntry, InvalidFormat> {
    Address::from_formatted_str(address).map(DataEntry::Address)
}

/// Returns the key of the locked balance of `address` (base58).
pub fn contract_balance_key(address: &str) -> Result<DbKey, InvalidFormat> {
    Ok(DbKey::state_map(
        MAP_CONTRACT_BALANCE,
        &address_sub_key(address)?,
    ))
}

/// Returns the key of the lock expiry time of `address` (base58).
pub fn contract_lock_time_key(address: &str) -> Result<DbKey, InvalidFormat> {
    Ok(DbKey::state_map(
        MAP_CONTRACT_LOCK_TIME,
        &address_sub_key(address)?,
    ))
}

/// Builds the call extending the caller's lock time to `expire_at`.
pub fn lock_call(expire_at: Timestamp) -> FunctionCall {
    FunctionCall::new(FUNC_LOCK, Vec::from([DataEntry::Timestamp(expire_at)]))
}
