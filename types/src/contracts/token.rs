//! Catalogs, state-key builders and function-call builders for the token contract type.
//!
//! Token balances live in per-account storage on the ledger rather than in contract state
//! maps, so the state-map catalog of this contract type is empty.

use alloc::vec::Vec;

use crate::{
    catalog::{Catalog, FuncIdx, StateMapIdx, StateVarIdx},
    contracts::ContractCatalogs,
    data_entry::{Address, Amount, ContractId, DataEntry, InvalidFormat},
    db_key::DbKey,
    function_call::FunctionCall,
};

/// Function index of `supersede`, replacing the token issuer.
pub const FUNC_SUPERSEDE: FuncIdx = FuncIdx::new(0);
/// Function index of `issue`, minting new tokens to the issuer.
pub const FUNC_ISSUE: FuncIdx = FuncIdx::new(1);
/// Function index of `destroy`, burning tokens held by the issuer.
pub const FUNC_DESTROY: FuncIdx = FuncIdx::new(2);
/// Function index of `send`, moving tokens from the caller to a recipient.
pub const FUNC_SEND: FuncIdx = FuncIdx::new(3);
/// Function index of `transfer`, moving tokens between arbitrary parties.
pub const FUNC_TRANSFER: FuncIdx = FuncIdx::new(4);
/// Function index of `deposit`, moving tokens into another contract.
pub const FUNC_DEPOSIT: FuncIdx = FuncIdx::new(5);
/// Function index of `withdraw`, moving tokens out of another contract.
pub const FUNC_WITHDRAW: FuncIdx = FuncIdx::new(6);
/// Function index of the read-only `total_supply` entry point.
pub const FUNC_TOTAL_SUPPLY: FuncIdx = FuncIdx::new(7);
/// Function index of the read-only `max_supply` entry point.
pub const FUNC_MAX_SUPPLY: FuncIdx = FuncIdx::new(8);
/// Function index of the read-only `balance_of` entry point.
pub const FUNC_BALANCE_OF: FuncIdx = FuncIdx::new(9);
/// Function index of the read-only `get_issuer` entry point.
pub const FUNC_GET_ISSUER: FuncIdx = FuncIdx::new(10);

/// State variable holding the issuer address.
pub const VAR_ISSUER: StateVarIdx = StateVarIdx::new(0);
/// State variable holding the maker address.
pub const VAR_MAKER: StateVarIdx = StateVarIdx::new(1);

const FUNCTIONS: &[(&str, FuncIdx)] = &[
    ("supersede", FUNC_SUPERSEDE),
    ("issue", FUNC_ISSUE),
    ("destroy", FUNC_DESTROY),
    ("send", FUNC_SEND),
    ("transfer", FUNC_TRANSFER),
    ("deposit", FUNC_DEPOSIT),
    ("withdraw", FUNC_WITHDRAW),
    ("total_supply", FUNC_TOTAL_SUPPLY),
    ("max_supply", FUNC_MAX_SUPPLY),
    ("balance_of", FUNC_BALANCE_OF),
    ("get_issuer", FUNC_GET_ISSUER),
];

const STATE_VARS: &[(&str, StateVarIdx)] = &[("issuer", VAR_ISSUER), ("maker", VAR_MAKER)];

const STATE_MAPS: &[(&str, StateMapIdx)] = &[];

pub(crate) fn catalogs() -> ContractCatalogs {
    ContractCatalogs::new(
        Catalog::new(FUNCTIONS),
        Catalog::new(STATE_VARS),
        Catalog::new(STATE_MAPS),
    )
}

/// Returns the key of the issuer address.
pub fn issuer_key() -> DbKey {
    DbKey::state_var(VAR_ISSUER)
}

/// Returns the key of the maker address.
pub fn maker_key() -> DbKey {
    DbKey::state_var(VAR_MAKER)
}

fn address_entry(address: &str) -> Result<DataEntry, InvalidFormat> {
    Address::from_formatted_str(address).map(DataEntry::Address)
}

fn contract_entry(contract_id: &str) -> Result<DataEntry, InvalidFormat> {
    ContractId::from_formatted_str(contract_id).map(DataEntry::ContractId)
}

/// Builds the call replacing the token issuer with `new_issuer` (base58 address).
pub fn supersede_call(new_issuer: &str) -> Result<FunctionCall, InvalidFormat> {
    let issuer = address_entry(new_issuer)?;
    Ok(FunctionCall::new(FUNC_SUPERSEDE, Vec::from([issuer])))
}

/// Builds the call minting `amount` new tokens to the issuer.
pub fn issue_call(amount: Amount) -> FunctionCall {
    FunctionCall::new(FUNC_ISSUE, Vec::from([DataEntry::Amount(amount)]))
}

/// Builds the call burning `amount` tokens held by the issuer.
pub fn destroy_call(amount: Amount) -> FunctionCall {
    FunctionCall::new(FUNC_DESTROY, Vec::from([DataEntry::Amount(amount)]))
}

/// Builds the call sending `amount` tokens from the caller to `recipient` (base58 address).
pub fn send_call(recipient: &str, amount: Amount) -> Result<FunctionCall, InvalidFormat> {
    let recipient = address_entry(recipient)?;
    Ok(FunctionCall::new(
        FUNC_SEND,
        Vec::from([recipient, DataEntry::Amount(amount)]),
    ))
}

/// Builds the call transferring `amount` tokens from `sender` to `recipient` (base58
/// addresses).
pub fn transfer_call(
    sender: &str,
    recipient: &str,
    amount: Amount,
) -> Result<FunctionCall, InvalidFormat> {
    let sender = address_entry(sender)?;
    let recipient = address_entry(recipient)?;
    Ok(FunctionCall::new(
        FUNC_TRANSFER,
        Vec::from([sender, recipient, DataEntry::Amount(amount)]),
    ))
}

/// Builds the call depositing `amount` tokens from `sender` (base58 address) into the contract
/// `contract_id` (base58).
pub fn deposit_call(
    sender: &str,
    contract_id: &str,
    amount: Amount,
) -> Result<FunctionCall, InvalidFormat> {
    let sender = address_entry(sender)?;
    let contract = contract_entry(contract_id)?;
    Ok(FunctionCall::new(
        FUNC_DEPOSIT,
        Vec::from([sender, contract, DataEntry::Amount(amount)]),
    ))
}

/// Builds the call withdrawing `amount` tokens from the contract `contract_id` (base58) to
/// `recipient` (base58 address).
pub fn withdraw_call(
    contract_id: &str,
    recipient: &str,
    amount: Amount,
) -> Result<FunctionCall, InvalidFormat> {
    let contract = contract_entry(contract_id)?;
    let recipient = address_entry(recipient)?;
    Ok(FunctionCall::new(
        FUNC_WITHDRAW,
        Vec::from([contract, recipient, DataEntry::Amount(amount)]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bytesrepr::ToBytes, data_entry::DataType};

    // base58 of [7; 26].
    const ADDRESS: &str = "DUtgHVy7VgNgEy6AdRz5Eq39wEJvxWvorht";
    // base58 of [5; 26].
    const CONTRACT: &str = "9v4mdeGDvdQmbqMGAT8dAstFfjefYNNs3Mv";

    #[test]
    fn singleton_keys_are_state_var_codes() {
        assert_eq!(issuer_key().as_bytes(), &[VAR_ISSUER.value()]);
        assert_eq!(maker_key().as_bytes(), &[VAR_MAKER.value()]);
        assert_ne!(issuer_key(), maker_key());
    }

    #[test]
    fn state_map_catalog_is_empty() {
        assert!(catalogs().state_maps().is_empty());
        assert_eq!(catalogs().functions().len(), 11);
        assert_eq!(catalogs().state_vars().len(), 2);
    }

    #[test]
    fn send_call_matches_recorded_fixture() {
        let call = send_call(ADDRESS, Amount::new(500)).unwrap();

        let mut expected = vec![0u8, 3, 0, 2];
        expected.push(DataType::Address.tag());
        expected.extend_from_slice(&[7; 26]);
        expected.push(DataType::Amount.tag());
        expected.extend_from_slice(&500u64.to_be_bytes());
        assert_eq!(call.to_bytes().unwrap(), expected);
    }

    #[test]
    fn deposit_call_distinguishes_address_and_contract_arguments() {
        let call = deposit_call(ADDRESS, CONTRACT, Amount::new(1)).unwrap();
        let types: Vec<DataType> = call.arguments().iter().map(DataEntry::data_type).collect();
        assert_eq!(
            types,
            vec![DataType::Address, DataType::ContractId, DataType::Amount]
        );
    }

    #[test]
    fn invalid_identifiers_fail_call_construction() {
        assert!(supersede_call("!bad!").is_err());
        assert!(send_call("0OIl", Amount::zero()).is_err());
        assert!(transfer_call(ADDRESS, "!bad!", Amount::zero()).is_err());
        assert!(deposit_call(ADDRESS, "!bad!", Amount::zero()).is_err());
        assert!(withdraw_call("!bad!", ADDRESS, Amount::zero()).is_err());
    }
}
