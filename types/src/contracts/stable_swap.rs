//! Catalogs, state-key builders and function-call builders for the stable-swap contract type.
//!
//! A stable-swap contract holds a book of maker orders exchanging a base token for a target
//! token at bounded prices. This module only addresses and encodes its state; it never computes
//! swap prices.

use alloc::vec::Vec;

use crate::{
    catalog::{Catalog, FuncIdx, StateMapIdx, StateVarIdx},
    contracts::ContractCatalogs,
    data_entry::{Address, Amount, DataEntry, InvalidFormat, ShortBytes, Timestamp},
    db_key::DbKey,
    function_call::FunctionCall,
};

/// Function index of `supersede`, replacing the contract maker.
pub const FUNC_SUPERSEDE: FuncIdx = FuncIdx::new(0);
/// Function index of `set_order`, placing a new order.
pub const FUNC_SET_ORDER: FuncIdx = FuncIdx::new(1);
/// Function index of `update_order`, changing the terms of an existing order.
pub const FUNC_UPDATE_ORDER: FuncIdx = FuncIdx::new(2);
/// Function index of `order_deposit`, adding tokens to an order.
pub const FUNC_ORDER_DEPOSIT: FuncIdx = FuncIdx::new(3);
/// Function index of `order_withdraw`, removing tokens from an order.
pub const FUNC_ORDER_WITHDRAW: FuncIdx = FuncIdx::new(4);
/// Function index of `close_order`.
pub const FUNC_CLOSE_ORDER: FuncIdx = FuncIdx::new(5);
/// Function index of `swap_base_to_target`.
pub const FUNC_SWAP_BASE_TO_TARGET: FuncIdx = FuncIdx::new(6);
/// Function index of `swap_target_to_base`.
pub const FUNC_SWAP_TARGET_TO_BASE: FuncIdx = FuncIdx::new(7);

/// State variable holding the maker address.
pub const VAR_MAKER: StateVarIdx = StateVarIdx::new(0);
/// State variable holding the base token identifier.
pub const VAR_BASE_TOKEN_ID: StateVarIdx = StateVarIdx::new(1);
/// State variable holding the target token identifier.
pub const VAR_TARGET_TOKEN_ID: StateVarIdx = StateVarIdx::new(2);
/// State variable holding the maximum number of orders per user.
pub const VAR_MAX_ORDER_PER_USER: StateVarIdx = StateVarIdx::new(3);
/// State variable holding the base token price unit.
pub const VAR_BASE_PRICE_UNIT: StateVarIdx = StateVarIdx::new(4);
/// State variable holding the target token price unit.
pub const VAR_TARGET_PRICE_UNIT: StateVarIdx = StateVarIdx::new(5);

/// State map of base token balances, keyed by address.
pub const MAP_BASE_TOKEN_BALANCE: StateMapIdx = StateMapIdx::new(0);
/// State map of target token balances, keyed by address.
pub const MAP_TARGET_TOKEN_BALANCE: StateMapIdx = StateMapIdx::new(1);
/// State map of per-user order counts, keyed by address.
pub const MAP_USER_ORDERS: StateMapIdx = StateMapIdx::new(2);
/// State map of order owners, keyed by order id.
pub const MAP_ORDER_OWNER: StateMapIdx = StateMapIdx::new(3);
/// State map of base token fees, keyed by order id.
pub const MAP_FEE_BASE: StateMapIdx = StateMapIdx::new(4);
/// State map of target token fees, keyed by order id.
pub const MAP_FEE_TARGET: StateMapIdx = StateMapIdx::new(5);
/// State map of minimum base trade amounts, keyed by order id.
pub const MAP_MIN_BASE: StateMapIdx = StateMapIdx::new(6);
/// State map of maximum base trade amounts, keyed by order id.
pub const MAP_MAX_BASE: StateMapIdx = StateMapIdx::new(7);
/// State map of minimum target trade amounts, keyed by order id.
pub const MAP_MIN_TARGET: StateMapIdx = StateMapIdx::new(8);
/// State map of maximum target trade amounts, keyed by order id.
pub const MAP_MAX_TARGET: StateMapIdx = StateMapIdx::new(9);
/// State map of base token prices, keyed by order id.
pub const MAP_PRICE_BASE: StateMapIdx = StateMapIdx::new(10);
/// State map of target token prices, keyed by order id.
pub const MAP_PRICE_TARGET: StateMapIdx = StateMapIdx::new(11);
/// State map of locked base token amounts, keyed by order id.
pub const MAP_BASE_TOKEN_LOCKED: StateMapIdx = StateMapIdx::new(12);
/// State map of locked target token amounts, keyed by order id.
pub const MAP_TARGET_TOKEN_LOCKED: StateMapIdx = StateMapIdx::new(13);
/// State map of order statuses, keyed by order id.
pub const MAP_ORDER_STATUS: StateMapIdx = StateMapIdx::new(14);

const FUNCTIONS: &[(&str, FuncIdx)] = &[
    ("supersede", FUNC_SUPERSEDE),
    ("set_order", FUNC_SET_ORDER),
    ("update_order", FUNC_UPDATE_ORDER),
    ("order_deposit", FUNC_ORDER_DEPOSIT),
    ("order_withdraw", FUNC_ORDER_WITHDRAW),
    ("close_order", FUNC_CLOSE_ORDER),
    ("swap_base_to_target", FUNC_SWAP_BASE_TO_TARGET),
    ("swap_target_to_base", FUNC_SWAP_TARGET_TO_BASE),
];

const STATE_VARS: &[(&str, StateVarIdx)] = &[
    ("maker", VAR_MAKER),
    ("base_token_id", VAR_BASE_TOKEN_ID),
    ("target_token_id", VAR_TARGET_TOKEN_ID),
    ("max_order_per_user", VAR_MAX_ORDER_PER_USER),
    ("base_price_unit", VAR_BASE_PRICE_UNIT),
    ("target_price_unit", VAR_TARGET_PRICE_UNIT),
];

const STATE_MAPS: &[(&str, StateMapIdx)] = &[
    ("base_token_balance", MAP_BASE_TOKEN_BALANCE),
    ("target_token_balance", MAP_TARGET_TOKEN_BALANCE),
    ("user_orders", MAP_USER_ORDERS),
    ("order_owner", MAP_ORDER_OWNER),
    ("fee_base", MAP_FEE_BASE),
    ("fee_target", MAP_FEE_TARGET),
    ("min_base", MAP_MIN_BASE),
    ("max_base", MAP_MAX_BASE),
    ("min_target", MAP_MIN_TARGET),
    ("max_target", MAP_MAX_TARGET),
    ("price_base", MAP_PRICE_BASE),
    ("price_target", MAP_PRICE_TARGET),
    ("base_token_locked", MAP_BASE_TOKEN_LOCKED),
    ("target_token_locked", MAP_TARGET_TOKEN_LOCKED),
    ("order_status", MAP_ORDER_STATUS),
];

pub(crate) fn catalogs() -> ContractCatalogs {
    ContractCatalogs::new(
        Catalog::new(FUNCTIONS),
        Catalog::new(STATE_VARS),
        Catalog::new(STATE_MAPS),
    )
}

fn address_sub_key(address: &str) -> Result<DataEntry, InvalidFormat> {
    Address::from_formatted_str(address).map(DataEntry::Address)
}

fn order_sub_key(order_id: &str) -> Result<DataEntry, InvalidFormat> {
    ShortBytes::from_formatted_str(order_id).map(DataEntry::Bytes)
}

/// Returns the key of the maker address.
pub fn maker_key() -> DbKey {
    DbKey::state_var(VAR_MAKER)
}

/// Returns the key of the base token identifier.
pub fn base_token_id_key() -> DbKey {
    DbKey::state_var(VAR_BASE_TOKEN_ID)
}

/// Returns the key of the target token identifier.
pub fn target_token_id_key() -> DbKey {
    DbKey::state_var(VAR_TARGET_TOKEN_ID)
}

/// Returns the key of the maximum number of orders per user.
pub fn max_order_per_user_key() -> DbKey {
    DbKey::state_var(VAR_MAX_ORDER_PER_USER)
}

/// Returns the key of the base token price unit.
pub fn base_price_unit_key() -> DbKey {
    DbKey::state_var(VAR_BASE_PRICE_UNIT)
}

/// Returns the key of the target token price unit.
pub fn target_price_unit_key() -> DbKey {
    DbKey::state_var(VAR_TARGET_PRICE_UNIT)
}

/// Returns the key of the base token balance of `address` (base58).
pub fn base_token_balance_key(address: &str) -> Result<DbKey, InvalidFormat> {
    Ok(DbKey::state_map(
        MAP_BASE_TOKEN_BALANCE,
        &address_sub_key(address)?,
    ))
}

/// Returns the key of the target token balance of `address` (base58).
pub fn target_token_balance_key(address: &str) -> Result<DbKey, InvalidFormat> {
    Ok(DbKey::state_map(
        MAP_TARGET_TOKEN_BALANCE,
        &address_sub_key(address)?,
    ))
}

/// Returns the key of the order count of `address` (base58).
pub fn user_orders_key(address: &str) -> Result<DbKey, InvalidFormat> {
    Ok(DbKey::state_map(MAP_USER_ORDERS, &address_sub_key(address)?))
}

/// Returns the key of the owner of the order `order_id` (base58).
pub fn order_owner_key(order_id: &str) -> Result<DbKey, InvalidFormat> {
    Ok(DbKey::state_map(MAP_ORDER_OWNER, &order_sub_key(order_id)?))
}

/// Returns the key of the base token fee of the order `order_id` (base58).
pub fn fee_base_key(order_id: &str) -> Result<DbKey, InvalidFormat> {
    Ok(DbKey::state_map(MAP_FEE_BASE, &order_sub_key(order_id)?))
}

/// Returns the key of the target token fee of the order `order_id` (base58).
pub fn fee_target_key(order_id: &str) -> Result<DbKey, InvalidFormat> {
    Ok(DbKey::state_map(MAP_FEE_TARGET, &order_sub_key(order_id)?))
}

/// Returns the key of the minimum base trade amount of the order `order_id` (base58).
pub fn min_base_key(order_id: &str) -> Result<DbKey, InvalidFormat> {
    Ok(DbKey::state_map(MAP_MIN_BASE, &order_sub_key(order_id)?))
}

/// Returns the key of the maximum base trade amount of the order `order_id` (base58).
pub fn max_base_key(order_id: &str) -> Result<DbKey, InvalidFormat> {
    Ok(DbKey::state_map(MAP_MAX_BASE, &order_sub_key(order_id)?))
}

/// Returns the key of the minimum target trade amount of the order `order_id` (base58).
pub fn min_target_key(order_id: &str) -> Result<DbKey, InvalidFormat> {
    Ok(DbKey::state_map(MAP_MIN_TARGET, &order_sub_key(order_id)?))
}

/// Returns the key of the maximum target trade amount of the order `order_id` (base58).
pub fn max_target_key(order_id: &str) -> Result<DbKey, InvalidFormat> {
    Ok(DbKey::state_map(MAP_MAX_TARGET, &order_sub_key(order_id)?))
}

/// Returns the key of the base token price of the order `order_id` (base58).
pub fn price_base_key(order_id: &str) -> Result<DbKey, InvalidFormat> {
    Ok(DbKey::state_map(MAP_PRICE_BASE, &order_sub_key(order_id)?))
}

/// Returns the key of the target token price of the order `order_id` (base58).
pub fn price_target_key(order_id: &str) -> Result<DbKey, InvalidFormat> {
    Ok(DbKey::state_map(MAP_PRICE_TARGET, &order_sub_key(order_id)?))
}

/// Returns the key of the locked base token amount of the order `order_id` (base58).
pub fn base_token_locked_key(order_id: &str) -> Result<DbKey, InvalidFormat> {
    Ok(DbKey::state_map(
        MAP_BASE_TOKEN_LOCKED,
        &order_sub_key(order_id)?,
    ))
}

/// Returns the key of the locked target token amount of the order `order_id` (base58).
pub fn target_token_locked_key(order_id: &str) -> Result<DbKey, InvalidFormat> {
    Ok(DbKey::state_map(
        MAP_TARGET_TOKEN_LOCKED,
        &order_sub_key(order_id)?,
    ))
}

/// Returns the key of the status of the order `order_id` (base58).
pub fn order_status_key(order_id: &str) -> Result<DbKey, InvalidFormat> {
    Ok(DbKey::state_map(MAP_ORDER_STATUS, &order_sub_key(order_id)?))
}

/// Builds the call replacing the contract maker with `new_maker` (base58 address).
pub fn supersede_call(new_maker: &str) -> Result<FunctionCall, InvalidFormat> {
    let maker = address_sub_key(new_maker)?;
    Ok(FunctionCall::new(FUNC_SUPERSEDE, Vec::from([maker])))
}

/// Builds the call placing a new order with the given fees, trade bounds, prices and initial
/// deposits.
#[allow(clippy::too_many_arguments)]
pub fn set_order_call(
    fee_base: Amount,
    fee_target: Amount,
    min_base: Amount,
    max_base: Amount,
    min_target: Amount,
    max_target: Amount,
    price_base: Amount,
    price_target: Amount,
    base_deposit: Amount,
    target_deposit: Amount,
) -> FunctionCall {
    FunctionCall::new(
        FUNC_SET_ORDER,
        Vec::from([
            DataEntry::Amount(fee_base),
            DataEntry::Amount(fee_target),
            DataEntry::Amount(min_base),
            DataEntry::Amount(max_base),
            DataEntry::Amount(min_target),
            DataEntry::Amount(max_target),
            DataEntry::Amount(price_base),
            DataEntry::Amount(price_target),
            DataEntry::Amount(base_deposit),
            DataEntry::Amount(target_deposit),
        ]),
    )
}

/// Builds the call changing the terms of the order `order_id` (base58).
#[allow(clippy::too_many_arguments)]
pub fn update_order_call(
    order_id: &str,
    fee_base: Amount,
    fee_target: Amount,
    min_base: Amount,
    max_base: Amount,
    min_target: Amount,
    max_target: Amount,
    price_base: Amount,
    price_target: Amount,
) -> Result<FunctionCall, InvalidFormat> {
    let order = order_sub_key(order_id)?;
    Ok(FunctionCall::new(
        FUNC_UPDATE_ORDER,
        Vec::from([
            order,
            DataEntry::Amount(fee_base),
            DataEntry::Amount(fee_target),
            DataEntry::Amount(min_base),
            DataEntry::Amount(max_base),
            DataEntry::Amount(min_target),
            DataEntry::Amount(max_target),
            DataEntry::Amount(price_base),
            DataEntry::Amount(price_target),
        ]),
    ))
}

/// Builds the call adding `base_deposit` and `target_deposit` tokens to the order `order_id`
/// (base58).
pub fn order_deposit_call(
    order_id: &str,
    base_deposit: Amount,
    target_deposit: Amount,
) -> Result<FunctionCall, InvalidFormat> {
    let order = order_sub_key(order_id)?;
    Ok(FunctionCall::new(
        FUNC_ORDER_DEPOSIT,
        Vec::from([
            order,
            DataEntry::Amount(base_deposit),
            DataEntry::Amount(target_deposit),
        ]),
    ))
}

/// Builds the call removing `base_withdraw` and `target_withdraw` tokens from the order
/// `order_id` (base58).
pub fn order_withdraw_call(
    order_id: &str,
    base_withdraw: Amount,
    target_withdraw: Amount,
) -> Result<FunctionCall, InvalidFormat> {
    let order = order_sub_key(order_id)?;
    Ok(FunctionCall::new(
        FUNC_ORDER_WITHDRAW,
        Vec::from([
            order,
            DataEntry::Amount(base_withdraw),
            DataEntry::Amount(target_withdraw),
        ]),
    ))
}

/// Builds the call closing the order `order_id` (base58).
pub fn close_order_call(order_id: &str) -> Result<FunctionCall, InvalidFormat> {
    let order = order_sub_key(order_id)?;
    Ok(FunctionCall::new(FUNC_CLOSE_ORDER, Vec::from([order])))
}

/// Builds the call swapping `amount` base tokens into target tokens against the order `order_id`
/// (base58), paying at most `swap_fee` at price `price`, valid until `deadline`.
pub fn swap_base_to_target_call(
    order_id: &str,
    amount: Amount,
    swap_fee: Amount,
    price: Amount,
    deadline: Timestamp,
) -> Result<FunctionCall, InvalidFormat> {
    let order = order_sub_key(order_id)?;
    Ok(FunctionCall::new(
        FUNC_SWAP_BASE_TO_TARGET,
        Vec::from([
            order,
            DataEntry::Amount(amount),
            DataEntry::Amount(swap_fee),
            DataEntry::Amount(price),
            DataEntry::Timestamp(deadline),
        ]),
    ))
}

/// Builds the call swapping `amount` target tokens into base tokens against the order `order_id`
/// (base58), paying at most `swap_fee` at price `price`, valid until `deadline`.
pub fn swap_target_to_base_call(
    order_id: &str,
    amount: Amount,
    swap_fee: Amount,
    price: Amount,
    deadline: Timestamp,
) -> Result<FunctionCall, InvalidFormat> {
    let order = order_sub_key(order_id)?;
    Ok(FunctionCall::new(
        FUNC_SWAP_TARGET_TO_BASE,
        Vec::from([
            order,
            DataEntry::Amount(amount),
            DataEntry::Amount(swap_fee),
            DataEntry::Amount(price),
            DataEntry::Timestamp(deadline),
        ]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        base58,
        bytesrepr::ToBytes,
        data_entry::{DataType, ADDRESS_LENGTH},
    };

    // base58 of [7; 26].
    const ADDRESS: &str = "DUtgHVy7VgNgEy6AdRz5Eq39wEJvxWvorht";
    // base58 of [42; 32].
    const ORDER_ID: &str = "3qbR1eZRqXUWroWKKYhbDmR3FfqTHfqSU8zZSxtANzYh";

    #[test]
    fn maker_key_is_the_zero_state_var_code() {
        assert_eq!(maker_key().as_bytes(), &[0]);
        assert_eq!(maker_key().as_bytes(), &[VAR_MAKER.value()]);
    }

    #[test]
    fn base_token_balance_key_matches_recorded_fixture() {
        let key = base_token_balance_key(ADDRESS).unwrap();

        let mut expected = vec![MAP_BASE_TOKEN_BALANCE.value()];
        expected.push(DataType::Address.tag());
        expected.extend_from_slice(&[7; ADDRESS_LENGTH]);
        assert_eq!(key.as_bytes(), expected.as_slice());
    }

    #[test]
    fn order_status_key_matches_recorded_fixture() {
        let key = order_status_key(ORDER_ID).unwrap();

        let mut expected = vec![MAP_ORDER_STATUS.value()];
        expected.push(DataType::Bytes.tag());
        expected.extend_from_slice(&[0, 32]);
        expected.extend_from_slice(&[42; 32]);
        assert_eq!(key.as_bytes(), expected.as_slice());
    }

    #[test]
    fn invalid_order_id_fails_without_partial_key() {
        assert!(matches!(
            order_owner_key("not/base58"),
            Err(InvalidFormat::Base58(_))
        ));
        assert!(matches!(
            order_owner_key("0OIl"),
            Err(InvalidFormat::Base58(_))
        ));
    }

    #[test]
    fn invalid_address_fails_for_balance_keys() {
        assert!(matches!(
            base_token_balance_key(ORDER_ID),
            Err(InvalidFormat::UnexpectedLength {
                expected: ADDRESS_LENGTH,
                actual: 32
            })
        ));
    }

    #[test]
    fn keys_are_deterministic() {
        assert_eq!(
            base_token_balance_key(ADDRESS).unwrap(),
            base_token_balance_key(ADDRESS).unwrap()
        );
        assert_eq!(order_owner_key(ORDER_ID).unwrap(), order_owner_key(ORDER_ID).unwrap());
    }

    #[test]
    fn all_keys_are_pairwise_distinct() {
        let other_address = base58::encode([8u8; ADDRESS_LENGTH]);
        let other_order = base58::encode([43u8; 32]);

        let mut keys = vec![
            maker_key(),
            base_token_id_key(),
            target_token_id_key(),
            max_order_per_user_key(),
            base_price_unit_key(),
            target_price_unit_key(),
        ];
        for address in [ADDRESS, other_address.as_str()] {
            keys.push(base_token_balance_key(address).unwrap());
            keys.push(target_token_balance_key(address).unwrap());
            keys.push(user_orders_key(address).unwrap());
        }
        for order_id in [ORDER_ID, other_order.as_str()] {
            keys.push(order_owner_key(order_id).unwrap());
            keys.push(fee_base_key(order_id).unwrap());
            keys.push(fee_target_key(order_id).unwrap());
            keys.push(min_base_key(order_id).unwrap());
            keys.push(max_base_key(order_id).unwrap());
            keys.push(min_target_key(order_id).unwrap());
            keys.push(max_target_key(order_id).unwrap());
            keys.push(price_base_key(order_id).unwrap());
            keys.push(price_target_key(order_id).unwrap());
            keys.push(base_token_locked_key(order_id).unwrap());
            keys.push(target_token_locked_key(order_id).unwrap());
            keys.push(order_status_key(order_id).unwrap());
        }

        for (i, key) in keys.iter().enumerate() {
            for other in &keys[i + 1..] {
                assert_ne!(key, other);
            }
        }
    }

    #[test]
    fn catalog_lookups_match_constants() {
        let catalogs = catalogs();
        assert_eq!(catalogs.functions().index_of("set_order").unwrap(), FUNC_SET_ORDER);
        assert_eq!(catalogs.state_vars().index_of("maker").unwrap(), VAR_MAKER);
        assert_eq!(
            catalogs.state_maps().index_of("order_status").unwrap(),
            MAP_ORDER_STATUS
        );
        assert_eq!(catalogs.state_maps().name_of(MAP_USER_ORDERS).unwrap(), "user_orders");
        assert_eq!(catalogs.functions().len(), 8);
        assert_eq!(catalogs.state_vars().len(), 6);
        assert_eq!(catalogs.state_maps().len(), 15);
    }

    #[test]
    fn set_order_call_matches_recorded_fixture() {
        let call = set_order_call(
            Amount::new(1),
            Amount::new(2),
            Amount::new(3),
            Amount::new(4),
            Amount::new(5),
            Amount::new(6),
            Amount::new(7),
            Amount::new(8),
            Amount::new(9),
            Amount::new(10),
        );

        let mut expected = vec![0u8, 1, 0, 10];
        for value in 1..=10u64 {
            expected.push(DataType::Amount.tag());
            expected.extend_from_slice(&value.to_be_bytes());
        }
        assert_eq!(call.to_bytes().unwrap(), expected);
    }

    #[test]
    fn swap_call_carries_order_amounts_and_deadline() {
        let call = swap_base_to_target_call(
            ORDER_ID,
            Amount::new(100),
            Amount::new(1),
            Amount::new(50),
            Timestamp::from_nanos(1_700_000_000_000_000_000),
        )
        .unwrap();
        assert_eq!(call.function_index(), FUNC_SWAP_BASE_TO_TARGET);
        assert_eq!(call.arguments().len(), 5);

        let encoded = call.to_bytes().unwrap();
        assert_eq!(crate::FunctionCall::decode(&encoded).unwrap(), call);
    }

    #[test]
    fn invalid_identifiers_fail_call_construction() {
        assert!(supersede_call("!bad!").is_err());
        assert!(close_order_call("!bad!").is_err());
        assert!(update_order_call(
            "!bad!",
            Amount::zero(),
            Amount::zero(),
            Amount::zero(),
            Amount::zero(),
            Amount::zero(),
            Amount::zero(),
            Amount::zero(),
            Amount::zero(),
        )
        .is_err());
    }
}
