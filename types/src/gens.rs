//! Contains functions for generating arbitrary values for use by
//! [`Proptest`](https://crates.io/crates/proptest).

use alloc::string::String;
use alloc::vec::Vec;

use proptest::{
    array,
    collection::vec,
    prelude::{any, prop_oneof, Strategy},
};

use crate::{
    Address, Amount, ContractId, DataEntry, DbKey, FuncIdx, FunctionCall, PublicKey, ShortBytes,
    ShortText, StateMapIdx, StateVarIdx, Timestamp, TokenId,
};

/// Returns a strategy for a [`PublicKey`] of arbitrary bytes.
pub fn public_key_arb() -> impl Strategy<Value = PublicKey> {
    array::uniform32(any::<u8>()).prop_map(PublicKey::new)
}

/// Returns a strategy for an [`Address`] of arbitrary bytes.
pub fn address_arb() -> impl Strategy<Value = Address> {
    array::uniform26(any::<u8>()).prop_map(Address::new)
}

/// Returns a strategy for a [`ContractId`] of arbitrary bytes.
pub fn contract_id_arb() -> impl Strategy<Value = ContractId> {
    array::uniform26(any::<u8>()).prop_map(ContractId::new)
}

/// Returns a strategy for a [`TokenId`] of arbitrary bytes.
pub fn token_id_arb() -> impl Strategy<Value = TokenId> {
    array::uniform30(any::<u8>()).prop_map(TokenId::new)
}

/// Returns a strategy for an [`Amount`] over the full `u64` range.
pub fn amount_arb() -> impl Strategy<Value = Amount> {
    any::<u64>().prop_map(Amount::new)
}

/// Returns a strategy for a [`Timestamp`] over the full `i64` range.
pub fn timestamp_arb() -> impl Strategy<Value = Timestamp> {
    any::<i64>().prop_map(Timestamp::from_nanos)
}

/// Returns a strategy for a short alphanumeric [`ShortText`].
pub fn short_text_arb() -> impl Strategy<Value = ShortText> {
    // Bounded well under the u16 payload cap to keep cases fast.
    "[a-zA-Z0-9 ]{0,64}".prop_map(|text: String| {
        ShortText::try_new(text).unwrap_or_else(|error| panic!("valid short text: {}", error))
    })
}

/// Returns a strategy for a [`ShortBytes`] of up to 64 arbitrary bytes.
pub fn short_bytes_arb() -> impl Strategy<Value = ShortBytes> {
    vec(any::<u8>(), 0..64).prop_map(|bytes: Vec<u8>| {
        ShortBytes::try_new(bytes).unwrap_or_else(|error| panic!("valid short bytes: {}", error))
    })
}

/// Returns a strategy covering every [`DataEntry`] variant.
pub fn data_entry_arb() -> impl Strategy<Value = DataEntry> {
    prop_oneof![
        public_key_arb().prop_map(DataEntry::PublicKey),
        address_arb().prop_map(DataEntry::Address),
        amount_arb().prop_map(DataEntry::Amount),
        any::<u32>().prop_map(DataEntry::Int32),
        short_text_arb().prop_map(DataEntry::Text),
        contract_id_arb().prop_map(DataEntry::ContractId),
        token_id_arb().prop_map(DataEntry::TokenId),
        timestamp_arb().prop_map(DataEntry::Timestamp),
        any::<bool>().prop_map(DataEntry::Boolean),
        short_bytes_arb().prop_map(DataEntry::Bytes),
        amount_arb().prop_map(DataEntry::Balance),
    ]
}

/// Returns a strategy for a [`FuncIdx`] over the full code range.
pub fn func_idx_arb() -> impl Strategy<Value = FuncIdx> {
    any::<u16>().prop_map(FuncIdx::new)
}

/// Returns a strategy for a [`StateVarIdx`] over the full code range.
pub fn state_var_idx_arb() -> impl Strategy<Value = StateVarIdx> {
    any::<u8>().prop_map(StateVarIdx::new)
}

/// Returns a strategy for a [`StateMapIdx`] over the full code range.
pub fn state_map_idx_arb() -> impl Strategy<Value = StateMapIdx> {
    any::<u8>().prop_map(StateMapIdx::new)
}

/// Returns a strategy for a [`DbKey`] of either flavour.
pub fn db_key_arb() -> impl Strategy<Value = DbKey> {
    prop_oneof![
        state_var_idx_arb().prop_map(DbKey::state_var),
        (state_map_idx_arb(), data_entry_arb())
            .prop_map(|(index, sub_key)| DbKey::state_map(index, &sub_key)),
    ]
}

/// Returns a strategy for a [`FunctionCall`] with up to 7 arguments.
pub fn function_call_arb() -> impl Strategy<Value = FunctionCall> {
    (func_idx_arb(), vec(data_entry_arb(), 0..8))
        .prop_map(|(index, arguments)| FunctionCall::new(index, arguments))
}
