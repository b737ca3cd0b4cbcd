//! Types used to address and decode the persistent on-chain state of smart contracts deployed on
//! the Meridian network, and to construct the binary payloads that invoke contract functions in
//! transactions.
//!
//! The crate never performs network I/O: it only produces the byte keys and payloads consumed by a
//! transport layer, and decodes the raw bytes such a layer returns.
//!
//! # `no_std`
//!
//! By default, the library is `no_std`, however you can enable full `std` functionality by enabling
//! the crate's `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]
#![doc(html_root_url = "https://docs.rs/meridian-types/0.1.0")]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

pub mod base58;
pub mod bytesrepr;
mod catalog;
pub mod contracts;
mod data_entry;
mod db_key;
mod function_call;
#[cfg(any(feature = "gens", test))]
pub mod gens;

pub use catalog::{
    Catalog, CatalogError, CatalogIndex, CatalogKind, FuncIdx, StateMapIdx, StateVarIdx,
    FUNC_IDX_SERIALIZED_LENGTH, STATE_MAP_IDX_SERIALIZED_LENGTH, STATE_VAR_IDX_SERIALIZED_LENGTH,
};
pub use contracts::{
    contract_registry, ContractCatalogs, ContractRegistry, ContractType, UnsupportedContractType,
};
pub use data_entry::{
    Address, Amount, ContractId, DataEntry, DataType, InvalidFormat, MalformedValue, PublicKey,
    ShortBytes, ShortText, Timestamp, TokenId, ADDRESS_LENGTH, CONTRACT_ID_LENGTH,
    MAX_SHORT_PAYLOAD_LENGTH, PUBLIC_KEY_LENGTH, TOKEN_ID_LENGTH,
};
pub use db_key::{DbKey, StateMapRef};
pub use function_call::FunctionCall;
