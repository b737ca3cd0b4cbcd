//! The supported contract types, their index catalogs, and the process-wide catalog registry.

pub mod lock;
pub mod stable_swap;
pub mod token;

use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt::{self, Display, Formatter};

use once_cell::race::OnceBox;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, FuncIdx, StateMapIdx, StateVarIdx};

/// A category of smart contract with its own fixed catalogs of functions and state slots.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ContractType {
    /// A token issuance contract.
    Token = 1,
    /// A token lock contract.
    Lock = 2,
    /// A stable-swap exchange contract.
    StableSwap = 3,
}

impl ContractType {
    /// Returns the wire tag of this contract type.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Returns the contract type for the given wire tag, or `None` if the tag is unassigned.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(ContractType::Token),
            2 => Some(ContractType::Lock),
            3 => Some(ContractType::StableSwap),
            _ => None,
        }
    }

    /// Returns the symbolic name of this contract type.
    pub fn name(self) -> &'static str {
        match self {
            ContractType::Token => "token",
            ContractType::Lock => "lock",
            ContractType::StableSwap => "stable_swap",
        }
    }

    /// Returns the contract type with the given symbolic name, or `None` if the name is unknown.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "token" => Some(ContractType::Token),
            "lock" => Some(ContractType::Lock),
            "stable_swap" => Some(ContractType::StableSwap),
            _ => None,
        }
    }
}

impl Display for ContractType {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Error returned when the registry is asked for a contract type it does not know.
///
/// Fatal to the specific request, not to the process.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UnsupportedContractType {
    /// No contract type is registered under the given wire tag.
    Tag(u8),
    /// No contract type is registered under the given name.
    Name(String),
}

impl Display for UnsupportedContractType {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            UnsupportedContractType::Tag(tag) => {
                write!(formatter, "unsupported contract type tag {}", tag)
            }
            UnsupportedContractType::Name(name) => {
                write!(formatter, "unsupported contract type name {:?}", name)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnsupportedContractType {}

/// The three catalogs of one contract type.
#[derive(Clone, Copy, Debug)]
pub struct ContractCatalogs {
    functions: Catalog<FuncIdx>,
    state_vars: Catalog<StateVarIdx>,
    state_maps: Catalog<StateMapIdx>,
}

impl ContractCatalogs {
    pub(crate) fn new(
        functions: Catalog<FuncIdx>,
        state_vars: Catalog<StateVarIdx>,
        state_maps: Catalog<StateMapIdx>,
    ) -> Self {
        ContractCatalogs {
            functions,
            state_vars,
            state_maps,
        }
    }

    /// Returns the catalog of callable entry points.
    pub fn functions(&self) -> &Catalog<FuncIdx> {
        &self.functions
    }

    /// Returns the catalog of singleton state variables.
    pub fn state_vars(&self) -> &Catalog<StateVarIdx> {
        &self.state_vars
    }

    /// Returns the catalog of keyed state families.
    pub fn state_maps(&self) -> &Catalog<StateMapIdx> {
        &self.state_maps
    }
}

/// The process-wide, immutable registry of every supported contract type's catalogs.
#[derive(Debug)]
pub struct ContractRegistry {
    entries: Vec<(ContractType, ContractCatalogs)>,
}

impl ContractRegistry {
    fn new() -> Self {
        ContractRegistry {
            entries: Vec::from([
                (ContractType::Token, token::catalogs()),
                (ContractType::Lock, lock::catalogs()),
                (ContractType::StableSwap, stable_swap::catalogs()),
            ]),
        }
    }

    /// Returns the catalogs of `contract_type`, or `None` if it is not registered.
    pub fn get(&self, contract_type: ContractType) -> Option<&ContractCatalogs> {
        self.entries
            .iter()
            .find(|(registered, _)| *registered == contract_type)
            .map(|(_, catalogs)| catalogs)
    }

    /// Returns the catalogs of the contract type with the given wire tag.
    pub fn catalogs_for_tag(&self, tag: u8) -> Result<&ContractCatalogs, UnsupportedContractType> {
        let contract_type =
            ContractType::from_tag(tag).ok_or(UnsupportedContractType::Tag(tag))?;
        self.get(contract_type)
            .ok_or(UnsupportedContractType::Tag(tag))
    }

    /// Returns the catalogs of the contract type with the given symbolic name.
    pub fn catalogs_for_name(
        &self,
        name: &str,
    ) -> Result<&ContractCatalogs, UnsupportedContractType> {
        let contract_type = ContractType::from_name(name)
            .ok_or_else(|| UnsupportedContractType::Name(String::from(name)))?;
        self.get(contract_type)
            .ok_or_else(|| UnsupportedContractType::Name(String::from(name)))
    }

    /// Returns an iterator over the registered contract types in registration order.
    pub fn contract_types(&self) -> impl Iterator<Item = ContractType> + '_ {
        self.entries.iter().map(|(contract_type, _)| *contract_type)
    }
}

/// Returns the process-wide contract catalog registry.
///
/// Initialised on first use from the static catalog definitions of every supported contract type;
/// read-only thereafter.
pub fn contract_registry() -> &'static ContractRegistry {
    static REGISTRY: OnceBox<ContractRegistry> = OnceBox::new();
    REGISTRY.get_or_init(|| Box::new(ContractRegistry::new()))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::catalog::CatalogIndex;

    #[test]
    fn registry_holds_all_supported_contract_types() {
        let registry = contract_registry();
        assert_eq!(
            registry.contract_types().collect::<Vec<_>>(),
            vec![
                ContractType::Token,
                ContractType::Lock,
                ContractType::StableSwap
            ]
        );
        for contract_type in registry.contract_types() {
            assert!(registry.get(contract_type).is_some());
            assert!(registry.catalogs_for_tag(contract_type.tag()).is_ok());
            assert!(registry.catalogs_for_name(contract_type.name()).is_ok());
        }
    }

    #[test]
    fn unknown_tag_and_name_are_unsupported() {
        let registry = contract_registry();
        assert_eq!(
            registry.catalogs_for_tag(0).unwrap_err(),
            UnsupportedContractType::Tag(0)
        );
        assert_eq!(
            registry.catalogs_for_tag(42).unwrap_err(),
            UnsupportedContractType::Tag(42)
        );
        assert_eq!(
            registry.catalogs_for_name("auction").unwrap_err(),
            UnsupportedContractType::Name(String::from("auction"))
        );
    }

    #[test]
    fn unsupported_errors_display_the_lookup_key() {
        // Display must not depend on the `std` feature.
        assert_eq!(
            alloc::format!("{}", UnsupportedContractType::Tag(42)),
            "unsupported contract type tag 42"
        );
        assert_eq!(
            alloc::format!("{}", UnsupportedContractType::Name(String::from("auction"))),
            "unsupported contract type name \"auction\""
        );
    }

    #[test]
    fn contract_type_tags_and_names_roundtrip() {
        for contract_type in [
            ContractType::Token,
            ContractType::Lock,
            ContractType::StableSwap,
        ] {
            assert_eq!(
                ContractType::from_tag(contract_type.tag()),
                Some(contract_type)
            );
            assert_eq!(
                ContractType::from_name(contract_type.name()),
                Some(contract_type)
            );
        }
    }

    fn assert_unique<I: CatalogIndex>(catalog: &crate::catalog::Catalog<I>) {
        let names: BTreeSet<_> = catalog.iter().map(|(name, _)| name).collect();
        let codes: BTreeSet<_> = catalog.iter().map(|(_, index)| index.code()).collect();
        assert_eq!(names.len(), catalog.len());
        assert_eq!(codes.len(), catalog.len());
    }

    #[test]
    fn every_catalog_of_every_contract_type_is_duplicate_free() {
        let registry = contract_registry();
        for contract_type in registry.contract_types() {
            let catalogs = registry.get(contract_type).unwrap();
            assert_unique(catalogs.functions());
            assert_unique(catalogs.state_vars());
            assert_unique(catalogs.state_maps());
        }
    }
}
