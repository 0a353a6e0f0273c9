use std::collections::BTreeMap;

use address::{Address, ADDRESS_EMPTY};

use super::error::ParamError;

/// Name under which the admin address can be referenced in parameters.
pub const ADMIN_NAME: &str = "admin";

/// Addresses known to the runner when a case is invoked: the deploying admin
/// and every deployed contract, keyed by contract name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestContext {
    pub admin: Address,
    pub addr_map: BTreeMap<String, Address>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new(ADDRESS_EMPTY)
    }
}

impl TestContext {
    pub const fn new(admin: Address) -> Self {
        Self {
            admin,
            addr_map: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_contract(mut self, name: impl Into<String>, address: Address) -> Self {
        self.addr_map.insert(name.into(), address);
        self
    }

    /// Resolves a base58 address, the admin name or a contract name.
    pub fn resolve_address(&self, token: &str) -> Result<Address, ParamError> {
        if let Ok(address) = token.parse::<Address>() {
            return Ok(address);
        }
        if token.eq_ignore_ascii_case(ADMIN_NAME) {
            return Ok(self.admin);
        }
        self.addr_map
            .get(token)
            .copied()
            .ok_or_else(|| ParamError::UnknownAddress(token.to_string()))
    }
}
