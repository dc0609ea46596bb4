use crate::{
    constants::{DEFAULT_DECIMALS, DEFAULT_SYMBOL},
    error::{AppError, Result},
    integrations::TokenContractClient,
    models::{Decimals, TokenDescriptor},
    registry::TokenRegistry,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Explicit memoization store for resolved token facts.
///
/// One entry per lowercased address, overwritten on re-resolution. Entries
/// live until `reset()` or drop; there is no eviction. Guarded by mutexes
/// (never held across await) so resolvers can be shared between tasks.
#[derive(Debug, Default)]
pub struct ResolverCache {
    info: Mutex<HashMap<String, TokenDescriptor>>,
    balances: Mutex<HashMap<String, String>>,
}

impl ResolverCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all memoized entries.
    pub fn reset(&self) {
        self.info.lock().expect("info cache poisoned").clear();
        self.balances.lock().expect("balance cache poisoned").clear();
    }

    fn info_hit(&self, key: &str) -> Option<TokenDescriptor> {
        self.info.lock().expect("info cache poisoned").get(key).cloned()
    }

    fn store_info(&self, key: String, descriptor: TokenDescriptor) {
        self.info
            .lock()
            .expect("info cache poisoned")
            .insert(key, descriptor);
    }

    fn balance_hit(&self, key: &str) -> Option<String> {
        self.balances
            .lock()
            .expect("balance cache poisoned")
            .get(key)
            .cloned()
    }

    fn store_balance(&self, key: String, balance: String) {
        self.balances
            .lock()
            .expect("balance cache poisoned")
            .insert(key, balance);
    }
}

/// Memoized symbol/decimals/balance resolution with static-registry
/// fallback. Contract failures never propagate: every absorbed failure is
/// logged at warn level and replaced by the registry entry or a default.
pub struct TokenInfoResolver {
    client: Arc<dyn TokenContractClient>,
    cache: Arc<ResolverCache>,
}

impl TokenInfoResolver {
    pub fn new(client: Arc<dyn TokenContractClient>, cache: Arc<ResolverCache>) -> Self {
        Self { client, cache }
    }

    /// Resolve symbol and decimals for `address`.
    ///
    /// Errors only on invalid input; a repeat call for the same address is
    /// served from the cache without touching the chain.
    pub async fn resolve_token_info(
        &self,
        address: &str,
        registry: &TokenRegistry,
    ) -> Result<TokenDescriptor> {
        let key = cache_key(address)?;
        if let Some(hit) = self.cache.info_hit(&key) {
            return Ok(hit);
        }

        let symbol = self.symbol_from_contract(address).await;
        let decimals = self.decimals_from_contract(address).await;

        let symbol = match symbol.filter(|s| !s.is_empty()) {
            Some(s) => Some(s),
            None => registry.get(address).and_then(|entry| entry.symbol.clone()),
        };
        // A zero-equivalent decimals result counts as a failed read and
        // falls through to the registry.
        let decimals = match decimals.filter(|d| !d.is_empty() && d != DEFAULT_DECIMALS) {
            Some(d) => Some(d),
            None => registry
                .get(address)
                .and_then(|entry| entry.decimals.as_ref().map(Decimals::as_string)),
        };

        let descriptor = TokenDescriptor {
            address: address.to_string(),
            symbol: symbol.unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
            decimals: decimals
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| DEFAULT_DECIMALS.to_string()),
            balance: None,
        };

        self.cache.store_info(key, descriptor.clone());
        Ok(descriptor)
    }

    /// Resolve the owner's balance for `address`. `None` means both the
    /// chain and the registry came up empty.
    pub async fn resolve_balance(
        &self,
        address: &str,
        registry: &TokenRegistry,
        owner: &str,
    ) -> Result<Option<String>> {
        let key = cache_key(address)?;
        if let Some(hit) = self.cache.balance_hit(&key) {
            return Ok(Some(hit));
        }

        match self.client.balance_of(address, owner).await {
            Ok(balance) if !balance.is_empty() => {
                self.cache.store_balance(key, balance.clone());
                Ok(Some(balance))
            }
            Ok(_) => Ok(registry.get(address).and_then(|entry| entry.balance.clone())),
            Err(e) => {
                tracing::warn!(
                    "balanceOf() call for token at address {} resulted in error: {}",
                    address,
                    e
                );
                Ok(registry.get(address).and_then(|entry| entry.balance.clone()))
            }
        }
    }

    async fn symbol_from_contract(&self, address: &str) -> Option<String> {
        match self.client.symbol(address).await {
            Ok(symbol) => Some(symbol),
            Err(e) => {
                tracing::warn!(
                    "symbol() call for token at address {} resulted in error: {}",
                    address,
                    e
                );
                None
            }
        }
    }

    async fn decimals_from_contract(&self, address: &str) -> Option<String> {
        match self.client.decimals(address).await {
            Ok(decimals) => Some(decimals),
            Err(e) => {
                tracing::warn!(
                    "decimals() call for token at address {} resulted in error: {}",
                    address,
                    e
                );
                None
            }
        }
    }
}

fn cache_key(address: &str) -> Result<String> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput(
            "Token address is empty".to_string(),
        ));
    }
    Ok(trimmed.to_ascii_lowercase())
}
