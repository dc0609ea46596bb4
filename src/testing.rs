// Hand-rolled mock capabilities for unit tests.

use crate::error::{AppError, Result};
use crate::integrations::{MetadataFetcher, TokenContractClient};
use crate::models::TokenId;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Programmable contract: `None` slots make the corresponding call fail.
#[derive(Default)]
pub(crate) struct MockChain {
    pub symbol: Option<String>,
    pub decimals: Option<String>,
    pub balance: Option<String>,
    /// Result of `tokenOfOwnerByIndex` per index; `None` fails that index.
    pub tokens: Vec<Option<TokenId>>,
    /// `tokenURI` per token id; missing ids fail.
    pub uris: HashMap<TokenId, String>,
    /// Delay applied to every `tokenURI` call, for in-flight cancellation
    /// tests.
    pub uri_delay_ms: u64,

    pub symbol_calls: AtomicUsize,
    pub decimals_calls: AtomicUsize,
    pub balance_calls: AtomicUsize,
    pub index_calls: AtomicUsize,
    pub uri_calls: AtomicUsize,
}

#[async_trait]
impl TokenContractClient for MockChain {
    async fn symbol(&self, contract: &str) -> Result<String> {
        self.symbol_calls.fetch_add(1, Ordering::SeqCst);
        self.symbol
            .clone()
            .ok_or_else(|| AppError::ContractCall(format!("symbol() reverted for {}", contract)))
    }

    async fn decimals(&self, contract: &str) -> Result<String> {
        self.decimals_calls.fetch_add(1, Ordering::SeqCst);
        self.decimals
            .clone()
            .ok_or_else(|| AppError::ContractCall(format!("decimals() reverted for {}", contract)))
    }

    async fn balance_of(&self, contract: &str, _owner: &str) -> Result<String> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        self.balance.clone().ok_or_else(|| {
            AppError::ContractCall(format!("balanceOf() reverted for {}", contract))
        })
    }

    async fn token_of_owner_by_index(
        &self,
        contract: &str,
        _owner: &str,
        index: u64,
    ) -> Result<TokenId> {
        self.index_calls.fetch_add(1, Ordering::SeqCst);
        self.tokens
            .get(index as usize)
            .cloned()
            .flatten()
            .ok_or_else(|| {
                AppError::ContractCall(format!(
                    "tokenOfOwnerByIndex({}) reverted for {}",
                    index, contract
                ))
            })
    }

    async fn token_uri(&self, contract: &str, token_id: &TokenId) -> Result<String> {
        self.uri_calls.fetch_add(1, Ordering::SeqCst);
        if self.uri_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.uri_delay_ms)).await;
        }
        self.uris.get(token_id).cloned().ok_or_else(|| {
            AppError::ContractCall(format!("tokenURI({}) reverted for {}", token_id, contract))
        })
    }
}

/// Programmable fetcher: unknown URLs fail, known URLs return their body.
#[derive(Default)]
pub(crate) struct MockFetcher {
    pub documents: HashMap<String, serde_json::Value>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl MetadataFetcher for MockFetcher {
    async fn fetch_json(&self, url: &str, _cache_refresh: Duration) -> Result<serde_json::Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::MetadataFetch(format!("GET {} failed", url)))
    }
}
