use crate::constants::{
    BSC_CHAIN_ID, BSC_SWAPS_CONTRACT, DEFAULT_IPFS_GATEWAY, MAINNET_CHAIN_ID,
    MAINNET_SWAPS_CONTRACT, METADATA_CACHE_REFRESH_MS, NATIVE_CURRENCY_SYMBOL, PAGE_INCREMENT,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    // Metadata normalization
    pub ipfs_gateway: String,
    pub metadata_cache_refresh_ms: u64,

    // Transaction list
    pub page_increment: usize,
    pub native_currency_symbol: String,

    // Swap router contract per chain id ("0x1" -> router address)
    pub swap_contracts: HashMap<String, String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let mut swap_contracts = HashMap::new();
        swap_contracts.insert(
            MAINNET_CHAIN_ID.to_string(),
            MAINNET_SWAPS_CONTRACT.to_string(),
        );
        swap_contracts.insert(BSC_CHAIN_ID.to_string(), BSC_SWAPS_CONTRACT.to_string());

        PipelineConfig {
            ipfs_gateway: DEFAULT_IPFS_GATEWAY.to_string(),
            metadata_cache_refresh_ms: METADATA_CACHE_REFRESH_MS,
            page_increment: PAGE_INCREMENT,
            native_currency_symbol: NATIVE_CURRENCY_SYMBOL.to_string(),
            swap_contracts,
        }
    }
}

impl PipelineConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = PipelineConfig::default();

        Ok(PipelineConfig {
            ipfs_gateway: env::var("NFT_IPFS_GATEWAY").unwrap_or(defaults.ipfs_gateway),
            metadata_cache_refresh_ms: env::var("NFT_METADATA_CACHE_REFRESH_MS")
                .unwrap_or_else(|_| METADATA_CACHE_REFRESH_MS.to_string())
                .parse()?,
            page_increment: env::var("NFT_PAGE_INCREMENT")
                .unwrap_or_else(|_| PAGE_INCREMENT.to_string())
                .parse()?,
            native_currency_symbol: env::var("NATIVE_CURRENCY_SYMBOL")
                .unwrap_or(defaults.native_currency_symbol),
            swap_contracts: defaults.swap_contracts,
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.ipfs_gateway.trim().is_empty() {
            anyhow::bail!("IPFS gateway is empty");
        }
        url::Url::parse(&self.ipfs_gateway)
            .map_err(|e| anyhow::anyhow!("Invalid IPFS gateway URL: {}", e))?;
        if !self.ipfs_gateway.ends_with('/') {
            tracing::warn!("IPFS gateway does not end with '/'; rewritten URIs may be malformed");
        }

        if self.page_increment == 0 {
            anyhow::bail!("Page increment must be > 0");
        }
        if self.metadata_cache_refresh_ms == 0 {
            tracing::warn!("Metadata cache refresh is 0 ms; every fetch will hit the network");
        }
        if self.native_currency_symbol.trim().is_empty() {
            tracing::warn!("Native currency symbol is empty; swap exception will never match");
        }

        Ok(())
    }

    /// Swap router contract for the active chain, if one is known.
    pub fn swaps_contract_for_chain(&self, chain_id: &str) -> Option<&str> {
        self.swap_contracts.get(chain_id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = PipelineConfig::default();
        config.validate().expect("defaults should validate");
        assert_eq!(config.metadata_cache_refresh_ms, 600_000);
        assert_eq!(config.page_increment, 10);
        assert_eq!(config.native_currency_symbol, "ETH");
    }

    #[test]
    fn zero_page_increment_is_rejected() {
        let config = PipelineConfig {
            page_increment: 0,
            ..PipelineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn swaps_contract_lookup_by_chain() {
        let config = PipelineConfig::default();
        assert_eq!(
            config.swaps_contract_for_chain("0x1"),
            Some("0x881d40237659c251811cec9c364ef91dc08d300c")
        );
        assert_eq!(config.swaps_contract_for_chain("0x539"), None);
    }
}
