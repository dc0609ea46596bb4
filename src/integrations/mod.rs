// External capabilities: the contract RPC seam and the cached HTTP fetcher.
pub mod contract;
pub mod fetch_cache;

pub use contract::TokenContractClient;
pub use fetch_cache::{CachedHttpClient, MetadataFetcher};
