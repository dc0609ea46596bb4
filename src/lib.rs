//! Asynchronous token/NFT metadata resolution pipeline with memoization and
//! static-registry fallback, plus transaction-group filtering and
//! incremental-reveal pagination for wallet history views.
//!
//! The crate owns no transport: the contract RPC and the cached HTTP fetch
//! are capabilities ([`integrations::TokenContractClient`],
//! [`integrations::MetadataFetcher`]) supplied by the host. Chain and fetch
//! failures never escape the pipeline; they are logged and replaced by
//! documented fallback values. Only input validation and cancellation are
//! surfaced to callers.

pub mod config;
pub mod constants;
pub mod error;
pub mod integrations;
pub mod models;
pub mod registry;
pub mod services;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

pub use config::PipelineConfig;
pub use error::{AppError, Result};
pub use integrations::{CachedHttpClient, MetadataFetcher, TokenContractClient};
pub use models::{NormalizedNftMetadata, TokenDescriptor, TokenId, TransactionGroup};
pub use registry::TokenRegistry;
pub use services::{
    NftCollection, NftPipeline, PipelineState, ResolverCache, TokenInfoResolver,
    TransactionListPager,
};
