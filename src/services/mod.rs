// All service modules
pub mod metadata;
pub mod nft_pipeline;
pub mod ownership;
pub mod token_resolver;
pub mod transaction_list;

// Re-export for convenience
pub use metadata::{normalize_metadata, resolve_metadata_batch, resolve_token_uri};
pub use nft_pipeline::{NftCollection, NftPipeline, PipelineState};
pub use ownership::enumerate_owned_tokens;
pub use token_resolver::{ResolverCache, TokenInfoResolver};
pub use transaction_list::{
    build_transaction_list, filter_transaction_groups, TransactionListPager, TransactionListView,
};
