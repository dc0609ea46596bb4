use crate::error::Result;
use crate::models::TokenId;
use async_trait::async_trait;

/// On-chain token contract capability.
///
/// Implemented by the host application over its RPC transport; this crate
/// only defines the seam. Every method may fail with
/// `AppError::ContractCall`; callers in this crate absorb those failures and
/// substitute fallback values rather than letting them escape.
#[async_trait]
pub trait TokenContractClient: Send + Sync {
    /// `symbol()` of the contract at `contract`.
    async fn symbol(&self, contract: &str) -> Result<String>;

    /// `decimals()` as a numeric string.
    async fn decimals(&self, contract: &str) -> Result<String>;

    /// `balanceOf(owner)` as a numeric string.
    async fn balance_of(&self, contract: &str, owner: &str) -> Result<String>;

    /// `tokenOfOwnerByIndex(owner, index)`.
    async fn token_of_owner_by_index(
        &self,
        contract: &str,
        owner: &str,
        index: u64,
    ) -> Result<TokenId>;

    /// `tokenURI(token_id)`: the metadata pointer for one NFT.
    async fn token_uri(&self, contract: &str, token_id: &TokenId) -> Result<String>;
}
