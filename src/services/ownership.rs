use crate::integrations::TokenContractClient;
use crate::models::TokenId;

/// Walk index-based ownership: one `tokenOfOwnerByIndex` call per index in
/// `0..balance`, in order. A failed index logs a warning and leaves `None`
/// at that position; enumeration of the remaining indices continues. The
/// result always has exactly `balance` slots, and position `i` is the id
/// returned for enumeration index `i`.
///
/// `balance` is the claimed balance at the time the caller read it; a
/// transfer landing mid-walk can make the true holdings drift from it.
/// That window is inherent to index-based enumeration and is not
/// reconciled here.
pub async fn enumerate_owned_tokens(
    client: &dyn TokenContractClient,
    contract: &str,
    owner: &str,
    balance: u64,
) -> Vec<Option<TokenId>> {
    // The claimed balance is untrusted input; let the vec grow with the
    // loop instead of preallocating whatever the chain reported.
    let mut owned = Vec::new();

    for index in 0..balance {
        match client.token_of_owner_by_index(contract, owner, index).await {
            Ok(token_id) => owned.push(Some(token_id)),
            Err(e) => {
                tracing::warn!(
                    "tokenOfOwnerByIndex({}) call for owner {} resulted in error: {}",
                    index,
                    owner,
                    e
                );
                owned.push(None);
            }
        }
    }

    owned
}
