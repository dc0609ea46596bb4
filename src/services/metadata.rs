use crate::{
    config::PipelineConfig,
    constants::{IPFS_SCHEME, PLACEHOLDER_IMAGE_URI},
    integrations::{MetadataFetcher, TokenContractClient},
    models::{MetadataDocument, NormalizedNftMetadata, TokenId},
};
use futures_util::future::join_all;
use std::time::Duration;

/// Resolve the metadata pointer for one token id. One contract call, no
/// caching at this layer; a failure logs a warning and yields `None`.
pub async fn resolve_token_uri(
    client: &dyn TokenContractClient,
    contract: &str,
    token_id: &TokenId,
) -> Option<String> {
    match client.token_uri(contract, token_id).await {
        Ok(uri) => Some(uri),
        Err(e) => {
            tracing::warn!(
                "tokenURI() call for token id {} resulted in error: {}",
                token_id,
                e
            );
            None
        }
    }
}

/// Fetch and normalize the document behind a metadata pointer.
///
/// Never fails: a missing URI, network error, non-JSON body, or document
/// without an `image` field all log a warning and yield the placeholder.
pub async fn normalize_metadata(
    fetcher: &dyn MetadataFetcher,
    config: &PipelineConfig,
    uri: Option<&str>,
) -> NormalizedNftMetadata {
    let Some(uri) = uri else {
        return placeholder();
    };

    let cache_refresh = Duration::from_millis(config.metadata_cache_refresh_ms);
    let body = match fetcher.fetch_json(uri, cache_refresh).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Metadata fetch for {} resulted in error: {}", uri, e);
            return placeholder();
        }
    };

    let document: MetadataDocument = match serde_json::from_value(body) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!("Metadata document at {} failed schema check: {}", uri, e);
            return placeholder();
        }
    };

    NormalizedNftMetadata {
        img_uri: rewrite_ipfs_uri(&document.image, &config.ipfs_gateway),
    }
}

/// Rewrite a leading `ipfs://` scheme to the configured gateway, preserving
/// the rest of the path. Ordinary URLs pass through unchanged.
pub fn rewrite_ipfs_uri(image: &str, gateway: &str) -> String {
    match image.strip_prefix(IPFS_SCHEME) {
        Some(rest) => format!("{}{}", gateway, rest),
        None => image.to_string(),
    }
}

/// Resolve metadata pointers for a batch of owned token ids, concurrently.
/// Position `i` of the output corresponds to `token_ids[i]`; a `None` slot
/// (failed enumeration) stays `None`.
///
/// The joined futures are infallible: `resolve_token_uri` has already
/// converted its failure into `None`, so the batch as a whole can never
/// reject. Keep it that way; an item-level error type here would make one
/// bad token fail the whole batch.
pub async fn resolve_token_uris(
    client: &dyn TokenContractClient,
    contract: &str,
    token_ids: &[Option<TokenId>],
) -> Vec<Option<String>> {
    join_all(token_ids.iter().map(|slot| async move {
        match slot {
            Some(token_id) => resolve_token_uri(client, contract, token_id).await,
            None => None,
        }
    }))
    .await
}

/// Normalize a batch of metadata pointers, concurrently and order-preserving.
/// Infallible for the same reason as `resolve_token_uris`: every item is
/// already a defined fallback value on failure.
pub async fn normalize_metadata_batch(
    fetcher: &dyn MetadataFetcher,
    config: &PipelineConfig,
    uris: &[Option<String>],
) -> Vec<NormalizedNftMetadata> {
    join_all(
        uris.iter()
            .map(|uri| normalize_metadata(fetcher, config, uri.as_deref())),
    )
    .await
}

/// URI resolution composed with normalization for a whole batch.
pub async fn resolve_metadata_batch(
    client: &dyn TokenContractClient,
    fetcher: &dyn MetadataFetcher,
    config: &PipelineConfig,
    contract: &str,
    token_ids: &[Option<TokenId>],
) -> (Vec<Option<String>>, Vec<NormalizedNftMetadata>) {
    let uris = resolve_token_uris(client, contract, token_ids).await;
    let metadata = normalize_metadata_batch(fetcher, config, &uris).await;
    (uris, metadata)
}

fn placeholder() -> NormalizedNftMetadata {
    NormalizedNftMetadata {
        img_uri: PLACEHOLDER_IMAGE_URI.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockChain, MockFetcher};
    use std::collections::HashMap;

    const CONTRACT: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    #[test]
    fn ipfs_scheme_is_rewritten_to_gateway() {
        assert_eq!(
            rewrite_ipfs_uri("ipfs://CID/1.png", "https://ipfs.io/ipfs/"),
            "https://ipfs.io/ipfs/CID/1.png"
        );
    }

    #[test]
    fn ordinary_urls_pass_through_unchanged() {
        assert_eq!(
            rewrite_ipfs_uri("https://example.com/1.png", "https://ipfs.io/ipfs/"),
            "https://example.com/1.png"
        );
    }

    #[test]
    fn only_a_leading_scheme_is_rewritten() {
        assert_eq!(
            rewrite_ipfs_uri("https://example.com/?u=ipfs://CID", "https://ipfs.io/ipfs/"),
            "https://example.com/?u=ipfs://CID"
        );
    }

    #[tokio::test]
    async fn missing_uri_yields_placeholder() {
        let fetcher = MockFetcher::default();
        let config = PipelineConfig::default();
        let meta = normalize_metadata(&fetcher, &config, None).await;
        assert_eq!(meta.img_uri, "http://");
    }

    #[tokio::test]
    async fn fetch_failure_yields_placeholder() {
        let fetcher = MockFetcher::default();
        let config = PipelineConfig::default();
        let meta = normalize_metadata(&fetcher, &config, Some("https://down/1.json")).await;
        assert_eq!(meta.img_uri, "http://");
    }

    #[tokio::test]
    async fn document_without_image_yields_placeholder() {
        let fetcher = MockFetcher {
            documents: HashMap::from([(
                "https://meta/1.json".to_string(),
                serde_json::json!({ "name": "no image here" }),
            )]),
            ..MockFetcher::default()
        };
        let config = PipelineConfig::default();
        let meta = normalize_metadata(&fetcher, &config, Some("https://meta/1.json")).await;
        assert_eq!(meta.img_uri, "http://");
    }

    #[tokio::test]
    async fn well_formed_document_is_rewritten() {
        let fetcher = MockFetcher {
            documents: HashMap::from([(
                "https://meta/1.json".to_string(),
                serde_json::json!({ "image": "ipfs://CID/1.png" }),
            )]),
            ..MockFetcher::default()
        };
        let config = PipelineConfig::default();
        let meta = normalize_metadata(&fetcher, &config, Some("https://meta/1.json")).await;
        assert_eq!(meta.img_uri, "https://ipfs.io/ipfs/CID/1.png");
    }

    #[tokio::test]
    async fn batch_preserves_positions_and_absorbs_failures() {
        let chain = MockChain {
            uris: HashMap::from([
                ("7".to_string(), "https://meta/7.json".to_string()),
                ("99".to_string(), "https://meta/99.json".to_string()),
            ]),
            ..MockChain::default()
        };
        let fetcher = MockFetcher {
            documents: HashMap::from([(
                "https://meta/7.json".to_string(),
                serde_json::json!({ "image": "ipfs://CID/7.png" }),
            )]),
            ..MockFetcher::default()
        };
        let config = PipelineConfig::default();

        // id "42" has no URI on chain; 99's document never fetches.
        let ids = vec![Some("7".to_string()), Some("42".to_string()), Some("99".to_string())];
        let (uris, metadata) =
            resolve_metadata_batch(&chain, &fetcher, &config, CONTRACT, &ids).await;

        assert_eq!(uris.len(), 3);
        assert_eq!(uris[0].as_deref(), Some("https://meta/7.json"));
        assert_eq!(uris[1], None);

        assert_eq!(metadata[0].img_uri, "https://ipfs.io/ipfs/CID/7.png");
        assert_eq!(metadata[1].img_uri, "http://");
        assert_eq!(metadata[2].img_uri, "http://");
    }
}
