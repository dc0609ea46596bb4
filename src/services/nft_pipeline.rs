use crate::{
    config::PipelineConfig,
    error::{AppError, Result},
    integrations::{MetadataFetcher, TokenContractClient},
    models::{NormalizedNftMetadata, TokenId},
    services::metadata::{normalize_metadata_batch, resolve_token_uris},
    services::ownership::enumerate_owned_tokens,
    utils::{parse_token_balance, validate_address},
};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

/// Where a pipeline run currently is. Replaces the original
/// mount-then-await-everything lifecycle with observable stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PipelineState {
    Idle,
    EnumeratingOwnership,
    ResolvingUris,
    ResolvingMetadata,
    Ready,
    Failed,
}

/// Result of one full pipeline run. All three vectors are position-aligned:
/// slot `i` everywhere belongs to enumeration index `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NftCollection {
    pub token_ids: Vec<Option<TokenId>>,
    pub token_uris: Vec<Option<String>>,
    pub metadata: Vec<NormalizedNftMetadata>,
}

/// The full resolution pipeline: claimed balance -> owned token ids ->
/// metadata pointers -> normalized metadata.
///
/// A run is cancellable at every stage boundary and suspension point; a
/// superseded run returns `AppError::Cancelled` and writes nothing, so a
/// later run can never race its state.
pub struct NftPipeline {
    client: Arc<dyn TokenContractClient>,
    fetcher: Arc<dyn MetadataFetcher>,
    config: PipelineConfig,
    state: Mutex<PipelineState>,
}

impl NftPipeline {
    pub fn new(
        client: Arc<dyn TokenContractClient>,
        fetcher: Arc<dyn MetadataFetcher>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            client,
            fetcher,
            config,
            state: Mutex::new(PipelineState::Idle),
        }
    }

    pub fn state(&self) -> PipelineState {
        *self.state.lock().expect("pipeline state poisoned")
    }

    /// Run the pipeline for one `(contract, owner)` pair.
    ///
    /// `balance` is the claimed balance (numeric string) read by the caller;
    /// holdings may drift from it while the run is in flight, and the run
    /// still yields exactly that many slots. Errors only for invalid input
    /// or cancellation; every chain/HTTP failure inside the stages has
    /// already been absorbed into `None`/placeholder slots.
    pub async fn run(
        &self,
        contract: &str,
        owner: &str,
        balance: &str,
        cancel: &CancellationToken,
    ) -> Result<NftCollection> {
        let balance = match self.validate_inputs(contract, owner, balance) {
            Ok(balance) => balance,
            Err(e) => {
                self.set_state(PipelineState::Failed);
                return Err(e);
            }
        };

        // Cancellation branches are biased first so an already-superseded
        // run never starts another stage.
        self.set_state(PipelineState::EnumeratingOwnership);
        let token_ids = tokio::select! {
            biased;
            _ = cancel.cancelled() => return self.abandon(),
            ids = enumerate_owned_tokens(self.client.as_ref(), contract, owner, balance) => ids,
        };

        self.set_state(PipelineState::ResolvingUris);
        let token_uris = tokio::select! {
            biased;
            _ = cancel.cancelled() => return self.abandon(),
            uris = resolve_token_uris(self.client.as_ref(), contract, &token_ids) => uris,
        };

        self.set_state(PipelineState::ResolvingMetadata);
        let metadata = tokio::select! {
            biased;
            _ = cancel.cancelled() => return self.abandon(),
            meta = normalize_metadata_batch(self.fetcher.as_ref(), &self.config, &token_uris) => meta,
        };

        self.set_state(PipelineState::Ready);
        Ok(NftCollection {
            token_ids,
            token_uris,
            metadata,
        })
    }

    fn validate_inputs(&self, contract: &str, owner: &str, balance: &str) -> Result<u64> {
        validate_address(contract)?;
        validate_address(owner)?;
        parse_token_balance(balance)
    }

    fn abandon(&self) -> Result<NftCollection> {
        tracing::debug!("NFT pipeline run abandoned");
        self.set_state(PipelineState::Idle);
        Err(AppError::Cancelled)
    }

    fn set_state(&self, state: PipelineState) {
        *self.state.lock().expect("pipeline state poisoned") = state;
    }
}
