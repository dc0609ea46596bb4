use serde::{Deserialize, Serialize};

/// Category assigned to a transaction by the transaction subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "simpleSend")]
    SimpleSend,
    #[serde(rename = "contractInteraction")]
    ContractInteraction,
    #[serde(rename = "contractDeployment")]
    DeployContract,
    #[serde(rename = "swap")]
    Swap,
    #[serde(rename = "swapApproval")]
    SwapApproval,
    #[serde(rename = "approve")]
    TokenMethodApprove,
    #[serde(rename = "transfer")]
    TokenMethodTransfer,
    #[serde(rename = "transferfrom")]
    TokenMethodTransferFrom,
    #[serde(rename = "incoming")]
    Incoming,
    #[serde(rename = "cancel")]
    Cancel,
    #[serde(rename = "retry")]
    Retry,
}

impl TransactionType {
    /// Token-category transactions: direct token-contract method calls.
    /// Swaps are deliberately not in this set; the hide-tokens filter
    /// special-cases them on their source/destination symbols.
    pub fn is_token_category(&self) -> bool {
        matches!(
            self,
            TransactionType::TokenMethodApprove
                | TransactionType::TokenMethodTransfer
                | TransactionType::TokenMethodTransferFrom
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Unapproved,
    Approved,
    Signed,
    Submitted,
    Pending,
    Confirmed,
    Failed,
    Dropped,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TxParams {
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
}

/// The transaction that started a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialTransaction {
    #[serde(default)]
    pub tx_params: TxParams,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default)]
    pub destination_token_symbol: Option<String>,
    #[serde(default)]
    pub source_token_symbol: Option<String>,
}

/// Latest outcome-bearing transaction of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryTransaction {
    pub status: TransactionStatus,
    #[serde(default)]
    pub err: Option<String>,
}

/// One display unit of history: the initiating transaction plus its primary
/// outcome. Created and nonce-ordered by the transaction subsystem; this
/// crate only reads and filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionGroup {
    pub nonce: String,
    pub initial_transaction: InitialTransaction,
    pub primary_transaction: PrimaryTransaction,
}
