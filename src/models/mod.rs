// src/models/mod.rs
pub mod token;
pub mod transaction;

// Re-export commonly used types so other modules can use `crate::models::X`
pub use token::{
    Decimals,
    MetadataDocument,
    NormalizedNftMetadata,
    RegistryEntry,
    TokenDescriptor,
    TokenId,
};
pub use transaction::{
    InitialTransaction,
    PrimaryTransaction,
    TransactionGroup,
    TransactionStatus,
    TransactionType,
    TxParams,
};
