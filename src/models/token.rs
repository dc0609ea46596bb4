use serde::{Deserialize, Serialize};

/// Per-contract NFT identifier. Opaque to this crate: contracts return
/// numeric ids but nothing here does arithmetic on them.
pub type TokenId = String;

/// Resolved token facts, keyed by contract address (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDescriptor {
    pub address: String,
    pub symbol: String,
    pub decimals: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
}

/// One static-registry record. Registry files in the wild carry `decimals`
/// as either a string or a number, so both shapes deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RegistryEntry {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub decimals: Option<Decimals>,
    #[serde(default)]
    pub balance: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Decimals {
    Text(String),
    Number(u32),
}

impl Decimals {
    pub fn as_string(&self) -> String {
        match self {
            Decimals::Text(s) => s.clone(),
            Decimals::Number(n) => n.to_string(),
        }
    }
}

/// The externally-fetched metadata document. Only `image` matters here;
/// unknown fields are ignored, a missing `image` fails deserialization and
/// takes the placeholder path.
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataDocument {
    pub image: String,
}

/// Normalized per-token metadata handed to presentation. `img_uri` is always
/// populated; failed resolutions carry the `"http://"` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedNftMetadata {
    #[serde(rename = "imgURI")]
    pub img_uri: String,
}
