/// Library constants

// Resolver defaults when both the chain and the registry come up empty
pub const DEFAULT_SYMBOL: &str = "";
pub const DEFAULT_DECIMALS: &str = "0";

// Metadata normalization
pub const PLACEHOLDER_IMAGE_URI: &str = "http://";
pub const IPFS_SCHEME: &str = "ipfs://";
pub const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";
pub const METADATA_CACHE_REFRESH_MS: u64 = 600_000; // 10 minutes

// Transaction list pagination
pub const PAGE_INCREMENT: usize = 10;

// Native currency used by the hide-tokens swap exception
pub const NATIVE_CURRENCY_SYMBOL: &str = "ETH";

// Swap router contracts keyed by chain id
pub const MAINNET_CHAIN_ID: &str = "0x1";
pub const BSC_CHAIN_ID: &str = "0x38";
pub const MAINNET_SWAPS_CONTRACT: &str = "0x881d40237659c251811cec9c364ef91dc08d300c";
pub const BSC_SWAPS_CONTRACT: &str = "0x1a1ec25dc08e98e5e93f1104b5e5cdd298707d31";
