use crate::models::RegistryEntry;
use std::collections::HashMap;

/// Static token registry: known token metadata keyed by contract address.
/// Pure lookup, no network I/O. Keys are normalized to lowercase on insert
/// so lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    entries: HashMap<String, RegistryEntry>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a deserialized registry file (address -> entry, any case).
    pub fn from_map(entries: HashMap<String, RegistryEntry>) -> Self {
        let mut registry = Self::new();
        for (address, entry) in entries {
            registry.insert(&address, entry);
        }
        registry
    }

    pub fn insert(&mut self, address: &str, entry: RegistryEntry) {
        self.entries.insert(address.to_ascii_lowercase(), entry);
    }

    pub fn get(&self, address: &str) -> Option<&RegistryEntry> {
        if address.is_empty() {
            return None;
        }
        self.entries.get(&address.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
