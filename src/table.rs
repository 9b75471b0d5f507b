//! Key → address table with first-write-wins de-duplication.

use crate::model::Entry;
use std::collections::HashMap;

/// Address returned for keys that are not in the table.
pub const MISSING_ADDRESS: u64 = 0;

/// Lookup table keyed by `Class::Method` (or `Method`), in first-seen order.
#[derive(Debug, Default)]
pub struct SignatureTable {
    index: HashMap<String, usize>,
    rows: Vec<(String, u64)>,
}

impl SignatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries in input order.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry.signature.key(), entry.address);
        }
        table
    }

    /// Record `address` for `key` unless the key is already present.
    /// Returns whether the row was kept.
    pub fn insert(&mut self, key: String, address: u64) -> bool {
        if self.index.contains_key(&key) {
            log::debug!("duplicate key {} at {:#x} ignored", key, address);
            return false;
        }
        self.index.insert(key.clone(), self.rows.len());
        self.rows.push((key, address));
        true
    }

    /// Address for `key`, or [`MISSING_ADDRESS`].
    pub fn address_of(&self, key: &str) -> u64 {
        self.index
            .get(key)
            .map(|&i| self.rows[i].1)
            .unwrap_or(MISSING_ADDRESS)
    }

    /// Rows in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.rows.iter().map(|(key, address)| (key.as_str(), *address))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
