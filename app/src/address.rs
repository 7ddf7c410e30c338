//! Address decomposition.
//!
//! Station addresses are free text such as `"Seoul Gangnam-gu Yeoksam-dong"`.
//! The first three whitespace-delimited tokens are read as the city, the
//! district and the neighborhood. Splitting is positional and literal: no
//! punctuation is trimmed and no case folding happens.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The hierarchical parts of one address. A part is `None` when the address
/// has fewer tokens than its position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressParts {
    pub top: Option<String>,
    pub sub: Option<String>,
    pub neighborhood: Option<String>,
}

impl AddressParts {
    pub fn parse(address: &str) -> Self {
        let mut tokens = address.split_whitespace().map(str::to_owned);
        Self {
            top: tokens.next(),
            sub: tokens.next(),
            neighborhood: tokens.next(),
        }
    }

    pub fn top(&self) -> Option<&str> {
        self.top.as_deref()
    }

    pub fn sub(&self) -> Option<&str> {
        self.sub.as_deref()
    }

    pub fn neighborhood(&self) -> Option<&str> {
        self.neighborhood.as_deref()
    }
}

/// A station row reduced to what the drill-down needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationAddress {
    pub station_id: String,
    pub name: String,
    pub address: Option<String>,
    pub parts: AddressParts,
}

impl StationAddress {
    /// A missing address decomposes like the empty string.
    pub fn new(station_id: String, name: String, address: Option<String>) -> Self {
        let parts = address
            .as_deref()
            .map(AddressParts::parse)
            .unwrap_or_default();
        Self {
            station_id,
            name,
            address,
            parts,
        }
    }
}

/// The in-memory station table the cascading selectors filter over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressTable {
    rows: Vec<StationAddress>,
}

impl AddressTable {
    pub fn new(rows: Vec<StationAddress>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[StationAddress] {
        &self.rows
    }

    /// Sorted, de-duplicated first-level regions, absent values excluded.
    pub fn distinct_top_regions(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter_map(|r| r.parts.top())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}
