//! Catalog enumeration results.

use alloc::string::String;
use alloc::vec::Vec;

use serde::Serialize;

use crate::json;

/// Result of enumerating a catalog, ordered by ascending id.
///
/// Each enumeration allocates a fresh vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Listing<T> {
    /// Every value instance.
    Values(Vec<T>),
    /// Every raw id.
    Ids(Vec<u8>),
    /// Every canonical name.
    Names(Vec<&'static str>),
    /// Every display label.
    Labels(Vec<&'static str>),
}

impl<T> Listing<T> {
    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Values(values) => values.len(),
            Self::Ids(ids) => ids.len(),
            Self::Names(names) | Self::Labels(names) => names.len(),
        }
    }

    /// Returns `true` if the listing has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the instances, if this listing holds instances.
    #[must_use]
    pub fn into_values(self) -> Option<Vec<T>> {
        match self {
            Self::Values(values) => Some(values),
            _ => None,
        }
    }

    /// Returns the ids, if this listing holds ids.
    #[must_use]
    pub fn into_ids(self) -> Option<Vec<u8>> {
        match self {
            Self::Ids(ids) => Some(ids),
            _ => None,
        }
    }

    /// Returns the names or labels, if this listing holds either.
    #[must_use]
    pub fn into_strings(self) -> Option<Vec<&'static str>> {
        match self {
            Self::Names(strings) | Self::Labels(strings) => Some(strings),
            _ => None,
        }
    }
}

impl<T: Serialize> Listing<T> {
    /// Encodes the listing as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if an element fails to serialize.
    pub fn to_json(&self) -> serde_json::Result<String> {
        json::to_string(self)
    }
}
