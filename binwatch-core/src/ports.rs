//! Trait describing the collection-page source and its error taxonomy.

use async_trait::async_trait;
use reqwest::Error as ReqwestError;

use crate::model::{Address, AddressKey, CollectionBlock};

#[derive(thiserror::Error, Debug)]
/// Errors that abort a whole extraction run.
///
/// Per-fragment date parse failures and unmatched block headings are handled
/// where they occur and never surface here.
pub enum SourceError {
    /// The request for the schedule page failed or returned a bad status.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// The address key is not in the source's address table.
    #[error("Unknown address: {0}")]
    UnknownAddress(AddressKey),
}

#[async_trait]
/// Trait for sources of raw collection blocks.
///
/// A source owns the address table and the document query; the core never
/// sees URLs or HTML, only blocks.
pub trait CollectionSource: Send + Sync {
    /// Addresses this source can fetch schedules for, in display order.
    fn addresses(&self) -> Vec<Address>;

    /// Fetch the schedule page for an address and return its collection
    /// blocks in document order.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the address is unknown or the single
    /// fetch attempt fails; there is no retry.
    async fn collection_blocks(&self, address: &AddressKey)
    -> Result<Vec<CollectionBlock>, SourceError>;
}
