//! Source implementation for the North Lanarkshire council schedule pages.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};

use binwatch_core::{
    model::{Address, AddressKey, CollectionBlock},
    ports::{CollectionSource, SourceError},
};

/// Known addresses and their bin-collection-dates pages.
const ADDRESSES: [(&str, &str, &str); 2] = [
    (
        "golf-place",
        "Golf Place",
        "https://www.northlanarkshire.gov.uk/bin-collection-dates/000118048625/48403561",
    ),
    (
        "bowhill-road",
        "Bowhill Road",
        "https://www.northlanarkshire.gov.uk/bin-collection-dates/000118177444/48410136",
    ),
];

/// One collection block per waste-type container on the page.
const BLOCK_SELECTOR: &str = "div.waste-type-container";
const HEADING_SELECTOR: &str = "h3";
const DATE_SELECTOR: &str = "p";

/// Schedule source backed by the council's public pages.
pub struct NorthLanarkshireSource {
    client: Client,
}

impl NorthLanarkshireSource {
    /// Create a source bound to the given HTTP client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn url_for(address: &AddressKey) -> Option<&'static str> {
        ADDRESSES
            .iter()
            .find(|(key, _, _)| *key == address.0)
            .map(|(_, _, url)| *url)
    }
}

#[async_trait]
impl CollectionSource for NorthLanarkshireSource {
    fn addresses(&self) -> Vec<Address> {
        ADDRESSES
            .iter()
            .map(|(key, label, _)| Address {
                key: AddressKey((*key).to_owned()),
                label: (*label).to_owned(),
            })
            .collect()
    }

    async fn collection_blocks(
        &self,
        address: &AddressKey,
    ) -> Result<Vec<CollectionBlock>, SourceError> {
        let url = Self::url_for(address).ok_or_else(|| SourceError::UnknownAddress(address.clone()))?;

        // Single attempt; any network or status failure aborts the run.
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(collection_blocks_from_html(&body))
    }
}

/// Run the structural query over the page body.
///
/// Each waste-type container becomes one block: its first `h3` is the heading
/// (empty when missing) and every `p` inside it a date fragment. Parsing and
/// dropping the document here keeps the async path free of non-`Send` state.
#[must_use]
pub fn collection_blocks_from_html(body: &str) -> Vec<CollectionBlock> {
    let block_selector = Selector::parse(BLOCK_SELECTOR).expect("static selector");
    let heading_selector = Selector::parse(HEADING_SELECTOR).expect("static selector");
    let date_selector = Selector::parse(DATE_SELECTOR).expect("static selector");

    let document = Html::parse_document(body);

    document
        .select(&block_selector)
        .map(|container| {
            let heading = container
                .select(&heading_selector)
                .next()
                .map(|element| element.text().collect::<String>().trim().to_owned())
                .unwrap_or_default();

            let date_texts = container
                .select(&date_selector)
                .map(|element| element.text().collect::<String>().trim().to_owned())
                .collect();

            CollectionBlock {
                heading,
                date_texts,
            }
        })
        .collect()
}
