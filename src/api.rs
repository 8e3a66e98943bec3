use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Catalog identifier of an artwork
pub type ArtworkId = u64;

/// Fields requested from the catalog (everything the table displays)
pub const ARTWORK_FIELDS: &str =
    "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i32>,
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Artwork with only an id, every display attribute absent
    pub fn bare(id: ArtworkId) -> Self {
        Self {
            id,
            title: None,
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub current_page: Option<u32>,
}

/// One fetch's worth of artworks plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtworksPage {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub data: Vec<Artwork>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl ArtworksPage {
    pub fn total_pages(&self) -> Option<u32> {
        self.pagination.as_ref().and_then(|p| p.total_pages)
    }
}

/// Helper function to deserialize null as empty vector
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Parse a `/artworks` response body
pub fn parse_artworks_response(body: &str) -> Result<ArtworksPage> {
    serde_json::from_str(body).context("Failed to parse artworks response")
}

#[derive(Clone)]
pub struct ArticClient {
    base_url: String,
    page_size: u32,
    client: Client,
}

impl ArticClient {
    pub fn new(base_url: String, page_size: u32, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size,
            client,
        })
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// URL for one page of artworks (pages are 1-based)
    pub fn artworks_url(&self, page: u32) -> String {
        format!(
            "{}/artworks?page={}&limit={}&fields={}",
            self.base_url,
            page,
            self.page_size,
            urlencoding::encode(ARTWORK_FIELDS)
        )
    }

    pub async fn fetch_artworks(&self, page: u32) -> Result<ArtworksPage> {
        let url = self.artworks_url(page);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch artworks")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow::anyhow!("API error ({}): {}", status, error_text));
        }

        let text = response.text().await.context("Failed to read response")?;
        parse_artworks_response(&text)
    }
}
