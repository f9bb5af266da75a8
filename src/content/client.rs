//! Content Store Client
//!
//! Read-only client for the Contentful Content Delivery API. Single-item
//! lookups go through the collection endpoint filtered by `sys.id` so the
//! linked assets arrive in the same response.

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::records::{AssetLinks, EntryCollection, Record};

const CDA_BASE_URL: &str = "https://cdn.contentful.com";
const CDA_ENVIRONMENT: &str = "master";

/// Retrieval failures. All variants are non-fatal: callers treat them as
/// "no remote data" and select the fallback catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentError {
    /// Transport-level failure (DNS, connection, fetch rejection)
    Http(String),
    /// Non-success HTTP status from the CDA
    Status(u16),
    /// Response body did not match the expected envelope
    Decode(String),
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentError::Http(msg) => write!(f, "request failed: {}", msg),
            ContentError::Status(code) => write!(f, "content store returned status {}", code),
            ContentError::Decode(msg) => write!(f, "invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for ContentError {}

/// Handle on the remote content store. `None` (from [`ContentClient::from_env`])
/// means the site runs in permanent fallback mode and never touches the network.
#[derive(Clone)]
pub struct ContentClient {
    http: Client,
    space_id: String,
    access_token: String,
}

impl ContentClient {
    pub fn new(space_id: &str, access_token: &str) -> Self {
        Self {
            http: Client::new(),
            space_id: space_id.to_string(),
            access_token: access_token.to_string(),
        }
    }

    /// Build a client from the compile-time environment. Returns `None`
    /// when either value is missing or blank; no network access is
    /// attempted in that case.
    pub fn from_env() -> Option<Self> {
        let space_id = option_env!("CONTENTFUL_SPACE_ID").unwrap_or("");
        let access_token = option_env!("CONTENTFUL_ACCESS_TOKEN").unwrap_or("");
        if space_id.trim().is_empty() || access_token.trim().is_empty() {
            return None;
        }
        Some(Self::new(space_id, access_token))
    }

    /// List all entries of a content type. A query that matches nothing
    /// is a success with an empty vec, not an error.
    pub async fn entries<F>(&self, content_type: &str) -> Result<Vec<Record<F>>, ContentError>
    where
        F: DeserializeOwned + AssetLinks,
    {
        let url = entries_url(&self.space_id, &self.access_token, content_type, None);
        let collection = self.get_collection::<F>(&url).await?;
        Ok(collection.into_records())
    }

    /// Look up a single entry by id. Unknown ids resolve to `Ok(None)`.
    pub async fn entry_by_id<F>(
        &self,
        content_type: &str,
        id: &str,
    ) -> Result<Option<Record<F>>, ContentError>
    where
        F: DeserializeOwned + AssetLinks,
    {
        let url = entries_url(&self.space_id, &self.access_token, content_type, Some(id));
        let collection = self.get_collection::<F>(&url).await?;
        Ok(collection.into_records().into_iter().next())
    }

    async fn get_collection<F>(&self, url: &str) -> Result<EntryCollection<F>, ContentError>
    where
        F: DeserializeOwned,
    {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ContentError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ContentError::Status(response.status().as_u16()));
        }

        response
            .json::<EntryCollection<F>>()
            .await
            .map_err(|e| ContentError::Decode(e.to_string()))
    }
}

/// CDA entries URL for a content type, optionally narrowed to one entry id.
fn entries_url(space_id: &str, access_token: &str, content_type: &str, id: Option<&str>) -> String {
    let mut url = format!(
        "{}/spaces/{}/environments/{}/entries?access_token={}&content_type={}",
        CDA_BASE_URL, space_id, CDA_ENVIRONMENT, access_token, content_type
    );
    if let Some(id) = id {
        url.push_str("&sys.id=");
        url.push_str(id);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_url_for_collection() {
        let url = entries_url("space1", "tok", "garden", None);
        assert_eq!(
            url,
            "https://cdn.contentful.com/spaces/space1/environments/master/entries?access_token=tok&content_type=garden"
        );
    }

    #[test]
    fn test_entries_url_with_id_filter() {
        let url = entries_url("space1", "tok", "event", Some("abc123"));
        assert!(url.ends_with("&content_type=event&sys.id=abc123"));
    }

    #[test]
    fn test_from_env_without_config_is_none() {
        // The test build has no CONTENTFUL_* values baked in.
        assert!(ContentClient::from_env().is_none());
    }
}
