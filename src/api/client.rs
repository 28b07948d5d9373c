use std::time::Duration;

use reqwest::{
    Client,
    Method,
    Url,
};
use serde::{
    de::DeserializeOwned,
    Serialize,
};
use tracing::{
    debug,
    info,
};

use crate::core::{
    http::{
        ensure_success,
        http_client,
        parse_base_url,
    },
    WordFields,
    WordPatch,
    WordRecord,
    WordbookError,
    WordsEnvelope,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/words";

/// Thin request/response mapping over the remote word collection.
///
/// No retries, caching or deduplication happen here; each call is one HTTP exchange.
#[derive(Debug, Clone)]
pub struct WordClient {
    http: Client,
    base_url: Url,
}

impl WordClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, WordbookError> {
        Ok(Self { http: http_client(timeout)?, base_url: parse_base_url(base_url)? })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn fetch_all(&self) -> Result<Vec<WordRecord>, WordbookError> {
        let envelope: WordsEnvelope =
            self.send(Method::GET, self.base_url.clone(), None::<&()>).await?;
        info!(count = envelope.words.len(), "fetched words");
        Ok(envelope.words)
    }

    pub async fn create(&self, fields: &WordFields) -> Result<WordRecord, WordbookError> {
        let record: WordRecord = self.send(Method::POST, self.base_url.clone(), Some(fields)).await?;
        info!(id = %record.id, "created word");
        Ok(record)
    }

    pub async fn update(&self, id: &str, patch: &WordPatch) -> Result<WordRecord, WordbookError> {
        let record: WordRecord = self.send(Method::PUT, self.item_url(id)?, Some(patch)).await?;
        info!(id = %record.id, "updated word");
        Ok(record)
    }

    /// Resolves with the id that was deleted so callers can drop it locally.
    pub async fn delete(&self, id: &str) -> Result<String, WordbookError> {
        let url = self.item_url(id)?;
        debug!(%url, "DELETE");
        ensure_success(self.http.delete(url).send().await?).await?;
        info!(id, "deleted word");
        Ok(id.to_string())
    }

    fn item_url(&self, id: &str) -> Result<Url, WordbookError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| WordbookError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    async fn send<B, T>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T, WordbookError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%method, %url, "request");

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = ensure_success(request.send().await?).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
