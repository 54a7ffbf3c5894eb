// ABOUTME: reqwest-based client for the registry manifest API.
// ABOUTME: HEAD /v2/<repo>/manifests/<tag> for the digest, DELETE by digest.

use super::client::{DIGEST_HEADER, MANIFEST_LIST_MEDIA_TYPE, RegistryClient};
use super::error::RegistryError;
use crate::config::{RegistryCredentials, RemoteDeletion};
use crate::types::{Digest, RemoteRepository};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tokio::sync::OnceCell;

/// Registry client speaking the distribution API over HTTPS.
///
/// The underlying HTTP client is built on the first request. A build
/// failure surfaces as `RegistryError::Client` from that request.
pub struct HttpRegistryClient {
    client: OnceCell<reqwest::Client>,
    insecure: bool,
    base_url: Option<String>,
}

impl HttpRegistryClient {
    /// Create a client. With `insecure`, TLS certificates are not verified.
    pub fn new(insecure: bool) -> Self {
        Self {
            client: OnceCell::new(),
            insecure,
            base_url: None,
        }
    }

    /// Client configured from the remote deletion settings.
    pub fn from_settings(remote: &RemoteDeletion) -> Self {
        Self::new(remote.insecure)
    }

    /// Use a prebuilt HTTP client instead of building one on first use.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client: OnceCell::from(client),
            insecure: false,
            base_url: None,
        }
    }

    /// Whether the lazily built client skips certificate verification.
    pub fn accepts_invalid_certs(&self) -> bool {
        self.insecure
    }

    async fn client(&self) -> Result<&reqwest::Client, RegistryError> {
        let insecure = self.insecure;
        self.client
            .get_or_try_init(|| async move { build_client(insecure) })
            .await
    }

    /// Send every request to `base_url` instead of `https://<repository host>`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = Some(base_url.trim_end_matches('/').to_string());
        self
    }

    fn manifest_url(&self, repository: &RemoteRepository, reference: &str) -> String {
        let base = match &self.base_url {
            Some(base) => base.clone(),
            None => format!("https://{}", repository.host()),
        };
        format!("{}/v2/{}/manifests/{}", base, repository.name(), reference)
    }
}

fn build_client(insecure: bool) -> Result<reqwest::Client, RegistryError> {
    tracing::debug!("Building registry HTTP client (insecure: {})", insecure);
    let user_agent = format!("multiarch-push/{}", env!("CARGO_PKG_VERSION"));
    reqwest::Client::builder()
        .user_agent(user_agent)
        .danger_accept_invalid_certs(insecure)
        .build()
        .map_err(|e| RegistryError::Client(e.to_string()))
}

#[async_trait]
impl RegistryClient for HttpRegistryClient {
    async fn manifest_digest(
        &self,
        repository: &RemoteRepository,
        tag: &str,
        auth: &RegistryCredentials,
    ) -> Result<Digest, RegistryError> {
        let url = self.manifest_url(repository, tag);
        tracing::debug!("HEAD {}", url);

        let response = self
            .client()
            .await?
            .head(&url)
            .header(ACCEPT, MANIFEST_LIST_MEDIA_TYPE)
            .basic_auth(auth.username(), Some(auth.password()))
            .send()
            .await
            .map_err(|e| RegistryError::Request {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::from_status(&url, status.as_u16()));
        }

        // HeaderMap lookups ignore case, so Docker-Content-Digest matches too.
        response
            .headers()
            .get(DIGEST_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(Digest::from_header_value)
            .ok_or(RegistryError::MissingDigest(url))
    }

    async fn delete_manifest(
        &self,
        repository: &RemoteRepository,
        digest: &Digest,
        auth: &RegistryCredentials,
    ) -> Result<(), RegistryError> {
        let url = self.manifest_url(repository, digest.as_str());
        tracing::debug!("DELETE {}", url);

        let response = self
            .client()
            .await?
            .delete(&url)
            .basic_auth(auth.username(), Some(auth.password()))
            .send()
            .await
            .map_err(|e| RegistryError::Request {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RegistryError::from_status(&url, status.as_u16()))
        }
    }
}
