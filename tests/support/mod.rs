// ABOUTME: Test support utilities.
// ABOUTME: Provides in-memory tooling and registry fakes plus a fake registry server.

use async_trait::async_trait;
use multiarch_push::config::{RegistryCredentials, RemoteDeletion, Settings};
use multiarch_push::manifest::{CommandError, ImageError, ImageOps, ManifestError, ManifestStore};
use multiarch_push::registry::{HttpRegistryClient, RegistryClient, RegistryError};
use multiarch_push::types::{Arch, Digest, ImageRef, RemoteRepository};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Once;

// Each test binary only uses some of these modules, so allow dead_code.
#[allow(dead_code)]
pub mod registry_server;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("multiarch_push=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// HTTP registry client aimed at `base_url`, ignoring proxy settings so
/// requests reach local fake servers directly.
#[allow(dead_code)]
pub fn direct_client(base_url: &str) -> HttpRegistryClient {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpRegistryClient::with_client(client).with_base_url(base_url)
}

/// Settings for `v1.0.0` under `registry.example.com/proj` with deletion off.
#[allow(dead_code)]
pub fn test_settings() -> Settings {
    Settings::new(
        Some("v1.0.0".to_string()),
        Some("registry.example.com/proj".to_string()),
    )
}

/// Remote deletion enabled with test credentials.
#[allow(dead_code)]
pub fn remote_enabled() -> RemoteDeletion {
    RemoteDeletion {
        enabled: true,
        credentials: Some(RegistryCredentials::new("bot", "s3cret")),
        insecure: false,
    }
}

fn failed(command: String) -> CommandError {
    CommandError::Failed {
        command,
        code: Some(1),
        stderr: "simulated failure".to_string(),
    }
}

/// Container tooling fake that records every call.
///
/// Operations named in `failing` (`probe`, `rm`, `pull`, `create`, `annotate`,
/// `push`, `inspect`) return an error.
#[derive(Default)]
pub struct FakeTooling {
    calls: Mutex<Vec<String>>,
    failing: HashSet<&'static str>,
}

#[allow(dead_code)]
impl FakeTooling {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(ops: &[&'static str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing: ops.iter().copied().collect(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Recorded calls whose first word is `op`.
    pub fn calls_to(&self, op: &str) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.split_whitespace().next() == Some(op))
            .cloned()
            .collect()
    }

    fn record(&self, op: &'static str, call: String) -> Result<(), CommandError> {
        self.calls.lock().push(call.clone());
        if self.failing.contains(op) {
            Err(failed(call))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ManifestStore for FakeTooling {
    async fn probe(&self) -> Result<(), ManifestError> {
        self.record("probe", "probe".to_string())
            .map_err(ManifestError::Unavailable)
    }

    async fn remove(&self, list: &ImageRef) -> Result<(), ManifestError> {
        self.record("rm", format!("rm {list}"))
            .map_err(|e| ManifestError::command(list, e))
    }

    async fn create(&self, list: &ImageRef, images: &[&ImageRef]) -> Result<(), ManifestError> {
        let images: Vec<_> = images.iter().map(|i| i.as_str()).collect();
        self.record("create", format!("create {list} {}", images.join(" ")))
            .map_err(|e| ManifestError::command(list, e))
    }

    async fn annotate(
        &self,
        list: &ImageRef,
        image: &ImageRef,
        arch: Arch,
    ) -> Result<(), ManifestError> {
        self.record(
            "annotate",
            format!("annotate {list} {image} {}/{}", arch.os(), arch),
        )
        .map_err(|e| ManifestError::command(list, e))
    }

    async fn push(&self, list: &ImageRef) -> Result<(), ManifestError> {
        self.record("push", format!("push {list}"))
            .map_err(|e| ManifestError::command(list, e))
    }

    async fn inspect(&self, list: &ImageRef) -> Result<String, ManifestError> {
        self.record("inspect", format!("inspect {list}"))
            .map(|_| format!("{{\"ref\": \"{list}\"}}"))
            .map_err(|e| ManifestError::command(list, e))
    }
}

#[async_trait]
impl ImageOps for FakeTooling {
    async fn pull(&self, image: &ImageRef) -> Result<(), ImageError> {
        self.record("pull", format!("pull {image}"))
            .map_err(|source| ImageError::PullFailed {
                reference: image.to_string(),
                source,
            })
    }
}

/// How the fake registry answers a digest lookup.
#[derive(Debug, Clone, Copy)]
pub enum DigestAnswer {
    Found(&'static str),
    NotFound,
    Unauthorized,
    /// The HTTP client could not be set up at all.
    ClientUnavailable,
}

/// Registry fake that records requests as `HEAD <repo>:<tag>` / `DELETE <repo>@<digest>`.
pub struct FakeRegistry {
    requests: Mutex<Vec<String>>,
    digest: DigestAnswer,
    allow_delete: bool,
}

#[allow(dead_code)]
impl FakeRegistry {
    pub fn new(digest: DigestAnswer, allow_delete: bool) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            digest,
            allow_delete,
        }
    }

    pub fn with_digest(digest: &'static str) -> Self {
        Self::new(DigestAnswer::Found(digest), true)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl RegistryClient for FakeRegistry {
    async fn manifest_digest(
        &self,
        repository: &RemoteRepository,
        tag: &str,
        _auth: &RegistryCredentials,
    ) -> Result<Digest, RegistryError> {
        self.requests
            .lock()
            .push(format!("HEAD {}:{}", repository, tag));
        match self.digest {
            DigestAnswer::Found(d) => Ok(Digest::from_header_value(d).unwrap()),
            DigestAnswer::NotFound => Err(RegistryError::NotFound(repository.to_string())),
            DigestAnswer::Unauthorized => Err(RegistryError::Unauthorized {
                url: repository.to_string(),
                status: 401,
            }),
            DigestAnswer::ClientUnavailable => {
                Err(RegistryError::Client("TLS backend unavailable".to_string()))
            }
        }
    }

    async fn delete_manifest(
        &self,
        repository: &RemoteRepository,
        digest: &Digest,
        _auth: &RegistryCredentials,
    ) -> Result<(), RegistryError> {
        self.requests
            .lock()
            .push(format!("DELETE {}@{}", repository, digest));
        if self.allow_delete {
            Ok(())
        } else {
            Err(RegistryError::DeletionUnsupported(repository.to_string()))
        }
    }
}
