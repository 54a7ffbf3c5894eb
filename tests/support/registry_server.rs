// ABOUTME: Minimal fake distribution registry served with hyper.
// ABOUTME: Answers manifest HEAD and DELETE requests and records what it saw.

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use parking_lot::Mutex;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// A request as seen by the fake registry.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub accept: Option<String>,
    pub authorization: Option<String>,
}

/// How the fake registry behaves.
#[derive(Debug, Clone)]
pub struct RegistryBehavior {
    /// Value of `Docker-Content-Digest` on HEAD; `None` omits the header.
    pub digest: Option<&'static str>,
    /// Status for HEAD requests.
    pub head_status: StatusCode,
    /// Status for DELETE requests.
    pub delete_status: StatusCode,
}

impl Default for RegistryBehavior {
    fn default() -> Self {
        Self {
            digest: Some("sha256:0123456789abcdef"),
            head_status: StatusCode::OK,
            delete_status: StatusCode::ACCEPTED,
        }
    }
}

pub struct FakeRegistryServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeRegistryServer {
    /// Bind to an ephemeral local port and start serving.
    pub async fn start(behavior: RegistryBehavior) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind fake registry");
        let addr = listener.local_addr().expect("no local addr");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let behavior = behavior.clone();
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    let service = service_fn(move |req: Request<Incoming>| {
                        let response = respond(&behavior, &recorded, &req);
                        async move { Ok::<_, Infallible>(response) }
                    });
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }
}

fn header(req: &Request<Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn respond(
    behavior: &RegistryBehavior,
    recorded: &Mutex<Vec<RecordedRequest>>,
    req: &Request<Incoming>,
) -> Response<Full<Bytes>> {
    recorded.lock().push(RecordedRequest {
        method: req.method().clone(),
        path: req.uri().path().to_string(),
        accept: header(req, "accept"),
        authorization: header(req, "authorization"),
    });

    let mut builder = Response::builder();
    builder = match *req.method() {
        Method::HEAD => {
            let mut b = builder.status(behavior.head_status);
            if let Some(digest) = behavior.digest {
                b = b.header("Docker-Content-Digest", digest);
            }
            b
        }
        Method::DELETE => builder.status(behavior.delete_status),
        _ => builder.status(StatusCode::METHOD_NOT_ALLOWED),
    };

    builder
        .body(Full::new(Bytes::new()))
        .expect("valid response")
}
