use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use fetchbridge::*;

/// A settled operation serving fixed status, headers and body.
struct StaticPending {
    status: u16,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl HostPendingFetch for StaticPending {
    fn status(&self) -> u16 {
        self.status
    }

    fn headers(&self) -> HashMap<String, String> {
        self.headers.clone()
    }

    fn read_body(&self, listener: Arc<BodyOutcomeListener>) -> Result<(), HostFetchError> {
        listener.notify_outcome(BodyOutcome::Success {
            body: self.body.clone(),
        });
        Ok(())
    }
}

/// A host that records every dispatched call and serves a fixed reply.
struct StaticHost {
    status: u16,
    headers: HashMap<String, String>,
    body: Vec<u8>,
    seen: Mutex<Vec<(String, FetchOptions)>>,
}

impl StaticHost {
    fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Arc<Self> {
        Arc::new(Self {
            status,
            headers,
            body,
            seen: Mutex::new(Vec::new()),
        })
    }

    fn seen(&self) -> Vec<(String, FetchOptions)> {
        self.seen.lock().unwrap().clone()
    }
}

impl HostFetch for StaticHost {
    fn fetch(
        &self,
        url: String,
        options: FetchOptions,
        listener: Arc<FetchSettledListener>,
    ) -> Result<(), HostFetchError> {
        self.seen.lock().unwrap().push((url, options));
        listener.notify_settled(Arc::new(StaticPending {
            status: self.status,
            headers: self.headers.clone(),
            body: self.body.clone(),
        }));
        Ok(())
    }
}

/// A host that rejects synchronously, before any operation is pending.
struct SyncRejectingHost;

impl HostFetch for SyncRejectingHost {
    fn fetch(
        &self,
        url: String,
        _options: FetchOptions,
        _listener: Arc<FetchSettledListener>,
    ) -> Result<(), HostFetchError> {
        Err(HostFetchError::FailedToCreateUrl { url })
    }
}

/// A host that accepts the call, then settles it with a failure.
struct AsyncRejectingHost;

impl HostFetch for AsyncRejectingHost {
    fn fetch(
        &self,
        _url: String,
        _options: FetchOptions,
        listener: Arc<FetchSettledListener>,
    ) -> Result<(), HostFetchError> {
        listener.notify_failure(HostFetchError::FetchFailed {
            reason: "simulated network failure".to_owned(),
            status_code: None,
        });
        Ok(())
    }
}

/// A settled operation whose body read fails.
struct BodyFailingPending;

impl HostPendingFetch for BodyFailingPending {
    fn status(&self) -> u16 {
        200
    }

    fn headers(&self) -> HashMap<String, String> {
        HashMap::new()
    }

    fn read_body(&self, listener: Arc<BodyOutcomeListener>) -> Result<(), HostFetchError> {
        listener.notify_outcome(BodyOutcome::Failure {
            error: HostFetchError::BodyReadFailed {
                reason: "stream detached".to_owned(),
            },
        });
        Ok(())
    }
}

struct BodyFailingHost;

impl HostFetch for BodyFailingHost {
    fn fetch(
        &self,
        _url: String,
        _options: FetchOptions,
        listener: Arc<FetchSettledListener>,
    ) -> Result<(), HostFetchError> {
        listener.notify_settled(Arc::new(BodyFailingPending));
        Ok(())
    }
}

#[tokio::test]
async fn get_with_lowercase_method_and_header_round_trips() {
    let host = StaticHost::new(
        200,
        HashMap::from_iter([("content-length".to_owned(), "4".to_owned())]),
        vec![1, 2, 3, 4],
    );
    let session = FetchSession::new(host.clone());

    let mut request = UrlRequest::new("https://example.test/items");
    request.set_http_method("get");
    request.set_header("content-type", "application/json");

    let data = session.data_for(request, CorsMode::Cors).await.unwrap();
    assert_eq!(data.body, vec![1, 2, 3, 4]);
    assert_eq!(data.response.status_code, 200);
    assert_eq!(data.response.url, "https://example.test/items");
    // Response headers keep the host's casing, no re-normalization.
    assert_eq!(
        data.response.headers.get("content-length").map(String::as_str),
        Some("4")
    );

    let seen = host.seen();
    assert_eq!(seen.len(), 1);
    let (url, options) = &seen[0];
    assert_eq!(url, "https://example.test/items");
    assert_eq!(options.method, "GET");
    assert_eq!(
        options.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(options.mode, "cors");
    assert_eq!(options.body, None);
}

#[tokio::test]
async fn data_from_dispatches_a_default_get_request() {
    let host = StaticHost::new(204, HashMap::new(), Vec::new());
    let session = FetchSession::new(host.clone());

    let data = session
        .data_from("https://example.test/ping".to_owned(), CorsMode::NoCors)
        .await
        .unwrap();
    assert_eq!(data.body, Vec::<u8>::new());
    assert_eq!(data.response.status_code, 204);

    let (url, options) = &host.seen()[0];
    assert_eq!(url, "https://example.test/ping");
    assert_eq!(options.method, "GET");
    assert!(options.headers.is_empty());
    assert_eq!(options.body, None);
    assert_eq!(options.mode, "no-cors");
}

#[tokio::test]
async fn upload_and_manually_bodied_data_dispatch_identical_options() {
    let host = StaticHost::new(200, HashMap::new(), Vec::new());
    let session = FetchSession::new(host.clone());

    let request = UrlRequest::new("https://example.test/upload");
    let payload = vec![0xDE, 0xAD, 0xBE, 0xEF];

    session
        .upload_for(request.clone(), payload.clone(), CorsMode::SameOrigin)
        .await
        .unwrap();

    let mut manual = request;
    manual.body = Some(payload.clone());
    session.data_for(manual, CorsMode::SameOrigin).await.unwrap();

    let seen = host.seen();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], seen[1]);
    assert_eq!(seen[0].1.body, Some(payload));
}

#[tokio::test]
async fn synchronous_host_rejection_surfaces_unchanged() {
    let session = FetchSession::new(Arc::new(SyncRejectingHost));
    let err = session
        .data_from("not a url".to_owned(), CorsMode::Cors)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        TransportError::FromHost {
            error: HostFetchError::FailedToCreateUrl {
                url: "not a url".to_owned()
            }
        }
    );
}

#[tokio::test]
async fn settled_failure_surfaces_as_transport_error() {
    let session = FetchSession::new(Arc::new(AsyncRejectingHost));
    let err = session
        .data_from("https://example.test/".to_owned(), CorsMode::Cors)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TransportError::FromHost {
            error: HostFetchError::FetchFailed { .. }
        }
    ));
}

#[tokio::test]
async fn body_read_failure_surfaces_as_transport_error() {
    let session = FetchSession::new(Arc::new(BodyFailingHost));
    let err = session
        .data_from("https://example.test/".to_owned(), CorsMode::Cors)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        TransportError::FromHost {
            error: HostFetchError::BodyReadFailed {
                reason: "stream detached".to_owned()
            }
        }
    );
}

#[tokio::test]
async fn request_without_url_fails_before_reaching_the_host() {
    let host = StaticHost::new(200, HashMap::new(), Vec::new());
    let session = FetchSession::new(host.clone());

    let err = session
        .data_for(UrlRequest::default(), CorsMode::Cors)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        TransportError::FromSession {
            error: SessionSideError::RequestMissingUrl
        }
    );
    assert!(host.seen().is_empty());
}

#[tokio::test]
async fn shared_session_installs_exactly_once() {
    assert_eq!(
        shared_session().unwrap_err(),
        ConfigurationError::SharedSessionNotInstalled
    );

    let host = StaticHost::new(200, HashMap::new(), vec![7]);
    let installed = install_shared_session(host.clone()).unwrap();
    let data = shared_session()
        .unwrap()
        .data_from("https://example.test/".to_owned(), CorsMode::Cors)
        .await
        .unwrap();
    assert_eq!(data.body, vec![7]);
    assert!(Arc::ptr_eq(&installed, &shared_session().unwrap()));

    assert_eq!(
        install_shared_session(StaticHost::new(500, HashMap::new(), Vec::new())).unwrap_err(),
        ConfigurationError::SharedSessionAlreadyInstalled
    );
}
