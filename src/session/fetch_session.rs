use crate::prelude::*;
use std::sync::OnceLock;

static SHARED_SESSION: OnceLock<Arc<FetchSession>> = OnceLock::new();

/// The single access point that executes [`UrlRequest`] values through the
/// host fetch primitive.
///
/// Each call translates the request into [`FetchOptions`], issues exactly
/// one [`HostFetch::fetch`], awaits the settle, then asks the settled
/// operation to drain its body and awaits that too. Those are the only two
/// suspension points; between them execution is synchronous. The session
/// keeps no per-call state, so concurrent calls only ever interleave at
/// the suspension points and never race.
///
/// No retries, no redirect or proxy policy, no timeout enforcement: all of
/// that belongs to the host transport.
#[derive(Object)]
pub struct FetchSession {
    host: Arc<dyn HostFetch>,
}

/// Not derivable over `Arc<dyn HostFetch>`; the host is elided.
impl std::fmt::Debug for FetchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchSession").finish_non_exhaustive()
    }
}

#[export]
impl FetchSession {
    #[uniffi::constructor]
    pub fn new(host: Arc<dyn HostFetch>) -> Self {
        Self { host }
    }

    /// Executes `request` and returns the body bytes together with the
    /// reconstructed response.
    pub async fn data_for(
        &self,
        request: UrlRequest,
        mode: CorsMode,
    ) -> Result<FetchedData, TransportError> {
        self.dispatch(&request, mode).await
    }

    /// Convenience: builds a default GET request for `url` and delegates to
    /// the same path as [`Self::data_for`].
    pub async fn data_from(
        &self,
        url: String,
        mode: CorsMode,
    ) -> Result<FetchedData, TransportError> {
        self.dispatch(&UrlRequest::new(url), mode).await
    }

    /// Convenience: copies `request`, overwrites its body with `body` and
    /// delegates. Upload and download share one code path; there is no
    /// distinct upload transport.
    pub async fn upload_for(
        &self,
        request: UrlRequest,
        body: Vec<u8>,
        mode: CorsMode,
    ) -> Result<FetchedData, TransportError> {
        let mut request = request;
        request.body = Some(body);
        self.dispatch(&request, mode).await
    }
}

impl FetchSession {
    /// Builds the transport-native options for `request`: method, every
    /// stored header entry, the body only when present, and the CORS mode
    /// wire string.
    pub(crate) fn fetch_options(request: &UrlRequest, mode: CorsMode) -> FetchOptions {
        FetchOptions {
            method: request.http_method.clone(),
            headers: request.headers.clone(),
            body: request.body.clone(),
            mode: mode.wire_value().to_owned(),
        }
    }

    async fn dispatch(
        &self,
        request: &UrlRequest,
        mode: CorsMode,
    ) -> Result<FetchedData, TransportError> {
        let url = request
            .url
            .clone()
            .ok_or(SessionSideError::RequestMissingUrl)?;
        let options = Self::fetch_options(request, mode);
        debug!("dispatching {} {} (mode: {})", options.method, url, options.mode);

        // Suspension point 1: the host fetch call settling.
        let (sender, receiver) = channel::<SettledOutcome>();
        let listener = FetchSettledListener::new(HostCallbackListener::new(sender));
        self.host.fetch(url.clone(), options, Arc::new(listener))?;
        let settled = receiver
            .await
            .map_err(|_| SessionSideError::FailedToReceiveSettleFromHost)??;

        let status_code = settled.status();
        let headers = settled.headers();
        debug!("settled {} with status {}", url, status_code);

        // Suspension point 2: the host draining the body.
        let (sender, receiver) = channel::<BodyOutcome>();
        let listener = BodyOutcomeListener::new(HostCallbackListener::new(sender));
        settled.read_body(Arc::new(listener))?;
        let outcome = receiver
            .await
            .map_err(|_| SessionSideError::FailedToReceiveBodyFromHost)?;
        let body = Result::<Vec<u8>, HostFetchError>::from(outcome)?;

        Ok(FetchedData {
            body,
            response: UrlResponse {
                status_code,
                url,
                headers,
            },
        })
    }
}

/// Installs the process-wide shared session, created once and reused for
/// the process lifetime. A second install is refused: the shared session
/// keeps its first host and cannot be reconfigured at runtime.
#[uniffi::export]
pub fn install_shared_session(
    host: Arc<dyn HostFetch>,
) -> Result<Arc<FetchSession>, ConfigurationError> {
    let session = Arc::new(FetchSession::new(host));
    SHARED_SESSION
        .set(session.clone())
        .map_err(|_| ConfigurationError::SharedSessionAlreadyInstalled)?;
    Ok(session)
}

/// The shared session, or [`ConfigurationError::SharedSessionNotInstalled`]
/// before [`install_shared_session`] has run.
#[uniffi::export]
pub fn shared_session() -> Result<Arc<FetchSession>, ConfigurationError> {
    SHARED_SESSION
        .get()
        .cloned()
        .ok_or(ConfigurationError::SharedSessionNotInstalled)
}
