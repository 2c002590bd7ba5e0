//! Account service client

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::error::ApiError;
use crate::model::RegistrationPayload;
use crate::model::SignupResponse;

/// Client for the remote account-creation endpoint.
///
/// The endpoint itself is a black box: its storage, auth issuance and
/// uniqueness checks are opaque to this client. Exactly one request is in
/// flight per signup attempt; there are no retries and no cancellation.
///
/// The client is cheap to clone (uses `Arc` internally).
///
/// # Example
///
/// ```ignore
/// use onboard_lib::SignupClient;
///
/// let client = SignupClient::builder()
///     .url("https://api.example.com/users")
///     .build();
///
/// let response = client.create_account(&payload).await?;
/// ```
#[derive(Clone)]
pub struct SignupClient {
    inner: Arc<SignupClientInner>,
}

struct SignupClientInner {
    endpoint: String,
    http_client: Client,
    timeout: Option<Duration>,
}

impl SignupClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> SignupClientBuilder<Missing> {
        SignupClientBuilder::new()
    }

    /// Submits the registration payload to the account-creation endpoint.
    ///
    /// Issues a single POST with a JSON body and `Accept`/`Content-Type`
    /// set to `application/json`, and parses the JSON response. A non-2xx
    /// status maps to [`ApiError::Http`], a transport failure to
    /// [`ApiError::Network`], and an unparseable body to [`ApiError::Parse`]
    /// carrying the raw text.
    pub async fn create_account(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<SignupResponse, ApiError> {
        let mut request = self
            .inner
            .http_client
            .post(&self.inner.endpoint)
            .header(ACCEPT, "application/json")
            .json(payload);

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        if response.status().is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body)
                .map_err(|err| ApiError::parse_with_body(err.to_string(), body))
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::http(status, body))
        }
    }

    /// Returns the account-creation endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`SignupClient`].
///
/// Uses the typestate pattern so the required endpoint URL is set at
/// compile time.
///
/// # Example
///
/// ```ignore
/// let client = SignupClient::builder()
///     .url("https://api.example.com/users")
///     .timeout(Duration::from_secs(30))
///     .build();
/// ```
pub struct SignupClientBuilder<Url> {
    url: Url,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl SignupClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the account-creation endpoint URL.
    pub fn url(self, url: impl Into<String>) -> SignupClientBuilder<Set<String>> {
        SignupClientBuilder {
            url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for SignupClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> SignupClientBuilder<U> {
    /// Sets the request timeout.
    ///
    /// Without one, a stalled request stays in flight indefinitely, as the
    /// original form did.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl SignupClientBuilder<Set<String>> {
    /// Builds the [`SignupClient`].
    ///
    /// This method is only available once the endpoint URL has been set.
    pub fn build(self) -> SignupClient {
        let http_client = self.http_client.unwrap_or_else(|| {
            let mut builder = Client::builder();
            if let Some(timeout) = self.connect_timeout {
                builder = builder.connect_timeout(timeout);
            }
            builder.build().expect("Failed to build HTTP client")
        });

        SignupClient {
            inner: Arc::new(SignupClientInner {
                endpoint: self.url.0,
                http_client,
                timeout: self.timeout,
            }),
        }
    }
}
