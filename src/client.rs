//! Client facade and builder.

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;

use crate::api::{ClubsApi, NeisApi, ProjectsApi, StudentsApi};
use crate::error::{Error, Result};
use crate::transport::HttpTransport;

/// Production endpoint of the DataGSM OpenAPI.
pub const DEFAULT_BASE_URL: &str = "https://openapi.data.hellogsm.kr";

/// Environment variable consulted by [`DataGsmClient::from_env`].
pub const API_KEY_ENV: &str = "DATAGSM_API_KEY";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Entry point of the SDK.
///
/// Holds the API key and one pooled HTTP client. Cloning is cheap (the
/// transport is shared) and a clone can be used concurrently from multiple
/// tasks.
///
/// # Example
///
/// ```rust,no_run
/// use datagsm_openapi::{DataGsmClient, api::StudentQuery};
///
/// # async fn run() -> datagsm_openapi::Result<()> {
/// let client = DataGsmClient::new("your-api-key")?;
/// let page = client.students().get_students(&StudentQuery::new()).await?;
/// println!("total students: {}", page.total_elements);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DataGsmClient {
    transport: Arc<HttpTransport>,
}

impl DataGsmClient {
    /// Create a client with the default endpoint and timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client from the `DATAGSM_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::Validation(format!("{API_KEY_ENV} is not set")))?;
        Self::new(key)
    }

    /// Start configuring a client.
    pub fn builder() -> DataGsmClientBuilder {
        DataGsmClientBuilder::default()
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Student data API.
    pub fn students(&self) -> StudentsApi {
        StudentsApi::new(self.transport.clone())
    }

    /// Club data API.
    pub fn clubs(&self) -> ClubsApi {
        ClubsApi::new(self.transport.clone())
    }

    /// Project data API.
    pub fn projects(&self) -> ProjectsApi {
        ProjectsApi::new(self.transport.clone())
    }

    /// NEIS data API (meals and academic schedules).
    pub fn neis(&self) -> NeisApi {
        NeisApi::new(self.transport.clone())
    }
}

/// Builder for [`DataGsmClient`].
#[derive(Default)]
pub struct DataGsmClientBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
}

impl DataGsmClientBuilder {
    /// Set the API key (required).
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Override the base URL, e.g. to point at a staging host.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout (default 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Supply a preconfigured `reqwest::Client`. Overrides [`Self::timeout`],
    /// since the timeout belongs to the HTTP client.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    ///
    /// Fails with [`Error::Validation`] when no API key was given and with
    /// [`Error::Network`] when the HTTP client cannot be constructed.
    pub fn build(self) -> Result<DataGsmClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| Error::Validation("an API key is required".into()))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .build()
                .map_err(Error::Network)?,
        };

        let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Ok(DataGsmClient {
            transport: Arc::new(HttpTransport::new(http_client, base_url, api_key)),
        })
    }
}

impl std::fmt::Debug for DataGsmClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataGsmClientBuilder")
            .field("has_api_key", &self.api_key.is_some())
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
