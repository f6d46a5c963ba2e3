//! DNS-over-HTTPS resolution of hostnames to IPv4 addresses.

use std::future::Future;

use log::{debug, warn};
use reqwest::header::ACCEPT;
use url::Url;

use super::response::parse_answer;
use crate::config::{DNS_JSON_MEDIA_TYPE, DOH_NAME_PARAM, DOH_RECORD_TYPE, DOH_TYPE_PARAM};
use crate::error_handling::{categorize_reqwest_error, InitializationError, ResolutionError};

/// Resolves a hostname to a comma-joined list of IPv4 addresses.
///
/// The form controller only depends on this trait, so tests can drive it with
/// a double that never touches the network.
pub trait IpResolver {
    /// Performs a single lookup attempt for `hostname`.
    ///
    /// On success the addresses are joined with `", "` in answer order.
    fn resolve_ip_address(
        &self,
        hostname: &str,
    ) -> impl Future<Output = Result<String, ResolutionError>> + Send;
}

/// Resolver backed by a DNS-over-HTTPS JSON endpoint.
#[derive(Debug, Clone)]
pub struct DohResolver {
    client: reqwest::Client,
    endpoint: Url,
}

impl DohResolver {
    /// Creates a resolver querying `endpoint` through `client`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::EndpointError` if `endpoint` is not an
    /// absolute URL.
    pub fn with_endpoint(
        client: reqwest::Client,
        endpoint: &str,
    ) -> Result<Self, InitializationError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| InitializationError::EndpointError(format!("{endpoint}: {e}")))?;
        Ok(Self { client, endpoint })
    }

    /// The DoH endpoint queries are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl IpResolver for DohResolver {
    /// Issues one `GET <endpoint>?name=<hostname>&type=A` request.
    ///
    /// A request that fails before a response arrives is a `FetchFailure`.
    /// Any response, whatever its HTTP status, is handed to [`parse_answer`];
    /// a body that cannot be read or parsed is a `NoResults` failure.
    async fn resolve_ip_address(&self, hostname: &str) -> Result<String, ResolutionError> {
        debug!("Resolving A records for {hostname} via {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[(DOH_NAME_PARAM, hostname), (DOH_TYPE_PARAM, DOH_RECORD_TYPE)])
            .header(ACCEPT, DNS_JSON_MEDIA_TYPE)
            .send()
            .await
            .map_err(|e| {
                warn!(
                    "DoH request for {hostname} failed ({}): {e}",
                    categorize_reqwest_error(&e)
                );
                ResolutionError::fetch_failure()
            })?;

        debug!("DoH response for {hostname}: HTTP {}", response.status());

        let body = response.text().await.map_err(|e| {
            warn!(
                "Failed to read DoH response body for {hostname} ({}): {e}",
                categorize_reqwest_error(&e)
            );
            ResolutionError::no_results()
        })?;

        parse_answer(&body)
    }
}
