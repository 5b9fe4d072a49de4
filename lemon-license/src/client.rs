//! The licensing API client.

use crate::error::{LicenseError, LicenseResult};
use crate::instance::SystemAttributes;
use crate::response::{ActivationResponse, DeactivationResponse, ValidationResponse};
use crate::types::{LicenseInfo, ValidationInfo};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Base URL of the Lemon Squeezy licensing API.
pub const DEFAULT_API_URL: &str = "https://api.lemonsqueezy.com/v1/licenses";

const DEFAULT_ACTIVATION_ERROR: &str = "unknown error occurred during activation";
const DEFAULT_VALIDATION_ERROR: &str = "license validation failed";
const DEFAULT_DEACTIVATION_ERROR: &str = "unknown error occurred during deactivation";

/// Client for the Lemon Squeezy licensing API.
///
/// Stateless between calls: each operation issues a single POST and reshapes
/// the JSON response. Cloning is cheap (the underlying connection pool is
/// shared). Expected failures — missing arguments, service rejection,
/// transport errors — come back as [`LicenseError`] values; no operation
/// panics on them.
#[derive(Debug, Clone)]
pub struct LicenseClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
    debug: bool,
}

/// Builder for [`LicenseClient`].
#[derive(Debug, Default)]
pub struct LicenseClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    debug: bool,
}

impl LicenseClientBuilder {
    /// Overrides the API base URL. Intended for tests against a local mock
    /// server; defaults to [`DEFAULT_API_URL`].
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets a per-request timeout. When unset, the transport's own default
    /// applies (no timeout is invented here).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enables verbose diagnostics: raw response bodies (and the derived
    /// instance name during activation) are emitted at `debug` level.
    /// Observational only; never alters results.
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Builds the client.
    #[must_use]
    pub fn build(self) -> LicenseClient {
        LicenseClient {
            http: reqwest::Client::new(),
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            timeout: self.timeout,
            debug: self.debug,
        }
    }
}

impl LicenseClient {
    /// Creates a client with default settings (production API URL, debug off,
    /// transport-default timeout).
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a [`LicenseClientBuilder`].
    #[must_use]
    pub fn builder() -> LicenseClientBuilder {
        LicenseClientBuilder::default()
    }

    /// Activates a license key, binding it to an installation instance.
    ///
    /// When `instance_name` is `None`, a name is derived from the host's
    /// OS, hostname and architecture (see [`SystemAttributes`]).
    ///
    /// On success the returned [`LicenseInfo`] carries the instance id the
    /// service issued; callers should retain it for later validation and
    /// deactivation. A `None` expiration means the license never expires.
    pub async fn activate(
        &self,
        license_key: &str,
        instance_name: Option<&str>,
    ) -> LicenseResult<LicenseInfo> {
        if license_key.is_empty() {
            return Err(LicenseError::MissingLicenseKey);
        }

        let instance_name = match instance_name {
            Some(name) => name.to_string(),
            None => {
                let attrs = SystemAttributes::collect();
                let name = attrs.instance_name();
                if self.debug {
                    debug!(?attrs, %name, "derived instance name");
                }
                name
            }
        };

        let form = [
            ("license_key", license_key),
            ("instance_name", instance_name.as_str()),
        ];
        let res: ActivationResponse = self.post_form("activate", &form).await?;

        if res.activated {
            Ok(LicenseInfo {
                license_key: license_key.to_string(),
                instance_id: res.instance.and_then(|i| i.id),
                status: res.license_key.as_ref().and_then(|k| k.status.clone()),
                expires_at: res.license_key.and_then(|k| k.expires_at),
                product_name: res.meta.and_then(|m| m.product_name),
            })
        } else {
            Err(LicenseError::Rejected(
                res.error
                    .unwrap_or_else(|| DEFAULT_ACTIVATION_ERROR.to_string()),
            ))
        }
    }

    /// Validates a license key, optionally scoped to one instance.
    ///
    /// The `instance_id` field is omitted from the request entirely when not
    /// provided, never sent empty.
    pub async fn validate(
        &self,
        license_key: &str,
        instance_id: Option<&str>,
    ) -> LicenseResult<ValidationInfo> {
        if license_key.is_empty() {
            return Err(LicenseError::MissingLicenseKey);
        }

        let mut form = vec![("license_key", license_key)];
        if let Some(id) = instance_id.filter(|id| !id.is_empty()) {
            form.push(("instance_id", id));
        }
        let res: ValidationResponse = self.post_form("validate", &form).await?;

        if res.valid {
            Ok(ValidationInfo {
                valid: true,
                product_name: res.meta.as_ref().and_then(|m| m.product_name.clone()),
                status: res.license_key.as_ref().and_then(|k| k.status.clone()),
                expires_at: res.license_key.and_then(|k| k.expires_at),
                customer_name: res.meta.as_ref().and_then(|m| m.customer_name.clone()),
                customer_email: res.meta.and_then(|m| m.customer_email),
            })
        } else {
            Err(LicenseError::Rejected(
                res.error
                    .unwrap_or_else(|| DEFAULT_VALIDATION_ERROR.to_string()),
            ))
        }
    }

    /// Deactivates an instance binding, freeing an activation slot.
    ///
    /// Both arguments are required; an empty key or instance id fails locally
    /// without any network call.
    pub async fn deactivate(&self, license_key: &str, instance_id: &str) -> LicenseResult<()> {
        if license_key.is_empty() {
            return Err(LicenseError::MissingLicenseKey);
        }
        if instance_id.is_empty() {
            return Err(LicenseError::MissingInstanceId);
        }

        let form = [("license_key", license_key), ("instance_id", instance_id)];
        let res: DeactivationResponse = self.post_form("deactivate", &form).await?;

        if res.deactivated {
            Ok(())
        } else {
            Err(LicenseError::Rejected(
                res.error
                    .unwrap_or_else(|| DEFAULT_DEACTIVATION_ERROR.to_string()),
            ))
        }
    }

    /// Quick licensed-or-not check: validates and discards the detail.
    /// Any failure — missing key, rejection, transport error — is `false`.
    pub async fn is_licensed(&self, license_key: &str, instance_id: Option<&str>) -> bool {
        self.validate(license_key, instance_id).await.is_ok()
    }

    /// Single point of network I/O: POSTs form fields to `{base_url}/{path}`
    /// and parses the body as JSON. The body is parsed regardless of HTTP
    /// status, since the service returns structured error bodies on non-2xx.
    /// Transport and parse failures both convert to [`LicenseError::Network`]
    /// here.
    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> LicenseResult<T> {
        let url = format!("{}/{path}", self.base_url);
        let mut req = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .form(form);
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let body = req
            .send()
            .await
            .map_err(|e| LicenseError::Network(e.to_string()))?
            .text()
            .await
            .map_err(|e| LicenseError::Network(e.to_string()))?;

        if self.debug {
            debug!(%url, %body, "license API response");
        }

        serde_json::from_str(&body).map_err(|e| LicenseError::Network(e.to_string()))
    }
}

impl Default for LicenseClient {
    fn default() -> Self {
        Self::new()
    }
}
