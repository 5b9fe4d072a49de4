//! Wire types for the licensing API responses.
//!
//! Every field is optional and every struct tolerates absent members, so a
//! sparse or error-shaped body still deserializes. The success flags default
//! to `false` when the service omits them.

use serde::Deserialize;

/// Response body of `POST /activate`.
#[derive(Debug, Deserialize)]
pub(crate) struct ActivationResponse {
    #[serde(default)]
    pub activated: bool,
    pub error: Option<String>,
    pub instance: Option<InstancePayload>,
    pub license_key: Option<LicenseKeyPayload>,
    pub meta: Option<MetaPayload>,
}

/// Response body of `POST /validate`.
#[derive(Debug, Deserialize)]
pub(crate) struct ValidationResponse {
    #[serde(default)]
    pub valid: bool,
    pub error: Option<String>,
    pub license_key: Option<LicenseKeyPayload>,
    pub meta: Option<MetaPayload>,
}

/// Response body of `POST /deactivate`.
#[derive(Debug, Deserialize)]
pub(crate) struct DeactivationResponse {
    #[serde(default)]
    pub deactivated: bool,
    pub error: Option<String>,
}

/// The `instance` object of an activation response.
#[derive(Debug, Deserialize)]
pub(crate) struct InstancePayload {
    pub id: Option<String>,
}

/// The `license_key` object nested in activation and validation responses.
#[derive(Debug, Deserialize)]
pub(crate) struct LicenseKeyPayload {
    pub status: Option<String>,
    pub expires_at: Option<String>,
}

/// The `meta` object nested in activation and validation responses.
#[derive(Debug, Deserialize)]
pub(crate) struct MetaPayload {
    pub product_name: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
}
