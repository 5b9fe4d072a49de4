//! Simplified result records returned to callers.

use serde::{Deserialize, Serialize};

/// License details returned by a successful activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseInfo {
    /// The activated license key, passed through verbatim.
    pub license_key: String,
    /// Instance identifier issued by the service; scopes later validate and
    /// deactivate calls to this installation.
    pub instance_id: Option<String>,
    /// License status as reported by the service (e.g. `active`).
    pub status: Option<String>,
    /// Expiration timestamp; `None` means the license never expires.
    pub expires_at: Option<String>,
    /// Name of the product the key belongs to.
    pub product_name: Option<String>,
}

/// License details returned by a successful validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationInfo {
    /// Always `true` on a successful validation.
    pub valid: bool,
    /// Name of the product the key belongs to.
    pub product_name: Option<String>,
    /// License status as reported by the service.
    pub status: Option<String>,
    /// Expiration timestamp; `None` means the license never expires.
    pub expires_at: Option<String>,
    /// Name of the customer the key was issued to.
    pub customer_name: Option<String>,
    /// Email of the customer the key was issued to.
    pub customer_email: Option<String>,
}
