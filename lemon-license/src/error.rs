//! Error types for license operations.

use thiserror::Error;

/// Errors produced by license operations.
///
/// Three classes, matching how failures arise:
/// - missing arguments, caught locally before any network I/O
///   ([`MissingLicenseKey`](Self::MissingLicenseKey),
///   [`MissingInstanceId`](Self::MissingInstanceId))
/// - explicit rejection by the licensing service
///   ([`Rejected`](Self::Rejected))
/// - transport or parse failure during the HTTP round trip
///   ([`Network`](Self::Network))
#[derive(Debug, Error)]
pub enum LicenseError {
    /// No license key was supplied.
    #[error("no license key provided")]
    MissingLicenseKey,

    /// No instance ID was supplied where one is required.
    #[error("no instance ID provided")]
    MissingInstanceId,

    /// The service reported the operation as not activated / not valid /
    /// not deactivated. Carries the service's `error` message when present,
    /// otherwise a per-operation default.
    #[error("{0}")]
    Rejected(String),

    /// Network error, timeout, or malformed response body.
    #[error("network error: {0}")]
    Network(String),
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
