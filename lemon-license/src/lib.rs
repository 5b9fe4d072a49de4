//! Lemon Squeezy license management.
//!
//! This crate wraps the Lemon Squeezy licensing API with three operations:
//! - Activation: bind a license key to an installation instance
//! - Validation: check a key's (and optionally an instance's) standing
//! - Deactivation: release an instance binding, freeing an activation slot
//!
//! # Design Principles
//!
//! - **Stateless per call**: the client holds no license state between calls;
//!   callers keep whatever they need (typically the activated instance id)
//! - **No surprises on failure**: precondition, business and transport
//!   failures all surface as [`LicenseError`] values, never panics
//! - **Defensive parsing**: absent fields in the service response map to
//!   `None`, never a parse error
//!
//! # Example
//!
//! ```no_run
//! use lemon_license::LicenseClient;
//!
//! # async fn run() -> Result<(), lemon_license::LicenseError> {
//! let client = LicenseClient::new();
//! let info = client.activate("XXXX-XXXX-XXXX-XXXX", None).await?;
//! println!("activated instance {:?}", info.instance_id);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod instance;
mod response;
mod types;

pub use client::{LicenseClient, LicenseClientBuilder, DEFAULT_API_URL};
pub use error::{LicenseError, LicenseResult};
pub use instance::SystemAttributes;
pub use types::{LicenseInfo, ValidationInfo};
