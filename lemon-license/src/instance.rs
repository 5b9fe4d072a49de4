//! Instance name derivation from host attributes.
//!
//! When the caller activates without supplying an instance name, one is
//! derived from the host's OS, hostname and CPU architecture. The derivation
//! is a pure function of a [`SystemAttributes`] value, so it stays
//! deterministic and testable without querying the real host. Names are not
//! guaranteed unique; collisions are the caller's risk.

use serde::{Deserialize, Serialize};
use std::env;

/// Host attributes an instance name is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemAttributes {
    /// Operating system name.
    pub system: String,
    /// Hostname.
    pub node: String,
    /// CPU architecture.
    pub machine: String,
}

impl SystemAttributes {
    /// Collects attributes from the current host.
    #[must_use]
    pub fn collect() -> Self {
        Self {
            system: env::consts::OS.to_string(),
            node: get_hostname(),
            machine: env::consts::ARCH.to_string(),
        }
    }

    /// Derives the instance name: `{system}_{node}_{machine}`.
    ///
    /// Deterministic for a fixed attribute triple.
    #[must_use]
    pub fn instance_name(&self) -> String {
        format!("{}_{}_{}", self.system, self.node, self.machine)
    }
}

/// Gets the machine hostname.
fn get_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string())
}
