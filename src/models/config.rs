//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
/// Server settings consumed once at startup.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Key material for the session/flash cookies; at least 64 bytes.
    pub secret: String,
    /// Base URL of the Progres backend, e.g. `https://progres.mesrs.dz/api`.
    pub api_base_url: String,
    /// The discharge ("quitus") endpoint lives on a separate host in some
    /// deployments; falls back to `api_base_url` when unset.
    pub discharge_base_url: Option<String>,
}
