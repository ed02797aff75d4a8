use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level application configuration shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub server: ServerConfig,
    pub mail: MailConfig,
    pub exchange: ExchangeConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    /// Externally reachable base URL, used when building confirmation links.
    pub public_url: String,
}

/// Mail delivery configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub mode: MailMode,
    pub sender: String,
}

/// Which mail transport to wire at startup.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailMode {
    /// Keep outgoing mail in an in-process outbox (development mode).
    #[default]
    Capture,
    /// Emit outgoing mail to the log only.
    Log,
}

/// Exchange policy knobs applied by the web layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExchangeConfig {
    /// Refuse removal of the administrator participant over HTTP.
    /// The registry itself stays policy-agnostic; this only gates the route.
    pub protect_admin: bool,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 4680,
            public_url: "http://localhost:4680".to_owned(),
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self { mode: MailMode::Capture, sender: "noreply@localhost".to_owned() }
    }
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self { protect_admin: true }
    }
}
