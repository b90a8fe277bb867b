//! Site configuration.
//!
//! Values come from the process environment (see [`SiteConfig::from_env`]);
//! the `numerix_server` binary lets command-line flags override them.

use std::path::PathBuf;

/// Default recipient of contact notifications.
pub const DEFAULT_CONTACT_TO: &str = "info@numerixgmbh.ch";

/// Default body of `GET /api/ping`.
pub const DEFAULT_PING_MESSAGE: &str = "ping";

/// Email relay configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    /// Resend API key (`RESEND_API_KEY`)
    pub api_key: String,
    /// Sender address (`RESEND_FROM_EMAIL`)
    pub from: String,
    /// Operator address receiving notifications (`CONTACT_TO_EMAIL`)
    pub to: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MailConfig {
    /// Create an unconfigured mail setup with the default recipient.
    pub fn new() -> Self {
        Self {
            api_key: String::new(),
            from: String::new(),
            to: DEFAULT_CONTACT_TO.to_string(),
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Set the sender address.
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    /// Set the operator address.
    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = to.into();
        self
    }

    /// Both the API key and the sender address are present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.from.is_empty()
    }
}

/// Complete site configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Email relay settings
    pub mail: MailConfig,
    /// Body of the ping endpoint (`PING_MESSAGE`)
    pub ping_message: String,
    /// Bind host (`NUMERIX_HOST`)
    pub host: String,
    /// Bind port (`NUMERIX_PORT`)
    pub port: u16,
    /// Built front-end assets to serve for non-API paths (`NUMERIX_STATIC_DIR`)
    pub static_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteConfig {
    /// Create configuration with defaults.
    pub fn new() -> Self {
        Self {
            mail: MailConfig::new(),
            ping_message: DEFAULT_PING_MESSAGE.to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: None,
        }
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset variables keep their defaults; an unparsable port is logged and
    /// ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(key) = lookup("RESEND_API_KEY") {
            config.mail.api_key = key;
        }
        if let Some(from) = lookup("RESEND_FROM_EMAIL") {
            config.mail.from = from;
        }
        if let Some(to) = lookup("CONTACT_TO_EMAIL") {
            config.mail.to = to;
        }
        if let Some(ping) = lookup("PING_MESSAGE") {
            config.ping_message = ping;
        }
        if let Some(host) = lookup("NUMERIX_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("NUMERIX_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => log::warn!("Ignoring invalid NUMERIX_PORT value {:?}", port),
            }
        }
        if let Some(dir) = lookup("NUMERIX_STATIC_DIR").filter(|d| !d.is_empty()) {
            config.static_dir = Some(PathBuf::from(dir));
        }

        config
    }

    /// Replace the mail settings.
    pub fn with_mail(mut self, mail: MailConfig) -> Self {
        self.mail = mail;
        self
    }

    /// Set the ping message.
    pub fn with_ping_message(mut self, message: impl Into<String>) -> Self {
        self.ping_message = message.into();
        self
    }

    /// Set the bind host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the bind port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Serve static assets from `dir`.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
