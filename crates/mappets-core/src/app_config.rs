/// Deployment environment the site is running in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Relay address shared by every form on the site.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formsubmit.co/ajax/equipo@mappets.com.ar";

/// Human fallback contact shown whenever a submission cannot be delivered.
pub const DEFAULT_SUPPORT_EMAIL: &str = "equipo@mappets.com.ar";

pub const DEFAULT_RELAY_USER_AGENT: &str = "mappets-site/0.1 (contact-forms)";

pub const DEFAULT_TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const DEFAULT_GEOLOCATION_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct SiteConfig {
    pub env: Environment,
    pub log_level: String,
    pub relay_endpoint: String,
    pub support_email: String,
    pub relay_user_agent: String,
    /// `None` keeps the relay call unbounded, which is the observed site behavior.
    pub relay_timeout_secs: Option<u64>,
    pub tile_url_template: String,
    pub tile_attribution: String,
    pub geolocation_timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            env: Environment::Development,
            log_level: "info".to_string(),
            relay_endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            support_email: DEFAULT_SUPPORT_EMAIL.to_string(),
            relay_user_agent: DEFAULT_RELAY_USER_AGENT.to_string(),
            relay_timeout_secs: None,
            tile_url_template: DEFAULT_TILE_URL_TEMPLATE.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
            geolocation_timeout_secs: DEFAULT_GEOLOCATION_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("relay_endpoint", &self.relay_endpoint)
            .field("support_email", &self.support_email)
            .field("relay_user_agent", &self.relay_user_agent)
            .field("relay_timeout_secs", &self.relay_timeout_secs)
            .field("tile_url_template", &self.tile_url_template)
            .field("tile_attribution", &self.tile_attribution)
            .field("geolocation_timeout_secs", &self.geolocation_timeout_secs)
            .finish()
    }
}
