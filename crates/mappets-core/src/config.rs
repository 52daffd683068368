use crate::app_config::{
    Environment, SiteConfig, DEFAULT_GEOLOCATION_TIMEOUT_SECS, DEFAULT_RELAY_ENDPOINT,
    DEFAULT_RELAY_USER_AGENT, DEFAULT_SUPPORT_EMAIL, DEFAULT_TILE_ATTRIBUTION,
    DEFAULT_TILE_URL_TEMPLATE,
};
use crate::validation::is_valid_email;
use crate::ConfigError;

/// Load site configuration, applying `MAPPETS_*` overrides on top of the
/// built-in literals.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if an override is present but malformed.
pub fn load_site_config() -> Result<SiteConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_site_config_from_env()
}

/// Load site configuration from environment variables already in the process.
///
/// Unlike [`load_site_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if an override is present but malformed.
pub fn load_site_config_from_env() -> Result<SiteConfig, ConfigError> {
    build_site_config(|key| std::env::var(key))
}

/// Build site configuration using the provided env-var lookup function.
///
/// Every variable is optional; an absent one falls back to the literal the
/// site ships with.
fn build_site_config<F>(lookup: F) -> Result<SiteConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.parse::<u64>().map_err(|e| invalid(var, e.to_string())),
            Err(_) => Ok(default),
        }
    };

    let env = parse_environment(&or_default("MAPPETS_ENV", "development"))?;
    let log_level = or_default("MAPPETS_LOG_LEVEL", "info");

    let relay_endpoint = or_default("MAPPETS_RELAY_ENDPOINT", DEFAULT_RELAY_ENDPOINT);
    if !(relay_endpoint.starts_with("https://") || relay_endpoint.starts_with("http://")) {
        return Err(invalid(
            "MAPPETS_RELAY_ENDPOINT",
            format!("expected an http(s) URL, got '{relay_endpoint}'"),
        ));
    }

    let support_email = or_default("MAPPETS_SUPPORT_EMAIL", DEFAULT_SUPPORT_EMAIL);
    if !is_valid_email(&support_email) {
        return Err(invalid(
            "MAPPETS_SUPPORT_EMAIL",
            format!("'{support_email}' is not an email address"),
        ));
    }

    let relay_user_agent = or_default("MAPPETS_RELAY_USER_AGENT", DEFAULT_RELAY_USER_AGENT);

    let relay_timeout_secs = match lookup("MAPPETS_RELAY_TIMEOUT_SECS") {
        Ok(raw) => {
            let secs = raw
                .parse::<u64>()
                .map_err(|e| invalid("MAPPETS_RELAY_TIMEOUT_SECS", e.to_string()))?;
            if secs == 0 {
                return Err(invalid(
                    "MAPPETS_RELAY_TIMEOUT_SECS",
                    "must be greater than zero".to_string(),
                ));
            }
            Some(secs)
        }
        Err(_) => None,
    };

    let tile_url_template = or_default("MAPPETS_TILE_URL_TEMPLATE", DEFAULT_TILE_URL_TEMPLATE);
    let tile_attribution = or_default("MAPPETS_TILE_ATTRIBUTION", DEFAULT_TILE_ATTRIBUTION);
    let geolocation_timeout_secs = parse_u64(
        "MAPPETS_GEOLOCATION_TIMEOUT_SECS",
        DEFAULT_GEOLOCATION_TIMEOUT_SECS,
    )?;

    Ok(SiteConfig {
        env,
        log_level,
        relay_endpoint,
        support_email,
        relay_user_agent,
        relay_timeout_secs,
        tile_url_template,
        tile_attribution,
        geolocation_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MAPPETS_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
