use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use parkwatch_core::{AppError, ClientCredentials};
use tracing_subscriber::EnvFilter;
use url::Url;

pub const DEFAULT_CORS_ORIGIN: &str = "https://occupation-integration.ipcontrol.online";
pub const DEFAULT_AUTH_SCOPE: &str = "ParkBaseApi";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub cors_origin: String,
    pub credentials: ClientCredentials,
    pub auth_url: Url,
    pub auth_scope: String,
    pub api_url: Url,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let api_host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_owned());
        let api_port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|error| AppError::Validation(format!("invalid PORT '{value}': {error}")))?,
            None => 3000,
        };

        let cors_origin = lookup("CORS_ORIGIN")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_owned());
        let auth_scope = lookup("AUTH_SCOPE")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AUTH_SCOPE.to_owned());

        let credentials = ClientCredentials::new(
            required_non_empty(&lookup, "TENANT_ID")?,
            required_non_empty(&lookup, "API_KEY")?,
        )?;
        let auth_url = required_url(&lookup, "AUTH_URL")?;
        let api_url = required_url(&lookup, "API_URL")?;

        Ok(Self {
            api_host,
            api_port,
            cors_origin,
            credentials,
            auth_url,
            auth_scope,
            api_url,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_non_empty(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<String, AppError> {
    let value = lookup(name).ok_or_else(|| AppError::Validation(format!("{name} is required")))?;
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }

    Ok(value)
}

fn required_url(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Url, AppError> {
    let value = required_non_empty(lookup, name)?;
    Url::parse(value.trim())
        .map_err(|error| AppError::Validation(format!("invalid {name} '{value}': {error}")))
}
