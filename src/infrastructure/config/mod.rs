use serde::Deserialize;
use std::env;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use crate::domain::instagram::AccessToken;

pub const DEFAULT_GRAPH_URL: &str = "https://graph.instagram.com";
pub const DEFAULT_PROFILE_HANDLE: &str = "rangelvalleypainting";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    pub instagram: InstagramConfig,
    pub gallery: GalleryConfig,
}

/// Feed endpoint side: credential and upstream location
#[derive(Debug, Clone, Deserialize)]
pub struct InstagramConfig {
    pub access_token: Option<AccessToken>,
    pub graph_url: String,
    pub timeout_secs: u64,
}

/// Gallery side: where it fetches the feed and which profile it links to
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryConfig {
    pub feed_url: String,
    pub fetch_timeout_secs: u64,
    pub profile_handle: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let feed_url =
            env::var("GALLERY_FEED_URL").unwrap_or_else(|_| default_feed_url(&host, port));

        let config = Config {
            host,
            port,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            instagram: InstagramConfig {
                access_token: env::var("INSTAGRAM_TOKEN").ok().map(AccessToken::new),
                graph_url: env::var("INSTAGRAM_GRAPH_URL")
                    .unwrap_or_else(|_| DEFAULT_GRAPH_URL.to_string()),
                timeout_secs: env::var("INSTAGRAM_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()?,
            },
            gallery: GalleryConfig {
                feed_url,
                fetch_timeout_secs: env::var("GALLERY_FETCH_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()?,
                profile_handle: env::var("INSTAGRAM_HANDLE")
                    .unwrap_or_else(|_| DEFAULT_PROFILE_HANDLE.to_string()),
            },
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

impl InstagramConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn is_configured(&self) -> bool {
        self.access_token
            .as_ref()
            .is_some_and(|token| token.is_usable())
    }
}

impl GalleryConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

/// Feed endpoint of this same server. A wildcard bind address is reached
/// through loopback of the same family.
fn default_feed_url(host: &str, port: u16) -> String {
    let authority = match host.parse::<IpAddr>() {
        Ok(IpAddr::V4(ip)) if ip.is_unspecified() => Ipv4Addr::LOCALHOST.to_string(),
        Ok(IpAddr::V6(ip)) if ip.is_unspecified() => format!("[{}]", Ipv6Addr::LOCALHOST),
        Ok(IpAddr::V6(ip)) => format!("[{}]", ip),
        _ => host.to_string(),
    };
    format!("http://{}:{}/api/instagram", authority, port)
}
