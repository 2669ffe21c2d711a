use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::modules::time_entries::core::policy::{OverlapScope, TimeEntryPolicy};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_PROJECTS_ROOT: &str = "/srv/stech/projects";
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://192.168.178.83:8080",
    "http://192.168.178.83",
    "http://localhost:8080",
];

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub projects_root: PathBuf,
    pub cors_origins: Vec<String>,
    pub policy: TimeEntryPolicy,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the `BACKOFFICE_*` variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = lookup("BACKOFFICE_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BACKOFFICE_BIND_ADDR must be a socket address")?;

        let projects_root = lookup("BACKOFFICE_PROJECTS_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECTS_ROOT));

        let cors_origins = match lookup("BACKOFFICE_CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|origin| origin.to_string()).collect(),
        };

        let overlap_scope = match lookup("BACKOFFICE_OVERLAP_SCOPE") {
            Some(raw) => raw
                .parse::<OverlapScope>()
                .map_err(anyhow::Error::msg)
                .context("BACKOFFICE_OVERLAP_SCOPE must be same_day or any_day")?,
            None => OverlapScope::default(),
        };

        let running_requires_unsubmitted = match lookup("BACKOFFICE_RUNNING_REQUIRES_UNSUBMITTED") {
            Some(raw) => parse_bool(&raw)
                .context("BACKOFFICE_RUNNING_REQUIRES_UNSUBMITTED must be true or false")?,
            None => TimeEntryPolicy::default().running_requires_unsubmitted,
        };

        Ok(Self {
            bind_addr,
            projects_root,
            cors_origins,
            policy: TimeEntryPolicy {
                overlap_scope,
                running_requires_unsubmitted,
            },
        })
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => anyhow::bail!("not a boolean: {other}"),
    }
}
