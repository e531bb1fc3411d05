use crate::error::GsfaError;
use derive_builder::Builder;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

pub const DEFAULT_HOST: &str = "atcoder.jp";
pub const DEFAULT_ROOT: &str = "gsfa";
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(1000);
pub const DEFAULT_USER_AGENT: &str = concat!("gsfa/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct GsfaConfig {
    #[builder(default = "DEFAULT_HOST.to_string()")]
    host: String,
    #[builder(default = "PathBuf::from(DEFAULT_ROOT)")]
    root: PathBuf,
    /// Wait after each problem page navigation before reading samples.
    #[builder(default = "DEFAULT_SETTLE")]
    settle: Duration,
    #[builder(default = "DEFAULT_USER_AGENT.to_string()")]
    user_agent: String,
}

/// Optional TOML layer; unset keys fall through to the builder defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub root: Option<PathBuf>,
    pub settle_ms: Option<u64>,
    pub user_agent: Option<String>,
}

impl GsfaConfig {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settle(&self) -> Duration {
        self.settle
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn tasks_url(&self, contest: &str) -> String {
        format!("https://{}/contests/{}/tasks", self.host, contest)
    }

    pub fn contest_home(&self, contest: &str) -> PathBuf {
        self.root.join(contest)
    }
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, GsfaError> {
        let content = fs::read_to_string(path).map_err(|e| GsfaError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| GsfaError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn apply(&self, builder: &mut GsfaConfigBuilder) {
        if let Some(host) = &self.host {
            builder.host(host.clone());
        }
        if let Some(root) = &self.root {
            builder.root(root.clone());
        }
        if let Some(ms) = self.settle_ms {
            builder.settle(Duration::from_millis(ms));
        }
        if let Some(ua) = &self.user_agent {
            builder.user_agent(ua.clone());
        }
    }
}
