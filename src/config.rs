use anyhow::{anyhow, Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{path::Path, str::FromStr};
use url::ParseError;

const GITHUB_V3_BASE_URL: &str = "https://api.github.com/";
const GITHUB_V3_ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const DEFAULT_USER_AGENT: &str = "gitter";
const DEFAULT_LOG_LEVEL: &str = "info";

const DEFAULT_CONFIG_FILE_NAME: &str = "gitter.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default = "Config::default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            github: GithubConfig::default(),
            log_level: Config::default_log_level(),
        }
    }
}

impl Config {
    /// Loads the config from `path`, or from `gitter.yaml` in the working
    /// directory when no path is given. A missing default file is not an error.
    pub async fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Config::read(path).await,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE_NAME);
                if tokio::fs::try_exists(path).await? {
                    Config::read(path).await
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    async fn read(path: &Path) -> Result<Config> {
        let config_string = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Cannot read config file {}", path.display()))?;

        let config = serde_yaml::from_str::<Config>(&config_string)?;

        Ok(config)
    }

    pub fn log_level(&self) -> Result<log::Level> {
        log::Level::from_str(&self.log_level)
            .map_err(|_| anyhow!("unknown log level: {}", self.log_level))
    }

    fn default_log_level() -> String {
        DEFAULT_LOG_LEVEL.to_owned()
    }
}

/// Immutable settings for talking to the GitHub REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "GithubConfig::default_api_url")]
    pub api_url: String,
    #[serde(default = "GithubConfig::default_accept")]
    pub accept: String,
    #[serde(default = "GithubConfig::default_user_agent")]
    pub user_agent: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        GithubConfig {
            api_url: GithubConfig::default_api_url(),
            accept: GithubConfig::default_accept(),
            user_agent: GithubConfig::default_user_agent(),
        }
    }
}

impl GithubConfig {
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        GithubConfig {
            api_url: api_url.into(),
            ..GithubConfig::default()
        }
    }

    // GET {api_url}/repos/:owner/:repo/releases/latest
    // owner and repo are percent-encoded as single path segments.
    pub fn latest_release_url(&self, owner: &str, repo: &str) -> Result<Url, ParseError> {
        let mut url = Url::parse(&self.api_url)?;

        url.path_segments_mut()
            .map_err(|_| ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(["repos", owner, repo, "releases", "latest"]);

        Ok(url)
    }

    fn default_api_url() -> String {
        GITHUB_V3_BASE_URL.to_owned()
    }

    fn default_accept() -> String {
        GITHUB_V3_ACCEPT_HEADER.to_owned()
    }

    fn default_user_agent() -> String {
        DEFAULT_USER_AGENT.to_owned()
    }
}
