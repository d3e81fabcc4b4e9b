use crate::{
    config::GithubConfig,
    error::{Error, Result},
    http::HttpClient,
};
use once_cell::sync::Lazy;

static CLIENT: Lazy<GithubClient> = Lazy::new(GithubClient::default);

/// Shared client against the public API with the default configuration.
pub fn instance() -> &'static GithubClient {
    &CLIENT
}

#[derive(Clone, Debug, Default)]
pub struct GithubClient {
    http: HttpClient,
    config: GithubConfig,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> Self {
        GithubClient {
            http: HttpClient::new(),
            config,
        }
    }

    pub(super) async fn get_latest_release(&self, owner: &str, repo: &str) -> Result<Vec<u8>> {
        let uri = self
            .config
            .latest_release_url(owner, repo)
            .map_err(|cause| Error::IoError {
                message: format!("Invalid api url {}", self.config.api_url),
                cause: Box::new(cause),
            })?;

        self.http.get_bytes(uri.as_str(), &self.config).await
    }
}
