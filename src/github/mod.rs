pub mod github_client;
pub mod handler;
pub mod release;

pub use github_client::GithubClient;
pub use release::{parse, ArchiveFormat, Release};

use crate::error::Result;

/// Fetches and decodes the latest release of `owner/repo` from the public API.
///
/// Always talks to `https://api.github.com/`; build a client with
/// [`GithubClient::new`] to target another endpoint.
pub async fn fetch_latest_release(owner: &str, repo: &str) -> Result<Release> {
    github_client::instance()
        .repo(owner, repo)
        .releases()
        .latest()
        .await
}

/// Resolves the source tarball URL of the latest release of `owner/repo`.
///
/// Same default client as [`fetch_latest_release`].
pub async fn fetch_latest_tarball_url(owner: &str, repo: &str) -> Result<String> {
    github_client::instance()
        .repo(owner, repo)
        .releases()
        .latest_tarball_url()
        .await
}
