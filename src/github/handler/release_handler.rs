use crate::{
    error::{Error, Result},
    github::{
        github_client::GithubClient,
        release::{self, ArchiveFormat, Release},
    },
};

pub struct ReleaseHandler<'a> {
    client: &'a GithubClient,
    owner: String,
    repo: String,
}

impl<'a> ReleaseHandler<'a> {
    pub fn new(client: &'a GithubClient, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        ReleaseHandler {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Raw body of the latest release, undecoded.
    pub async fn latest_raw(&self) -> Result<Vec<u8>> {
        self.client
            .get_latest_release(&self.owner, &self.repo)
            .await
    }

    pub async fn latest(&self) -> Result<Release> {
        let body = self.latest_raw().await?;
        let release = release::parse(&body)?;

        log::debug!(
            "latest release of {}/{}: {:?}",
            self.owner,
            self.repo,
            release.name
        );

        Ok(release)
    }

    pub async fn latest_tarball_url(&self) -> Result<String> {
        self.latest_archive_url(ArchiveFormat::TarGz).await
    }

    /// Fails with [`Error::NotFoundError`] when the release carries no URL
    /// for the requested archive format.
    pub async fn latest_archive_url(&self, format: ArchiveFormat) -> Result<String> {
        let release = self.latest().await?;
        let url = release.archive_url(format);

        if url.is_empty() {
            return Err(Error::NotFoundError {
                archive: format.archive_name(),
                repo: self.repo.to_owned(),
            });
        }

        Ok(url.to_owned())
    }
}
